//! App Root Component
//!
//! Page chrome, hash navigation and the four page sections.

use chrono::Datelike;
use leptos::*;

use studyhub::Page;

use crate::components::Nav;
use crate::pages::{Dashboard, Ledger, Practice, Search};
use crate::state::global::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_global_state();

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(ev::hashchange, move |_| state.sync_with_hash());

    view! {
        <div class="app">
            <Nav />

            <main>
                <PageSection page=Page::Search><Search /></PageSection>
                <PageSection page=Page::Practice><Practice /></PageSection>
                <PageSection page=Page::Ledger><Ledger /></PageSection>
                <PageSection page=Page::Dashboard><Dashboard /></PageSection>
            </main>

            <Footer />
        </div>
    }
}

/// Section that is only visible while its page is active
#[component]
fn PageSection(page: Page, children: Children) -> impl IntoView {
    let state = use_global_state();

    view! {
        <section id=page.element_id() class="page" class:active=move || state.page.get() == page>
            {children()}
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            "© " <span id="year">{year}</span> " Accounting Study Hub"
        </footer>
    }
}
