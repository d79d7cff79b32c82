//! Navigation Component
//!
//! Header navigation bar. Links set `location.hash`; the active link follows
//! the current page.

use leptos::*;

use studyhub::Page;

use crate::state::global::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <a href=Page::Search.href() class="brand">"Accounting Study Hub"</a>
            <div class="nav-links">
                {Page::ALL.into_iter().map(|page| view! { <NavLink page=page /> }).collect_view()}
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    let state = use_global_state();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        state.navigate(page);
    };

    view! {
        <a
            href=page.href()
            data-page=page.slug()
            class="nav-link"
            class:active=move || state.page.get() == page
            on:click=on_click
        >
            {page.title()}
        </a>
    }
}
