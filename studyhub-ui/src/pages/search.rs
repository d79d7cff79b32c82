//! Search Page
//!
//! Topic lookup by name, with progress tracking on each result.

use leptos::*;

use studyhub::{search, status, Status, Topic};

use crate::api;
use crate::components::{StatusLine, TopicCard};
use crate::state::global::use_global_state;

/// Search page component
#[component]
pub fn Search() -> impl IntoView {
    let state = use_global_state();

    let (query, set_query) = create_signal(String::new());
    let (results, set_results) = create_signal(Vec::<Topic>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_results.set(Vec::new());

        let raw = query.get();
        let q = match search::normalize_query(&raw) {
            Ok(q) => q.to_string(),
            Err(e) => {
                state.set_search_status(e.status());
                return;
            }
        };

        state.set_search_status(Status::info(status::SEARCHING));
        spawn_local(async move {
            match api::search_topics(&q).await {
                Ok(topics) => {
                    state.set_search_status(search::results_status(&topics));
                    set_results.set(topics);
                }
                Err(e) => {
                    api::log_error("Search failed", &e);
                    state.set_search_status(Status::error(status::SEARCH_UNREACHABLE));
                }
            }
        });
    };

    view! {
        <div class="page-body">
            <h1>"Search Topics"</h1>
            <form id="search-form" on:submit=on_submit>
                <input
                    id="query"
                    type="search"
                    placeholder="e.g. revenue recognition, leases"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>

            <StatusLine id="status-message" status=state.search_status />

            <ul id="results-list">
                <For
                    each=move || results.get()
                    key=|topic| topic.id
                    children=|topic| view! { <TopicCard topic=topic /> }
                />
            </ul>
        </div>
    }
}
