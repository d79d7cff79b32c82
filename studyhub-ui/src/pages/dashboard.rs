//! Dashboard Page
//!
//! Progress counters and recent activity for one user id.

use leptos::*;

use studyhub::{dashboard, status, DashboardSummary, Status};

use crate::api;
use crate::components::StatusLine;
use crate::state::global::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();

    let (user_id, set_user_id) = create_signal(state.stored_user_id().unwrap_or_default());
    let (summary, set_summary) = create_signal(None::<DashboardSummary>);
    let (message, set_message) = create_signal(None::<Status>);

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        state.save_user_id(&value);
        set_user_id.set(value);
    };

    let on_load = move |_| {
        let id = user_id.get_untracked().trim().to_string();
        if id.is_empty() {
            return;
        }
        state.save_user_id(&id);
        set_message.set(None);

        spawn_local(async move {
            match api::fetch_dashboard(&id).await {
                Ok(d) => set_summary.set(Some(d)),
                Err(e) => {
                    api::log_error("Failed to load dashboard", &e);
                    set_summary.set(None);
                    set_message.set(Some(Status::error(status::DASHBOARD_UNREACHABLE)));
                }
            }
        });
    };

    view! {
        <div class="page-body">
            <h1>"Learning Dashboard"</h1>

            <div class="dashboard-controls">
                <label for="dashboard-user-id">"User ID"</label>
                <input
                    id="dashboard-user-id"
                    type="text"
                    placeholder="Your user id"
                    prop:value=move || user_id.get()
                    on:input=move |ev| set_user_id.set(event_target_value(&ev))
                    on:change=on_change
                />
                <button type="button" id="dashboard-load" on:click=on_load>"Load"</button>
            </div>

            <StatusLine status=message />

            {move || summary.get().map(|d| view! { <Summary summary=d /> })}
        </div>
    }
}

#[component]
fn Summary(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div id="dashboard-summary">
            <div class="dashboard-counters">
                <Counter id="d-viewed" label="Viewed" value=summary.topics_viewed />
                <Counter id="d-in-progress" label="In progress" value=summary.topics_in_progress />
                <Counter id="d-mastered" label="Mastered" value=summary.topics_mastered />
            </div>

            <h2>"Recent Activity"</h2>
            <ul id="dashboard-activity">
                {summary.recent_activity.iter().map(|a| view! {
                    <li>{dashboard::activity_line(a)}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Counter(id: &'static str, label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="counter">
            <span class="counter-value" id=id>{value}</span>
            <span class="counter-label">{label}</span>
        </div>
    }
}
