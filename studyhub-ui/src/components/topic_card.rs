//! Topic Card Component
//!
//! One search result: title, reference, external links and track buttons.

use leptos::*;

use studyhub::dto::LINK_SEPARATOR;
use studyhub::{status, ProgressStatus, Status, Topic};

use crate::api::{self, ProgressOutcome};
use crate::state::global::use_global_state;

#[component]
pub fn TopicCard(topic: Topic) -> impl IntoView {
    let links = topic.links();
    let topic_id = topic.id;

    view! {
        <li class="result-item">
            <div class="result-title">{topic.display_name().to_string()}</div>
            <div class="result-meta">{topic.reference_line()}</div>

            {(!links.is_empty()).then(|| view! {
                <div class="result-links">
                    {links.into_iter().enumerate().map(|(i, link)| view! {
                        {(i > 0).then_some(LINK_SEPARATOR)}
                        <a href=link.href target="_blank" rel="noopener noreferrer">{link.label}</a>
                    }).collect_view()}
                </div>
            })}

            <div class="result-progress">
                "Track: "
                {ProgressStatus::ALL.into_iter().map(|progress| view! {
                    <TrackButton topic_id=topic_id progress=progress />
                }).collect_view()}
            </div>
        </li>
    }
}

#[component]
fn TrackButton(topic_id: i64, progress: ProgressStatus) -> impl IntoView {
    let state = use_global_state();

    let on_click = move |_| {
        let user_id = state.ensure_user_id();
        spawn_local(async move {
            let outcome = match api::log_progress(&user_id, topic_id, progress).await {
                Ok(ProgressOutcome::Logged) => Status::success(status::PROGRESS_LOGGED),
                Ok(ProgressOutcome::Rejected(code)) => {
                    api::log_error("Progress rejected", &code.to_string());
                    Status::error(status::PROGRESS_REJECTED)
                }
                Err(e) => {
                    api::log_error("Failed to log progress", &e);
                    Status::error(status::PROGRESS_UNREACHABLE)
                }
            };
            state.set_search_status(outcome);
        });
    };

    view! {
        <button type="button" class="progress-btn" on:click=on_click>
            {progress.label()}
        </button>
    }
}
