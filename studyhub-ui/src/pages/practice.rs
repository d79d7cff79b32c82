//! Practice Page
//!
//! Topic → scenario list → scenario detail, each step one request.

use leptos::*;

use studyhub::{practice, status, Page, PracticeTemplate, Topic};

use crate::api;
use crate::state::global::use_global_state;

/// What the topic selector is showing
#[derive(Clone)]
enum TopicOptions {
    Loading,
    Loaded(Vec<Topic>),
    Failed,
}

/// What the scenario list is showing
#[derive(Clone)]
enum ScenarioList {
    Empty,
    Loaded(Vec<PracticeTemplate>),
    Failed,
}

/// Scenario detail panel contents
#[derive(Clone)]
enum Detail {
    Scenario { id: i64, text: String },
    Failed,
}

/// Practice page component
#[component]
pub fn Practice() -> impl IntoView {
    let (topics, set_topics) = create_signal(TopicOptions::Loading);
    let (scenarios, set_scenarios) = create_signal(ScenarioList::Empty);
    let (detail, set_detail) = create_signal(None::<Detail>);

    spawn_local(async move {
        match api::fetch_practice_topics().await {
            Ok(list) => set_topics.set(TopicOptions::Loaded(list)),
            Err(e) => {
                api::log_error("Failed to load practice topics", &e);
                set_topics.set(TopicOptions::Failed);
            }
        }
    });

    let on_topic_change = move |ev: web_sys::Event| {
        set_scenarios.set(ScenarioList::Empty);
        set_detail.set(None);

        let Ok(topic_id) = event_target_value(&ev).parse::<i64>() else {
            return;
        };

        spawn_local(async move {
            match api::fetch_templates_for_topic(topic_id).await {
                Ok(list) => set_scenarios.set(ScenarioList::Loaded(list)),
                Err(e) => {
                    api::log_error("Failed to load scenarios", &e);
                    set_scenarios.set(ScenarioList::Failed);
                }
            }
        });
    };

    let show_detail = move |id: i64| {
        spawn_local(async move {
            match api::fetch_template(id).await {
                Ok(t) => set_detail.set(Some(Detail::Scenario {
                    id,
                    text: t.template_text,
                })),
                Err(e) => {
                    api::log_error("Failed to load scenario", &e);
                    set_detail.set(Some(Detail::Failed));
                }
            }
        });
    };

    view! {
        <div class="page-body">
            <h1>"Practice Scenarios"</h1>

            <label for="practice-topic">"Topic"</label>
            <select id="practice-topic" on:change=on_topic_change>
                {move || match topics.get() {
                    TopicOptions::Loading => view! {
                        <option value="">{status::SELECT_TOPIC}</option>
                    }.into_view(),
                    TopicOptions::Failed => view! {
                        <option value="">{status::TOPICS_FAILED}</option>
                    }.into_view(),
                    TopicOptions::Loaded(list) => view! {
                        <option value="">{status::SELECT_TOPIC}</option>
                        {list.into_iter().map(|t| view! {
                            <option value=t.id.to_string()>{t.name}</option>
                        }).collect_view()}
                    }.into_view(),
                }}
            </select>

            <ul id="practice-list">
                {move || match scenarios.get() {
                    ScenarioList::Empty => view! {}.into_view(),
                    ScenarioList::Failed => view! {
                        <li>{status::SCENARIOS_FAILED}</li>
                    }.into_view(),
                    ScenarioList::Loaded(list) => list.into_iter().map(|t| {
                        let id = t.id;
                        view! {
                            <li class="practice-item">
                                <button type="button" data-id=id on:click=move |_| show_detail(id)>
                                    {practice::list_label(&t)}
                                </button>
                            </li>
                        }
                    }).collect_view(),
                }}
            </ul>

            {move || detail.get().map(|d| view! { <ScenarioDetail detail=d /> })}
        </div>
    }
}

#[component]
fn ScenarioDetail(detail: Detail) -> impl IntoView {
    let state = use_global_state();

    match detail {
        Detail::Scenario { id, text } => {
            let try_ledger = move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                state.ledger_template.set(Some(id));
                state.navigate(Page::Ledger);
            };

            view! {
                <div id="practice-detail">
                    <p id="practice-scenario-text">{text}</p>
                    <a
                        id="practice-try-ledger"
                        href=Page::Ledger.href()
                        data-template-id=id
                        on:click=try_ledger
                    >
                        "Try it in the Ledger Simulator"
                    </a>
                </div>
            }
            .into_view()
        }
        Detail::Failed => view! {
            <div id="practice-detail">
                <p id="practice-scenario-text">{status::SCENARIO_FAILED}</p>
            </div>
        }
        .into_view(),
    }
}
