//! Ledger Simulator Page
//!
//! A table of debit/credit rows checked by the server, either for balance
//! alone or against a practice scenario.

use leptos::*;

use studyhub::ledger::{self, LedgerRow};
use studyhub::{practice, status, PracticeTemplate, Status};

use crate::api;
use crate::components::StatusLine;
use crate::state::global::use_global_state;

/// Signals behind one table row
#[derive(Clone, Copy)]
struct RowState {
    key: usize,
    account: RwSignal<String>,
    debit: RwSignal<String>,
    credit: RwSignal<String>,
}

impl RowState {
    fn blank(key: usize) -> Self {
        Self {
            key,
            account: create_rw_signal(String::new()),
            debit: create_rw_signal(String::new()),
            credit: create_rw_signal(String::new()),
        }
    }

    fn snapshot(&self) -> LedgerRow {
        LedgerRow::new(
            self.account.get_untracked(),
            self.debit.get_untracked(),
            self.credit.get_untracked(),
        )
    }
}

/// Ledger page component
#[component]
pub fn Ledger() -> impl IntoView {
    let state = use_global_state();
    let selected = state.ledger_template;

    // None until the template list request settles
    let (templates, set_templates) = create_signal(None::<Vec<PracticeTemplate>>);
    let rows = create_rw_signal(vec![RowState::blank(0)]);
    let next_key = store_value(1usize);
    let (message, set_message) = create_signal(None::<Status>);

    spawn_local(async move {
        match api::fetch_templates().await {
            Ok(list) => set_templates.set(Some(list)),
            Err(e) => {
                api::log_error("Failed to load templates", &e);
                set_templates.set(Some(Vec::new()));
            }
        }
    });

    // The selection always names a loaded template
    create_effect(move |_| {
        let Some(list) = templates.get() else {
            return;
        };
        let current = selected.get();
        if current.is_some() && practice::known_template(current, &list).is_none() {
            selected.set(None);
        }
    });

    let add_row = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        rows.update(|r| r.push(RowState::blank(key)));
    };

    let remove_row = move |key: usize| {
        rows.update(|r| {
            if r.len() > 1 {
                r.retain(|row| row.key != key);
            }
        });
    };

    let on_check = move |_| {
        let snapshot: Vec<LedgerRow> = rows.get_untracked().iter().map(RowState::snapshot).collect();
        let entries = match ledger::collect_entries(&snapshot) {
            Ok(entries) => entries,
            Err(e) => {
                set_message.set(Some(Status::error(e.to_string())));
                return;
            }
        };

        let template_id = selected.get_untracked();
        set_message.set(Some(Status::info(status::CHECKING)));
        spawn_local(async move {
            match api::validate_ledger(template_id, entries).await {
                Ok(response) => set_message.set(Some(ledger::verdict(&response))),
                Err(e) => {
                    api::log_error("Ledger validation failed", &e);
                    set_message.set(Some(Status::error(status::LEDGER_UNREACHABLE)));
                }
            }
        });
    };

    view! {
        <div class="page-body">
            <h1>"Ledger Simulator"</h1>

            <label for="ledger-template">"Scenario"</label>
            <select
                id="ledger-template"
                on:change=move |ev| selected.set(event_target_value(&ev).parse::<i64>().ok())
            >
                <option value="" prop:selected=move || selected.get().is_none()>{status::FREE_FORM}</option>
                {move || templates.get().unwrap_or_default().into_iter().map(|t| {
                    let id = t.id;
                    view! {
                        <option value=id.to_string() prop:selected=move || selected.get() == Some(id)>
                            {practice::option_label(&t)}
                        </option>
                    }
                }).collect_view()}
            </select>

            <table class="ledger-table">
                <thead>
                    <tr>
                        <th>"Account"</th>
                        <th>"Debit"</th>
                        <th>"Credit"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="ledger-tbody">
                    <For
                        each=move || rows.get()
                        key=|row| row.key
                        children=move |row| view! { <LedgerRowView row=row on_remove=remove_row /> }
                    />
                </tbody>
            </table>

            <div class="ledger-actions">
                <button type="button" id="ledger-add-row" on:click=add_row>"Add row"</button>
                <button type="button" id="ledger-check" on:click=on_check>"Check"</button>
            </div>

            <StatusLine id="ledger-message" status=message />
        </div>
    }
}

#[component]
fn LedgerRowView(row: RowState, on_remove: impl Fn(usize) + 'static) -> impl IntoView {
    view! {
        <tr class="ledger-row">
            <td>
                <input
                    type="text"
                    class="ledger-account"
                    placeholder="Account name"
                    prop:value=move || row.account.get()
                    on:input=move |ev| row.account.set(event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    class="ledger-debit"
                    placeholder="0"
                    min="0"
                    step="0.01"
                    prop:value=move || row.debit.get()
                    on:input=move |ev| row.debit.set(event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    class="ledger-credit"
                    placeholder="0"
                    min="0"
                    step="0.01"
                    prop:value=move || row.credit.get()
                    on:input=move |ev| row.credit.set(event_target_value(&ev))
                />
            </td>
            <td>
                <button
                    type="button"
                    class="ledger-remove"
                    aria-label="Remove row"
                    on:click=move |_| on_remove(row.key)
                >
                    "×"
                </button>
            </td>
        </tr>
    }
}
