//! Global Application State
//!
//! Reactive state shared across pages using Leptos signals.

use leptos::*;

use studyhub::user::UserIdStore;
use studyhub::{Page, Status};

use super::storage::LocalStorageStore;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Page currently shown
    pub page: RwSignal<Page>,
    /// Status line under the search form; track buttons report here too
    pub search_status: RwSignal<Option<Status>>,
    /// Scenario handed from the practice page to the ledger simulator
    pub ledger_template: RwSignal<Option<i64>>,
    /// Persisted user id
    pub store: LocalStorageStore,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let hash = window().location().hash().unwrap_or_default();

    let state = GlobalState {
        page: create_rw_signal(Page::from_hash(&hash)),
        search_status: create_rw_signal(None),
        ledger_template: create_rw_signal(None),
        store: LocalStorageStore,
    };

    provide_context(state);
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Switch pages and sync `location.hash`
    pub fn navigate(&self, page: Page) {
        if let Err(e) = window().location().set_hash(page.slug()) {
            web_sys::console::warn_1(&e);
        }
        self.page.set(page);
    }

    /// Re-read the page from `location.hash`
    pub fn sync_with_hash(&self) {
        let hash = window().location().hash().unwrap_or_default();
        self.page.set(Page::from_hash(&hash));
    }

    pub fn stored_user_id(&self) -> Option<String> {
        self.store.load()
    }

    pub fn save_user_id(&self, user_id: &str) {
        if let Err(e) = self.store.save(user_id) {
            web_sys::console::warn_1(&format!("Failed to save user id: {}", e).into());
        }
    }

    /// Stored user id, asking for one (and saving it) when none exists
    pub fn ensure_user_id(&self) -> String {
        studyhub::user::ensure_user_id(&self.store, || {
            window()
                .prompt_with_message(studyhub::status::USER_ID_PROMPT)
                .ok()
                .flatten()
        })
    }

    pub fn set_search_status(&self, status: Status) {
        self.search_status.set(Some(status));
    }
}
