//! User id persistence in `window.localStorage`.

use studyhub::user::{StoreError, UserIdStore, USER_ID_KEY};

/// Keeps the user id under [`USER_ID_KEY`] in local storage
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("local storage disabled".to_string()))
    }
}

impl UserIdStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(USER_ID_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(USER_ID_KEY, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let store = LocalStorageStore;
        store.save("  ana ").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("ana"));
        assert_eq!(store.load().as_deref(), Some("ana"));

        store.save("").unwrap();
        assert_eq!(store.load(), None);
    }
}
