//! User Identity
//!
//! The only state the client owns: the user id that tags progress entries and
//! keys the dashboard. Stores persist one string under [`USER_ID_KEY`].

use thiserror::Error;

/// Storage key (local storage in the page, file name on disk)
pub const USER_ID_KEY: &str = "studyhub_user_id";

/// Id used when the user declines to give one
pub const ANONYMOUS: &str = "anonymous";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Somewhere to keep the user id between sessions
pub trait UserIdStore {
    /// Raw stored value, if any
    fn read(&self) -> Result<Option<String>, StoreError>;

    fn write(&self, value: &str) -> Result<(), StoreError>;

    /// Stored id, trimmed; blank counts as absent
    fn load(&self) -> Option<String> {
        match self.read() {
            Ok(value) => value.as_deref().and_then(normalize),
            Err(e) => {
                tracing::warn!("Failed to read user id: {}", e);
                None
            }
        }
    }

    /// Store the trimmed id. A blank id is stored as an empty string.
    fn save(&self, user_id: &str) -> Result<(), StoreError> {
        self.write(user_id.trim())
    }
}

/// Trim an id, treating blank as absent
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Id to track progress under: the stored one, else whatever `ask` returns,
/// else [`ANONYMOUS`]. A newly chosen id is saved.
pub fn ensure_user_id<S, F>(store: &S, ask: F) -> String
where
    S: UserIdStore + ?Sized,
    F: FnOnce() -> Option<String>,
{
    if let Some(existing) = store.load() {
        return existing;
    }

    let chosen = ask()
        .as_deref()
        .and_then(normalize)
        .unwrap_or_else(|| ANONYMOUS.to_string());

    if let Err(e) = store.save(&chosen) {
        tracing::warn!("Failed to save user id: {}", e);
    }
    chosen
}

/// In-memory store, for tests and for sessions without persistent storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: std::cell::RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: std::cell::RefCell::new(Some(value.to_string())),
        }
    }
}

impl UserIdStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// File-backed store: one file named [`USER_ID_KEY`] in a state directory
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl FileStore {
    pub fn new(dir: impl AsRef<std::path::Path>) -> Self {
        Self {
            path: dir.as_ref().join(USER_ID_KEY),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "native")]
impl UserIdStore for FileStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_trims_and_ignores_blank() {
        assert_eq!(MemoryStore::with_value("  ana  ").load(), Some("ana".to_string()));
        assert_eq!(MemoryStore::with_value("   ").load(), None);
        assert_eq!(MemoryStore::default().load(), None);
    }

    #[test]
    fn test_ensure_uses_stored_id_without_asking() {
        let store = MemoryStore::with_value("ana");
        let id = ensure_user_id(&store, || panic!("should not ask"));
        assert_eq!(id, "ana");
    }

    #[test]
    fn test_ensure_asks_and_saves() {
        let store = MemoryStore::default();
        let id = ensure_user_id(&store, || Some(" bo ".to_string()));
        assert_eq!(id, "bo");
        assert_eq!(store.load(), Some("bo".to_string()));
    }

    #[test]
    fn test_ensure_falls_back_to_anonymous() {
        let store = MemoryStore::default();
        assert_eq!(ensure_user_id(&store, || None), ANONYMOUS);
        assert_eq!(store.load(), Some(ANONYMOUS.to_string()));

        let store = MemoryStore::default();
        assert_eq!(ensure_user_id(&store, || Some(String::new())), ANONYMOUS);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.load(), None);

        store.save("  carla\n").unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "carla");
        assert_eq!(store.load(), Some("carla".to_string()));
    }
}
