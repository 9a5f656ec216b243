//! Session storage backends
//!
//! The session is a token plus the user record. Backends store them under
//! the `token` and `user` keys and never cache between calls.

use crate::error::{ErrorKind, Result};
use crate::interface::SessionStore;
use std::sync::{Mutex, MutexGuard};

#[cfg(feature = "no-wasm")]
mod file;
#[cfg(feature = "no-wasm")]
pub use file::FileSessionStore;

#[cfg(feature = "wasm")]
mod local_storage;
#[cfg(feature = "wasm")]
pub use local_storage::LocalStorageStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Default, Clone, PartialEq)]
struct Entries {
    token: Option<String>,
    user: Option<String>,
}

/// Process-local store, used by tests and short-lived tools
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<Entries>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a token and a user record
    pub fn with_session(token: &str, user: &str) -> Self {
        Self {
            entries: Mutex::new(Entries {
                token: Some(token.to_string()),
                user: Some(user.to_string()),
            }),
        }
    }

    /// Store holding only a token (no user record)
    pub fn with_token(token: &str) -> Self {
        Self {
            entries: Mutex::new(Entries {
                token: Some(token.to_string()),
                user: None,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|e| ErrorKind::StorageError(e.to_string()).into())
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.lock()?.token.clone())
    }

    fn user(&self) -> Result<Option<String>> {
        Ok(self.lock()?.user.clone())
    }

    fn set(&self, token: &str, user: &str) -> Result<()> {
        let mut entries = self.lock()?;
        entries.token = Some(token.to_string());
        entries.user = Some(user.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = Entries::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_sets_and_clears_together() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.user().unwrap(), None);

        store.set("abc", r#"{"username":"ada"}"#).unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("abc"));
        assert_eq!(store.user().unwrap().as_deref(), Some(r#"{"username":"ada"}"#));

        store.clear().unwrap();
        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.user().unwrap(), None);
    }

    #[test]
    fn token_only_store_has_no_user() {
        let store = MemorySessionStore::with_token("t");
        assert_eq!(store.token().unwrap().as_deref(), Some("t"));
        assert!(store.user().unwrap().is_none());
    }
}
