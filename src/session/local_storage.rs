use crate::error::{ErrorKind, Result};
use crate::interface::SessionStore;
use web_sys::Storage;

use super::{TOKEN_KEY, USER_KEY};

/// Browser `localStorage`, scoped to the page origin
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| ErrorKind::StorageError("no window available".to_string()))?;
        window
            .local_storage()
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?
            .ok_or_else(|| ErrorKind::StorageError("localStorage unavailable".to_string()).into())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
    }
}

impl SessionStore for LocalStorageStore {
    fn token(&self) -> Result<Option<String>> {
        self.get(TOKEN_KEY)
    }

    fn user(&self) -> Result<Option<String>> {
        self.get(USER_KEY)
    }

    fn set(&self, token: &str, user: &str) -> Result<()> {
        let storage = self.storage()?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?;
        storage
            .set_item(USER_KEY, user)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let storage = self.storage()?;
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?;
        storage
            .remove_item(USER_KEY)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?;
        Ok(())
    }
}
