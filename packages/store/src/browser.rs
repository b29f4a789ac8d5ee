//! # Web Storage backend: `window.localStorage` / `window.sessionStorage`
//!
//! [`BrowserStorage`] is the [`KeyValueStore`] used on the **web platform**.
//! It is a zero-size handle naming which of the two storage areas to use and
//! looks the area up on every call, so it stays `Send + Sync` even though
//! `web_sys::Storage` is not.
//!
//! Reads and removals swallow errors (a disabled storage area behaves as an
//! empty one); writes report them.

use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives browser restarts.
    Local,
    /// Cleared when the tab closes.
    Session,
}

#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("failed to remove {key} from {:?} storage: {e:?}", self.area);
            }
        }
    }
}
