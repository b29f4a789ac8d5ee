//! # Key/value storage: the browser's `localStorage` / `sessionStorage`
//!
//! Auth tokens and the selected theme are the only client state that outlives
//! a page load. Both go through [`KeyValueStore`], so the same code runs
//! against [`crate::BrowserStorage`] in the browser and [`crate::MemoryStorage`]
//! in tests and native builds.
//!
//! Writes are last-write-wins; a single tab is the only writer in practice.

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Synchronous string key/value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Shared handle injected into services that persist state.
pub type SharedStorage = Arc<dyn KeyValueStore>;
