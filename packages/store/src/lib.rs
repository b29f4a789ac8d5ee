//! # Store crate: client-side core of the Buildline console
//!
//! Everything here is platform-agnostic and free of UI and HTTP: the DTOs the
//! backend sends, the list/filter/pagination loop, drag-reorder, theme tokens,
//! form helpers and the key/value storage the browser offers.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | DTOs mirrored from the REST API |
//! | [`filters`] | Filter objects of list screens and their query strings |
//! | [`pagination`] | Sliding page window, page sizes, "Показано …" captions |
//! | [`list`] | List controller with request generations, command dispatch, selection |
//! | [`commands`] | Closed enums of row and bulk actions |
//! | [`reorder`] | Optimistic drag-reorder with server rollback |
//! | [`theme`] | Six palettes and the persisted theme service |
//! | [`slug`] / [`validation`] | Editor helpers |
//! | [`pricing`] | Pricing calculator |
//! | [`config`] | `buildline.toml` |
//! | [`storage`] | `KeyValueStore` trait; memory and browser backends |

pub mod commands;
pub mod config;
pub mod filters;
pub mod list;
pub mod messages;
pub mod models;
pub mod pagination;
pub mod pricing;
pub mod reorder;
pub mod slug;
pub mod storage;
pub mod theme;
pub mod validation;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::{BrowserStorage, StorageArea};

pub use config::ConsoleConfig;
pub use list::{ListController, ListSource, Selection};
pub use models::{Id, Page, PaginationMeta};
pub use storage::{KeyValueStore, SharedStorage, StorageError};
pub use theme::{ThemeClasses, ThemeName, ThemeService};
