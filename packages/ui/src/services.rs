//! Shared service constructors for all platforms.
//!
//! Returns the storage areas and API facades backed by the right
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` / `sessionStorage` via
//!   [`store::BrowserStorage`]
//! - **Everything else**: process-local [`store::MemoryStorage`]

use std::sync::Arc;

use api::{ApiClient, BuildlineApi, TokenStore};
use dioxus::prelude::*;
use store::{ConsoleConfig, SharedStorage};

/// Storage that survives restarts (`localStorage` on the web).
pub fn persistent_storage() -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::BrowserStorage::local())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStorage::new())
    }
}

/// Storage scoped to the tab (`sessionStorage` on the web).
pub fn session_storage() -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::BrowserStorage::session())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStorage::new())
    }
}

/// Builds every API facade over one client for `config`.
pub fn make_api(config: &ConsoleConfig) -> BuildlineApi {
    let tokens = TokenStore::new(persistent_storage(), session_storage());
    BuildlineApi::new(ApiClient::new(&config.api.base_url, tokens))
}

/// The API facades provided by [`ApiProvider`].
pub fn use_api() -> BuildlineApi {
    use_context::<BuildlineApi>()
}

/// Makes [`use_api`] available to every descendant.
#[component]
pub fn ApiProvider(config: ConsoleConfig, children: Element) -> Element {
    use_context_provider(|| make_api(&config));
    rsx! {
        {children}
    }
}

/// Asks the browser to confirm an irreversible action. Always `true` off the web.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("auto-confirming: {message}");
        true
    }
}

pub(crate) async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
