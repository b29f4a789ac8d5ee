//! Bearer tokens kept in browser storage.
//!
//! "Remember me" logins go to the persistent area, others to the session
//! area. Reads check the persistent area first.

use serde::{Deserialize, Serialize};
use store::SharedStorage;

pub const ACCESS_TOKEN_KEY: &str = "buildline.access_token";
pub const REFRESH_TOKEN_KEY: &str = "buildline.refresh_token";

/// Token pair issued by `/auth/login` and `/auth/refresh`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone)]
pub struct TokenStore {
    persistent: SharedStorage,
    session: SharedStorage,
}

impl TokenStore {
    pub fn new(persistent: SharedStorage, session: SharedStorage) -> Self {
        Self { persistent, session }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.persistent
            .get(key)
            .or_else(|| self.session.get(key))
            .filter(|v| !v.is_empty())
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Stores a fresh login. The other area is wiped so only one copy exists.
    pub fn store(&self, tokens: &AuthTokens, remember: bool) {
        let (target, other) = if remember {
            (&self.persistent, &self.session)
        } else {
            (&self.session, &self.persistent)
        };
        other.remove(ACCESS_TOKEN_KEY);
        other.remove(REFRESH_TOKEN_KEY);
        Self::write(target, tokens);
    }

    /// Replaces tokens after a refresh, in whichever area held them.
    pub fn update(&self, tokens: &AuthTokens) {
        let target = if self.persistent.get(ACCESS_TOKEN_KEY).is_some()
            || self.session.get(ACCESS_TOKEN_KEY).is_none()
        {
            &self.persistent
        } else {
            &self.session
        };
        Self::write(target, tokens);
    }

    fn write(target: &SharedStorage, tokens: &AuthTokens) {
        if let Err(e) = target.set(ACCESS_TOKEN_KEY, &tokens.access_token) {
            tracing::warn!("could not store access token: {e}");
        }
        if let Some(refresh) = &tokens.refresh_token {
            if let Err(e) = target.set(REFRESH_TOKEN_KEY, refresh) {
                tracing::warn!("could not store refresh token: {e}");
            }
        }
    }

    pub fn clear(&self) {
        for area in [&self.persistent, &self.session] {
            area.remove(ACCESS_TOKEN_KEY);
            area.remove(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store::{KeyValueStore, MemoryStorage};

    fn tokens(access: &str) -> AuthTokens {
        AuthTokens {
            access_token: access.to_string(),
            refresh_token: Some(format!("r-{access}")),
        }
    }

    #[test]
    fn test_remember_selects_storage_area() {
        let local = MemoryStorage::new();
        let session = MemoryStorage::new();
        let store = TokenStore::new(Arc::new(local.clone()), Arc::new(session.clone()));

        store.store(&tokens("a1"), false);
        assert_eq!(session.get(ACCESS_TOKEN_KEY).as_deref(), Some("a1"));
        assert_eq!(local.get(ACCESS_TOKEN_KEY), None);

        store.store(&tokens("a2"), true);
        assert_eq!(local.get(ACCESS_TOKEN_KEY).as_deref(), Some("a2"));
        assert_eq!(session.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.refresh_token().as_deref(), Some("r-a2"));
    }

    #[test]
    fn test_update_stays_in_session_area() {
        let local = MemoryStorage::new();
        let session = MemoryStorage::new();
        let store = TokenStore::new(Arc::new(local.clone()), Arc::new(session.clone()));
        store.store(&tokens("a1"), false);
        store.update(&tokens("a3"));
        assert_eq!(session.get(ACCESS_TOKEN_KEY).as_deref(), Some("a3"));
        assert_eq!(local.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_clear_wipes_both_areas() {
        let store = TokenStore::new(Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()));
        store.store(&tokens("a1"), true);
        assert!(store.is_authenticated());
        store.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.refresh_token(), None);
    }
}
