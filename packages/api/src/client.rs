//! # HTTP client shared by every domain facade
//!
//! [`ApiClient`] owns the `reqwest` client, the API root and the
//! [`TokenStore`]. Each request:
//!
//! 1. attaches `Authorization: Bearer <access token>` when one is stored;
//! 2. on a 401, exchanges the refresh token once (`POST /auth/refresh`) and
//!    repeats the request once with the new token;
//! 3. if that fails too, clears stored tokens and returns
//!    [`ApiError::Unauthorized`], which the UI turns into a redirect to
//!    `/login`.
//!
//! There are no timeouts and no other retries.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::filters::{query_string, QueryPairs};
use store::Page;

use crate::envelope::{decode_data, decode_empty, decode_page};
use crate::error::ApiError;
use crate::tokens::{AuthTokens, TokenStore};

/// Status and body of a finished request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    tokens: TokenStore,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_once(
        &self,
        method: &Method,
        path: &str,
        query: &QueryPairs,
        body: Option<&serde_json::Value>,
        token: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        Ok(RawResponse { status, body })
    }

    async fn refresh(&self, refresh_token: String) -> Result<AuthTokens, ApiError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let raw = self
            .send_once(&Method::POST, "/auth/refresh", &QueryPairs::new(), Some(&body), None)
            .await?;
        decode_data(raw.status, &raw.body)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryPairs,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        tracing::debug!("{method} {path}?{}", query_string(query));
        let body = body.as_ref();
        with_refresh(
            &self.tokens,
            |token| self.send_once(&method, path, query, body, token),
            |refresh_token| self.refresh(refresh_token),
        )
        .await
    }

    fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryPairs) -> Result<T, ApiError> {
        let raw = self.send(Method::GET, path, query, None).await?;
        decode_data(raw.status, &raw.body)
    }

    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> Result<Page<T>, ApiError> {
        let raw = self.send(Method::GET, path, query, None).await?;
        decode_page(raw.status, &raw.body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = Self::to_body(body)?;
        let raw = self.send(Method::POST, path, &QueryPairs::new(), Some(body)).await?;
        decode_data(raw.status, &raw.body)
    }

    /// POST whose response carries nothing the caller needs.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = Self::to_body(body)?;
        let raw = self.send(Method::POST, path, &QueryPairs::new(), Some(body)).await?;
        decode_empty(raw.status, &raw.body)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = Self::to_body(body)?;
        let raw = self.send(Method::PUT, path, &QueryPairs::new(), Some(body)).await?;
        decode_data(raw.status, &raw.body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let raw = self.send(Method::DELETE, path, &QueryPairs::new(), None).await?;
        decode_empty(raw.status, &raw.body)
    }
}

/// The 401 policy, independent of the transport.
///
/// `send` is called with the current access token; on `Unauthorized` the
/// refresh token is exchanged through `refresh` and `send` is called exactly
/// once more. Any second failure to authenticate clears `tokens`.
pub(crate) async fn with_refresh<T, S, SFut, R, RFut>(
    tokens: &TokenStore,
    send: S,
    refresh: R,
) -> Result<T, ApiError>
where
    S: Fn(Option<String>) -> SFut,
    SFut: Future<Output = Result<T, ApiError>>,
    R: FnOnce(String) -> RFut,
    RFut: Future<Output = Result<AuthTokens, ApiError>>,
{
    match send(tokens.access_token()).await {
        Err(ApiError::Unauthorized) => {}
        other => return other,
    }

    let Some(refresh_token) = tokens.refresh_token() else {
        tracing::info!("request unauthorized and no refresh token stored");
        tokens.clear();
        return Err(ApiError::Unauthorized);
    };

    match refresh(refresh_token).await {
        Ok(fresh) => tokens.update(&fresh),
        Err(e) => {
            tracing::warn!("token refresh failed: {e}");
            tokens.clear();
            return Err(ApiError::Unauthorized);
        }
    }

    let retried = send(tokens.access_token()).await;
    if matches!(retried, Err(ApiError::Unauthorized)) {
        tracing::warn!("request still unauthorized after refresh");
        tokens.clear();
    }
    retried
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Arc;
    use store::MemoryStorage;

    fn token_store(access: Option<&str>, refresh: Option<&str>) -> TokenStore {
        let store = TokenStore::new(Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()));
        if let Some(access) = access {
            store.store(
                &AuthTokens {
                    access_token: access.to_string(),
                    refresh_token: refresh.map(str::to_string),
                },
                true,
            );
        }
        store
    }

    /// Accepts only `valid` as access token and records what it saw.
    async fn fake_send(seen: &RefCell<Vec<Option<String>>>, token: Option<String>, valid: &str) -> Result<u16, ApiError> {
        seen.borrow_mut().push(token.clone());
        match token {
            Some(t) if t == valid => Ok(200),
            _ => Err(ApiError::Unauthorized),
        }
    }

    #[tokio::test]
    async fn test_valid_token_needs_no_refresh() {
        let tokens = token_store(Some("good"), Some("r"));
        let seen = RefCell::new(Vec::new());
        let refreshed = RefCell::new(0);
        let result = with_refresh(
            &tokens,
            |t| fake_send(&seen, t, "good"),
            |_| async {
                *refreshed.borrow_mut() += 1;
                Err(ApiError::Unauthorized)
            },
        )
        .await;
        assert_eq!(result, Ok(200));
        assert_eq!(*refreshed.borrow(), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed_and_request_retried_once() {
        let tokens = token_store(Some("stale"), Some("r1"));
        let seen = RefCell::new(Vec::new());
        let result = with_refresh(
            &tokens,
            |t| fake_send(&seen, t, "fresh"),
            |refresh_token| async move {
                assert_eq!(refresh_token, "r1");
                Ok(AuthTokens {
                    access_token: "fresh".to_string(),
                    refresh_token: Some("r2".to_string()),
                })
            },
        )
        .await;
        assert_eq!(result, Ok(200));
        assert_eq!(
            *seen.borrow(),
            vec![Some("stale".to_string()), Some("fresh".to_string())]
        );
        assert_eq!(tokens.refresh_token().as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_second_401_clears_tokens() {
        let tokens = token_store(Some("stale"), Some("r1"));
        let seen = RefCell::new(Vec::new());
        let result = with_refresh(
            &tokens,
            |t| fake_send(&seen, t, "never"),
            |_| async {
                Ok(AuthTokens {
                    access_token: "fresh".to_string(),
                    refresh_token: None,
                })
            },
        )
        .await;
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert_eq!(seen.borrow().len(), 2);
        assert!(!tokens.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_tokens_without_retry() {
        let tokens = token_store(Some("stale"), Some("r1"));
        let seen = RefCell::new(Vec::new());
        let result = with_refresh(
            &tokens,
            |t| fake_send(&seen, t, "fresh"),
            |_| async { Err(ApiError::Status { status: 500, message: String::new() }) },
        )
        .await;
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert_eq!(seen.borrow().len(), 1);
        assert!(!tokens.is_authenticated());
    }

    #[tokio::test]
    async fn test_other_errors_pass_through_untouched() {
        let tokens = token_store(Some("good"), Some("r"));
        let result: Result<u16, _> = with_refresh(
            &tokens,
            |_| async { Err(ApiError::Network("offline".to_string())) },
            |_| async { Err(ApiError::Unauthorized) },
        )
        .await;
        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
        assert!(tokens.is_authenticated());
    }
}
