//! Login, current user and logout.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, UserInfo};

#[derive(Clone, Debug, PartialEq)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for tokens. `remember` keeps them across browser
    /// restarts; otherwise they live until the tab closes.
    pub async fn login(&self, email: &str, password: &str, remember: bool) -> Result<UserInfo, ApiError> {
        let request = LoginRequest {
            email: email.trim(),
            password,
            remember,
        };
        let response: LoginResponse = self.client.post("/auth/login", &request).await?;
        self.client.tokens().store(&response.tokens, remember);
        tracing::info!(user = response.user.id, remember, "signed in");
        Ok(response.user)
    }

    /// The account behind the stored token, or `None` without one.
    pub async fn me(&self) -> Result<Option<UserInfo>, ApiError> {
        if !self.client.tokens().is_authenticated() {
            return Ok(None);
        }
        match self.client.get("/auth/me", &Vec::new()).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Unauthorized) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Tokens are dropped locally even if the backend call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let outcome = self.client.post_empty("/auth/logout", &serde_json::json!({})).await;
        self.client.tokens().clear();
        if let Err(e) = &outcome {
            tracing::warn!("logout request failed: {e}");
        }
        match outcome {
            Err(ApiError::Unauthorized) => Ok(()),
            other => other,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.tokens().is_authenticated()
    }
}
