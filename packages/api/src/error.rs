//! Error type of every API call.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// No response at all: DNS, TLS, connection reset, CORS.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response other than 401.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// 2xx response with `success: false`.
    #[error("request rejected: {message}")]
    Rejected { message: String },
    /// 401 that survived the refresh-and-retry; stored tokens are gone.
    #[error("not authenticated")]
    Unauthorized,
    /// Body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message the backend attached, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } if !message.is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
