//! # The signed-in user
//!
//! [`UserInfo`] is what `/auth/login` and `/auth/me` return for the current
//! account. Roles and permissions are slugs; the console only uses them to
//! hide controls, the backend still authorizes every call.
//!
//! The helper [`UserInfo::display_name`] returns the user's name or falls
//! back to their email address.

use serde::{Deserialize, Serialize};
use store::Id;

use crate::tokens::AuthTokens;

/// User information returned for the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: Id,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// `admin` implies every permission.
    pub fn can(&self, permission: &str) -> bool {
        self.has_role("admin") || self.permissions.iter().any(|p| p == permission)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub remember: bool,
}

/// `data` of a successful `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: AuthTokens,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(json: &str) -> UserInfo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(r#"{"id":1,"email":"a@b.ru","name":"Анна"}"#).display_name(), "Анна");
        assert_eq!(user(r#"{"id":1,"email":"a@b.ru"}"#).display_name(), "a@b.ru");
        assert_eq!(user(r#"{"id":1,"email":"a@b.ru","name":" "}"#).display_name(), "a@b.ru");
    }

    #[test]
    fn test_admin_can_everything() {
        let admin = user(r#"{"id":1,"email":"a@b.ru","roles":["admin"]}"#);
        assert!(admin.can("blog.publish"));
        let editor = user(r#"{"id":2,"email":"e@b.ru","roles":["editor"],"permissions":["blog.edit"]}"#);
        assert!(editor.can("blog.edit"));
        assert!(!editor.can("users.manage"));
    }

    #[test]
    fn test_login_response_flattens_tokens() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"access_token":"a","refresh_token":"r","user":{"id":5,"email":"x@y.ru"}}"#,
        )
        .unwrap();
        assert_eq!(response.tokens.access_token, "a");
        assert_eq!(response.user.id, 5);
    }
}
