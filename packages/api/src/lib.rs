//! # API crate: typed REST client for the Buildline backend
//!
//! Every screen of the console reads and writes through this crate. It owns
//! the HTTP plumbing and exposes one facade per backend area, each returning
//! decoded `store` types.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token, one-shot 401 refresh-and-retry |
//! | [`envelope`] | `{ success, data, message, meta }` decoding and validation |
//! | [`error`] | [`ApiError`] |
//! | [`tokens`] | Access/refresh tokens in `localStorage` or `sessionStorage` |
//! | [`auth`] | Login, current user, logout |
//! | [`blog_admin`] | Articles, blocks, categories, tags, comments, SEO, dashboard |
//! | [`blog_public`] | Public blog pages, comments, likes |
//! | [`users`] | Organization users, roles, permissions, invitations |
//! | [`multi_org`] | Users across organizations |
//! | [`models`] | The signed-in user ([`UserInfo`]) |
//!
//! ## Error surface
//!
//! Facades return `Result<_, ApiError>`. Screens log the error and show a
//! generic localized message; [`ApiError::Unauthorized`] is the one variant
//! the UI reacts to specially, by sending the user to `/login`.

pub mod auth;
pub mod blog_admin;
pub mod blog_public;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod multi_org;
pub mod tokens;
pub mod users;

pub use auth::AuthApi;
pub use blog_admin::BlogAdminApi;
pub use blog_public::BlogPublicApi;
pub use client::ApiClient;
pub use error::ApiError;
pub use models::UserInfo;
pub use multi_org::MultiOrgApi;
pub use tokens::{AuthTokens, TokenStore};
pub use users::UsersApi;

/// All facades over one shared client.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildlineApi {
    pub auth: AuthApi,
    pub blog_admin: BlogAdminApi,
    pub blog_public: BlogPublicApi,
    pub users: UsersApi,
    pub multi_org: MultiOrgApi,
}

impl BuildlineApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            blog_admin: BlogAdminApi::new(client.clone()),
            blog_public: BlogPublicApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            multi_org: MultiOrgApi::new(client),
        }
    }
}
