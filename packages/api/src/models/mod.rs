//! Data models owned by the API layer.

mod user;

pub use user::{LoginRequest, LoginResponse, UserInfo};
