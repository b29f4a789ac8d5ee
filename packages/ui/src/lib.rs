//! Views and shared UI of the Buildline console, blog and marketing site.
//!
//! | module          | role                                              |
//! |-----------------|---------------------------------------------------|
//! | `auth`          | session state, route guard, logout                |
//! | `components`    | buttons, forms, modals, pagination, markdown      |
//! | `hooks`         | paginated list resources                          |
//! | `navigation`    | platform-neutral destinations                     |
//! | `notifications` | toast stack and error feedback                    |
//! | `services`      | API context and browser helpers                   |
//! | `theme`         | color theme context and picker                    |
//! | `views`         | admin console, blog and site pages                |
//!
//! Views never touch the router. They report a [`Destination`] and the
//! platform crate maps it to a route.

use dioxus::prelude::*;

pub mod auth;
pub mod components;
pub mod hooks;
pub mod navigation;
pub mod notifications;
pub mod services;
pub mod theme;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const CONSOLE_CSS: Asset = asset!("/assets/styling/console.css");

pub use auth::{use_auth, AuthGuard, AuthProvider, AuthState, LogoutButton};
pub use navigation::Destination;
pub use notifications::{use_feedback, NotificationsProvider};
pub use services::{confirm, use_api, ApiProvider};
pub use theme::{use_theme, ThemePicker, ThemeProvider};
