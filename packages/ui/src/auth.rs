//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::services::use_api;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    /// Set when a request came back unauthorized after the refresh attempt.
    pub expired: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            expired: false,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
            expired: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
            expired: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Drops the session after a final 401.
pub fn expire_session(auth: &mut Signal<AuthState>) {
    tracing::info!("session expired");
    auth.set(AuthState {
        user: None,
        loading: false,
        expired: true,
    });
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let api = use_api();

    // Fetch the current user on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.auth.me().await {
                Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
                Ok(None) => auth_state.set(AuthState::signed_out()),
                Err(e) => {
                    tracing::error!("failed to load current user: {e}");
                    auth_state.set(AuthState::signed_out());
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Renders `children` only for a signed-in user; otherwise calls
/// `on_unauthenticated` once loading has finished.
#[component]
pub fn AuthGuard(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            on_unauthenticated.call(());
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "p-8 text-neutral-500", "{store::messages::LOADING}" }
        };
    }
    if state.user.is_none() {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Выйти".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let api = use_api();

    let onclick = move |_| {
        let api = api.clone();
        async move {
            if let Err(e) = api.auth.logout().await {
                tracing::warn!("logout: {e}");
            }
            auth_state.set(AuthState::signed_out());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
