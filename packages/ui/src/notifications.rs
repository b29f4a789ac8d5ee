//! Transient notifications and the error-reporting helper every screen uses.

use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;

use crate::auth::{expire_session, use_auth, AuthState};
use crate::services::sleep;

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Shows `message` and removes it again after a few seconds.
pub fn notify(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    let id = {
        let mut n = notifications.write();
        n.next_id += 1;
        let id = n.next_id;
        n.entries.push(Notice {
            id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        id
    };
    let mut notifications = *notifications;
    spawn(async move {
        sleep(NOTICE_TTL).await;
        notifications.write().entries.retain(|n| n.id != id);
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Notifications plus auth, bundled for async handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Feedback {
    notifications: Signal<Notifications>,
    auth: Signal<AuthState>,
}

pub fn use_feedback() -> Feedback {
    Feedback {
        notifications: use_notifications(),
        auth: use_auth(),
    }
}

impl Feedback {
    pub fn success(&mut self, message: &str) {
        notify(&mut self.notifications, NoticeLevel::Success, message);
    }

    pub fn info(&mut self, message: &str) {
        notify(&mut self.notifications, NoticeLevel::Info, message);
    }

    pub fn warning(&mut self, message: &str) {
        notify(&mut self.notifications, NoticeLevel::Warning, message);
    }

    /// Logs `error` and shows `message`; an unauthorized error ends the
    /// session instead.
    pub fn failure(&mut self, error: &ApiError, message: &str) {
        tracing::error!("{message}: {error}");
        if error.is_unauthorized() {
            expire_session(&mut self.auth);
            notify(&mut self.notifications, NoticeLevel::Warning, store::messages::SESSION_EXPIRED);
        } else {
            notify(&mut self.notifications, NoticeLevel::Error, message);
        }
    }

    /// Ends the session when `error` is unauthorized. Returns whether it was.
    pub fn check_session(&mut self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            expire_session(&mut self.auth);
            true
        } else {
            false
        }
    }
}

#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notifications::default()));
    rsx! {
        {children}
        NotificationStack {}
    }
}

#[component]
fn NotificationStack() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications().entries.clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 flex flex-col gap-2",
            style: "z-index: 3000",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        NoticeLevel::Error => "notice notice-error",
                        NoticeLevel::Warning => "notice notice-warning",
                        NoticeLevel::Success => "notice notice-success",
                        NoticeLevel::Info => "notice notice-info",
                    },
                    onclick: move |_| notifications.write().entries.retain(|n| n.id != entry.id),
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { " {entry.message}" }
                }
            }
        }
    }
}
