use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::navigation::Destination;
use crate::theme::{use_theme, ThemePicker};

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// Sidebar, header and content area of the admin console.
#[component]
pub fn AdminShell(current: Destination, on_navigate: EventHandler<Destination>, children: Element) -> Element {
    let theme = use_theme().classes();
    let auth = use_auth();
    let user_name = auth()
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        div {
            class: "admin-layout",
            aside {
                class: "admin-sidebar",
                div {
                    class: "admin-brand {theme.gradient}",
                    "Buildline"
                }
                nav {
                    class: "admin-nav",
                    {Destination::admin_menu().into_iter().map(|(group, items)| rsx! {
                        div {
                            key: "{group}",
                            class: "admin-nav-group",
                            span { class: "admin-nav-label", "{group}" }
                            {items.into_iter().map(|item| {
                                let label = item.label();
                                let active = item.covers(&current);
                                rsx! {
                                    button {
                                        key: "{label}",
                                        class: if active { format!("admin-nav-item {}", theme.secondary) } else { "admin-nav-item".to_string() },
                                        onclick: move |_| on_navigate.call(item.clone()),
                                        "{label}"
                                    }
                                }
                            })}
                        }
                    })}
                }
                div {
                    class: "admin-sidebar-bottom",
                    ThemePicker {}
                    span { class: "admin-user", "{user_name}" }
                    LogoutButton { class: "admin-nav-item" }
                }
            }
            main {
                class: "admin-main",
                h1 { class: "admin-title {theme.text}", "{current.label()}" }
                {children}
            }
        }
    }
}
