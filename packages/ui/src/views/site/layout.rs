use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaTelegram, FaVk, FaYoutube};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::navigation::Destination;
use crate::theme::use_theme;

/// Header, footer and page body of the marketing site and public blog.
#[component]
pub fn SiteLayout(current: Destination, on_navigate: EventHandler<Destination>, children: Element) -> Element {
    let theme = use_theme().classes();
    let auth = use_auth();
    let signed_in = auth().user.is_some();

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-neutral-50 text-neutral-800",
            header {
                class: "bg-white border-b",
                div {
                    class: "max-w-6xl mx-auto px-4 h-16 flex items-center gap-8",
                    button {
                        class: "text-xl font-bold bg-clip-text text-transparent {theme.gradient}",
                        onclick: move |_| on_navigate.call(Destination::Home),
                        "Buildline"
                    }
                    nav {
                        class: "flex items-center gap-6 text-sm",
                        {Destination::site_menu().into_iter().map(|item| {
                            let label = item.label();
                            rsx! { SiteNavItem { key: "{label}", item, current: current.clone(), on_navigate } }
                        })}
                    }
                    div { class: "flex-1" }
                    if signed_in {
                        button {
                            class: "px-4 py-2 rounded text-sm {theme.primary}",
                            onclick: move |_| on_navigate.call(Destination::Dashboard),
                            "Панель управления"
                        }
                    } else {
                        button {
                            class: "px-4 py-2 rounded text-sm {theme.primary}",
                            onclick: move |_| on_navigate.call(Destination::Login),
                            "Войти"
                        }
                    }
                }
            }
            main { class: "flex-1", {children} }
            footer {
                class: "bg-neutral-900 text-neutral-400 text-sm",
                div {
                    class: "max-w-6xl mx-auto px-4 py-10 grid grid-cols-1 md:grid-cols-3 gap-8",
                    div {
                        div { class: "text-white font-semibold mb-2", "Buildline" }
                        p { "Управление строительными проектами: графики, сметы, материалы и команда в одном окне." }
                    }
                    div {
                        class: "flex flex-col gap-2",
                        {Destination::site_menu().into_iter().map(|item| {
                            let label = item.label();
                            rsx! {
                                button {
                                    key: "{label}",
                                    class: "text-left hover:text-white",
                                    onclick: move |_| on_navigate.call(item.clone()),
                                    "{label}"
                                }
                            }
                        })}
                    }
                    div {
                        class: "flex flex-col gap-3",
                        span { "+7 (495) 120-45-67" }
                        span { "hello@buildline.ru" }
                        div {
                            class: "flex gap-4 text-neutral-300",
                            a { href: "https://vk.com/buildline", target: "_blank", Icon { width: 20, height: 20, icon: FaVk } }
                            a { href: "https://t.me/buildline", target: "_blank", Icon { width: 20, height: 20, icon: FaTelegram } }
                            a { href: "https://youtube.com/@buildline", target: "_blank", Icon { width: 20, height: 20, icon: FaYoutube } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteNavItem(item: Destination, current: Destination, on_navigate: EventHandler<Destination>) -> Element {
    let active = item.covers(&current);
    let label = item.label();
    rsx! {
        button {
            class: if active { "font-semibold text-neutral-900" } else { "text-neutral-600 hover:text-neutral-900" },
            onclick: move |_| on_navigate.call(item.clone()),
            "{label}"
        }
    }
}
