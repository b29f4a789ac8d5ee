use dioxus::prelude::*;
use ui::views::blog::{BlogArticleView, BlogCategoryView, BlogIndexView, BlogTagView};
use ui::views::site::{AboutView, ContactsView, HomeView, LoginView, PricingView, SiteLayout};

use crate::navigate::use_go;
use crate::Route;

/// Header and footer around every public page.
#[component]
pub fn SiteFrame() -> Element {
    let route = use_route::<Route>();
    let go = use_go();
    rsx! {
        SiteLayout {
            current: route.destination(),
            on_navigate: go,
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    let go = use_go();
    rsx! { HomeView { on_navigate: go } }
}

#[component]
pub fn About() -> Element {
    rsx! { AboutView {} }
}

#[component]
pub fn Contacts() -> Element {
    rsx! { ContactsView {} }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { PricingView {} }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}

#[component]
pub fn Blog() -> Element {
    let go = use_go();
    rsx! { BlogIndexView { on_navigate: go } }
}

// Views load once per mount, so a new slug needs a fresh component.

#[component]
pub fn BlogArticle(slug: String) -> Element {
    let go = use_go();
    rsx! { BlogArticleView { key: "{slug}", slug: slug.clone(), on_navigate: go } }
}

#[component]
pub fn BlogCategory(slug: String) -> Element {
    let go = use_go();
    rsx! { BlogCategoryView { key: "{slug}", slug: slug.clone(), on_navigate: go } }
}

#[component]
pub fn BlogTag(slug: String) -> Element {
    let go = use_go();
    rsx! { BlogTagView { key: "{slug}", slug: slug.clone(), on_navigate: go } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let go = use_go();
    let path = segments.join("/");
    rsx! {
        section {
            class: "max-w-3xl mx-auto px-4 py-24 text-center",
            h1 { class: "text-3xl font-bold mb-4", "Страница не найдена" }
            p { class: "text-neutral-500 mb-8", "/{path}" }
            button {
                class: "px-4 py-2 rounded border",
                onclick: move |_| go.call(ui::Destination::Home),
                "На главную"
            }
        }
    }
}
