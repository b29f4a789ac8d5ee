use dioxus::prelude::*;
use store::Id;
use ui::views::admin::{
    AdminShell, ArticleEditorView, ArticlesView, CategoriesView, CommentsView, DashboardView, MultiOrgUsersView,
    RolesView, SeoView, UsersView,
};
use ui::AuthGuard;

use crate::navigate::use_go;
use crate::Route;

/// Admin shell behind the sign-in guard. Without a session the visitor
/// lands on `/login`.
#[component]
pub fn AdminFrame() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let go = use_go();
    rsx! {
        AuthGuard {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            AdminShell {
                current: route.destination(),
                on_navigate: go,
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let go = use_go();
    rsx! { DashboardView { on_navigate: go } }
}

#[component]
pub fn Articles() -> Element {
    let go = use_go();
    rsx! { ArticlesView { on_navigate: go } }
}

#[component]
pub fn NewArticle() -> Element {
    let go = use_go();
    let key = "new";
    rsx! { ArticleEditorView { key: "{key}", id: None, on_navigate: go } }
}

#[component]
pub fn EditArticle(id: Id) -> Element {
    let go = use_go();
    rsx! { ArticleEditorView { key: "{id}", id: Some(id), on_navigate: go } }
}

#[component]
pub fn Categories() -> Element {
    rsx! { CategoriesView {} }
}

#[component]
pub fn Comments() -> Element {
    rsx! { CommentsView {} }
}

#[component]
pub fn Seo() -> Element {
    rsx! { SeoView {} }
}

#[component]
pub fn Users() -> Element {
    rsx! { UsersView {} }
}

#[component]
pub fn Roles() -> Element {
    rsx! { RolesView {} }
}

#[component]
pub fn MultiOrgUsers() -> Element {
    rsx! { MultiOrgUsersView {} }
}
