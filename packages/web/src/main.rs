use std::sync::LazyLock;

use dioxus::prelude::*;

use store::ConsoleConfig;
use ui::{ApiProvider, AuthProvider, NotificationsProvider, ThemeProvider};
use views::{
    About, AdminFrame, Articles, Blog, BlogArticle, BlogCategory, BlogTag, Categories, Comments, Contacts, Dashboard,
    EditArticle, Home, Login, MultiOrgUsers, NewArticle, NotFound, Pricing, Roles, Seo, SiteFrame, Users,
};

mod navigate;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[layout(SiteFrame)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contacts")]
        Contacts {},
        #[route("/pricing")]
        Pricing {},
        #[route("/login")]
        Login {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/category/:slug")]
        BlogCategory { slug: String },
        #[route("/blog/tag/:slug")]
        BlogTag { slug: String },
        #[route("/blog/:slug")]
        BlogArticle { slug: String },
    #[end_layout]
    #[layout(AdminFrame)]
        #[route("/admin")]
        Dashboard {},
        #[route("/admin/blog/articles")]
        Articles {},
        #[route("/admin/blog/articles/new")]
        NewArticle {},
        #[route("/admin/blog/articles/:id/edit")]
        EditArticle { id: store::Id },
        #[route("/admin/blog/categories")]
        Categories {},
        #[route("/admin/blog/comments")]
        Comments {},
        #[route("/admin/blog/seo")]
        Seo {},
        #[route("/dashboard/users")]
        Users {},
        #[route("/dashboard/roles")]
        Roles {},
        #[route("/dashboard/organizations/users")]
        MultiOrgUsers {},
    #[end_layout]
    #[layout(SiteFrame)]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Embedded `buildline.toml`; a broken file falls back to the defaults.
static CONFIG: LazyLock<ConsoleConfig> = LazyLock::new(|| {
    let config = match ConsoleConfig::from_toml(include_str!("../buildline.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}: {e}", ConsoleConfig::filename());
            ConsoleConfig::default()
        }
    };
    config.with_build_env()
});

fn main() {
    let level = CONFIG.log.level.parse().unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger: {e}");
    }
    tracing::info!("API at {}", CONFIG.api.base_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = CONFIG.clone();
    let default_theme = config.ui.default_theme;

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: ui::CONSOLE_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            config,
            NotificationsProvider {
                ThemeProvider {
                    default_theme,
                    AuthProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
