use dioxus::prelude::*;
use store::messages;
use store::models::{Article, DashboardStats};

use crate::components::{ArticleStatusBadge, ErrorBanner, Skeleton};
use crate::navigation::Destination;
use crate::notifications::use_feedback;
use crate::services::use_api;
use crate::theme::use_theme;

const RECENT_LIMIT: u32 = 5;

/// Counters and the latest articles, fetched concurrently.
#[component]
pub fn DashboardView(on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let theme = use_theme().classes();
    let mut feedback = use_feedback();
    let mut stats = use_signal(|| Option::<DashboardStats>::None);
    let mut recent = use_signal(Vec::<Article>::new);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let (loaded_stats, loaded_recent) = futures::join!(
                api.blog_admin.dashboard_stats(),
                api.blog_admin.recent_articles(RECENT_LIMIT)
            );
            match loaded_stats {
                Ok(s) => stats.set(Some(s)),
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("dashboard stats: {e}");
                    error.set(Some(messages::LOAD_STATS_FAILED.to_string()));
                }
            }
            match loaded_recent {
                Ok(articles) => recent.set(articles),
                Err(e) => tracing::error!("recent articles: {e}"),
            }
        }
    });

    let cards = stats().map(|s| {
        vec![
            ("Всего статей", s.articles_total),
            ("Опубликовано", s.articles_published),
            ("Черновики", s.articles_draft),
            ("Ждут модерации", s.comments_pending),
            ("Пользователи", s.users_total),
            ("Просмотры", s.views_total),
        ]
    });

    rsx! {
        if let Some(message) = error() {
            ErrorBanner { message }
        }

        match cards {
            Some(cards) => rsx! {
                div {
                    class: "grid grid-cols-2 md:grid-cols-3 gap-4 mb-8",
                    for (label, value) in cards {
                        div {
                            key: "{label}",
                            class: "rounded-lg border {theme.border} bg-white p-4",
                            div { class: "text-sm text-neutral-500", "{label}" }
                            div { class: "text-2xl font-semibold {theme.text}", "{value}" }
                        }
                    }
                }
            },
            None if error().is_none() => rsx! { Skeleton { rows: 2 } },
            None => rsx! {},
        }

        div {
            class: "flex items-center justify-between mb-3",
            h2 { class: "text-lg font-semibold", "Последние статьи" }
            button {
                class: "text-sm {theme.text}",
                onclick: move |_| on_navigate.call(Destination::NewArticle),
                "+ Новая статья"
            }
        }
        div {
            class: "flex flex-col divide-y border rounded-lg bg-white",
            {recent().into_iter().map(|article| {
                let id = article.id;
                rsx! {
                    div {
                        key: "{id}",
                        class: "flex items-center justify-between px-4 py-3 cursor-pointer hover:bg-neutral-50",
                        onclick: move |_| on_navigate.call(Destination::EditArticle(id)),
                        span { "{article.title}" }
                        ArticleStatusBadge { status: article.status }
                    }
                }
            })}
        }
    }
}
