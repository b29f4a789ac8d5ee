use dioxus::prelude::*;
use store::models::Article;

use crate::navigation::Destination;

/// Publication date, or creation date for unpublished previews.
pub(crate) fn format_date(article: &Article) -> String {
    article
        .published_at
        .or(article.created_at)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn ArticleCard(article: Article, on_navigate: EventHandler<Destination>) -> Element {
    let slug = article.slug.clone();
    let date = format_date(&article);
    let category = article.category.as_ref().map(|c| (c.slug.clone(), c.name.clone()));

    rsx! {
        article {
            class: "flex flex-col bg-white border rounded-lg overflow-hidden hover:shadow-md transition-shadow",
            if let Some(image) = article.featured_image.clone() {
                img { class: "h-44 w-full object-cover", src: "{image}", alt: "{article.title}" }
            }
            div {
                class: "flex flex-col flex-1 gap-2 p-5",
                if let Some((category_slug, category_name)) = category {
                    button {
                        class: "self-start text-xs font-medium uppercase tracking-wide text-neutral-500 hover:underline",
                        onclick: move |_| on_navigate.call(Destination::BlogCategory(category_slug.clone())),
                        "{category_name}"
                    }
                }
                h3 {
                    class: "text-lg font-semibold leading-snug cursor-pointer hover:underline",
                    onclick: move |_| on_navigate.call(Destination::BlogArticle(slug.clone())),
                    "{article.title}"
                }
                if let Some(excerpt) = article.excerpt.clone() {
                    p { class: "text-sm text-neutral-600 line-clamp-3", "{excerpt}" }
                }
                div { class: "flex-1" }
                div {
                    class: "flex items-center gap-4 text-xs text-neutral-400",
                    span { "{date}" }
                    span { "👁 {article.counters.views_count}" }
                    span { "♥ {article.counters.likes_count}" }
                    span { "💬 {article.counters.comments_count}" }
                }
            }
        }
    }
}
