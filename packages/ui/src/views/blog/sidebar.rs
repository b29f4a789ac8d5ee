use api::blog_public::Sidebar;
use dioxus::prelude::*;

use crate::navigation::Destination;
use crate::services::use_api;

/// Categories and popular articles. A failed half stays empty.
#[component]
pub fn BlogSidebar(on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let sidebar = use_resource(move || {
        let api = api.blog_public.clone();
        async move { api.sidebar().await }
    });

    let Some(Sidebar { categories, popular }) = sidebar() else {
        return rsx! {
            aside { class: "animate-pulse flex flex-col gap-3", div { class: "h-40 bg-neutral-200 rounded" } }
        };
    };

    rsx! {
        aside {
            class: "flex flex-col gap-6",
            if !categories.is_empty() {
                section {
                    class: "bg-white border rounded-lg p-5",
                    h4 { class: "font-semibold mb-3", "Категории" }
                    ul {
                        class: "flex flex-col gap-2 text-sm",
                        {categories.into_iter().map(|category| {
                            let slug = category.slug.clone();
                            let color = category.color.clone().unwrap_or_else(|| "#a3a3a3".to_string());
                            rsx! {
                                li {
                                    key: "{category.id}",
                                    class: "flex items-center gap-2 cursor-pointer hover:underline",
                                    onclick: move |_| on_navigate.call(Destination::BlogCategory(slug.clone())),
                                    span { class: "w-2 h-2 rounded-full", style: "background: {color}" }
                                    span { class: "flex-1", "{category.name}" }
                                    span { class: "text-neutral-400", "{category.articles_count}" }
                                }
                            }
                        })}
                    }
                }
            }
            if !popular.is_empty() {
                section {
                    class: "bg-white border rounded-lg p-5",
                    h4 { class: "font-semibold mb-3", "Популярное" }
                    ol {
                        class: "flex flex-col gap-3 text-sm list-decimal list-inside",
                        {popular.into_iter().map(|article| {
                            let slug = article.slug.clone();
                            rsx! {
                                li {
                                    key: "{article.id}",
                                    class: "cursor-pointer hover:underline",
                                    onclick: move |_| on_navigate.call(Destination::BlogArticle(slug.clone())),
                                    "{article.title}"
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
