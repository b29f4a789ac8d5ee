use dioxus::prelude::*;
use store::filters::PublicArticleFilters;
use store::messages;
use store::pagination::Noun;

use super::card::ArticleCard;
use super::sidebar::BlogSidebar;
use crate::components::{EmptyState, ErrorBanner, Input, PaginationBar, Skeleton};
use crate::hooks::use_paginated_list;
use crate::navigation::Destination;
use crate::services::use_api;

/// Published articles matching `filters`, with search and the sidebar.
#[component]
fn ArticleGrid(
    title: String,
    #[props(default)] subtitle: Option<String>,
    filters: PublicArticleFilters,
    on_navigate: EventHandler<Destination>,
) -> Element {
    let api = use_api();
    let initial = filters.clone();
    let mut list = use_paginated_list(api.blog_public.clone(), move || initial, messages::LOAD_ARTICLES_FAILED);
    let mut search = use_signal(String::new);
    let state = list.list.read().clone();

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-4 py-10",
            header {
                class: "mb-8",
                h1 { class: "text-3xl font-bold", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "mt-2 text-neutral-600", "{subtitle}" }
                }
            }
            div {
                class: "grid grid-cols-1 lg:grid-cols-4 gap-8",
                div {
                    class: "lg:col-span-3",
                    div {
                        class: "max-w-sm mb-6",
                        Input {
                            placeholder: "Поиск по блогу",
                            value: search(),
                            oninput: move |evt: FormEvent| {
                                search.set(evt.value());
                                list.update(|f| f.with_search(&evt.value()));
                            },
                        }
                    }
                    if let Some(message) = state.error.clone() {
                        ErrorBanner {
                            message,
                            on_retry: move |_| {
                                spawn(list.refetch());
                            },
                        }
                    }
                    if state.loading && state.items.is_empty() {
                        Skeleton { rows: 3 }
                    } else if state.items.is_empty() {
                        EmptyState { message: "Статей пока нет" }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                            {state.items.iter().cloned().map(|article| {
                                let id = article.id;
                                rsx! { ArticleCard { key: "{id}", article, on_navigate } }
                            })}
                        }
                        PaginationBar {
                            meta: state.meta,
                            noun: Noun::ARTICLES,
                            on_page: move |page| list.go_to_page(page),
                        }
                    }
                }
                BlogSidebar { on_navigate }
            }
        }
    }
}

#[component]
pub fn BlogIndexView(on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        ArticleGrid {
            title: "Блог Buildline",
            subtitle: "Практика управления строительными проектами".to_string(),
            filters: PublicArticleFilters::default(),
            on_navigate,
        }
    }
}

/// Articles of one category. Mount with a `key` per slug.
#[component]
pub fn BlogCategoryView(slug: String, on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let lookup = slug.clone();
    let category = use_resource(move || {
        let api = api.blog_public.clone();
        let slug = lookup.clone();
        async move {
            api.category(&slug)
                .await
                .inspect_err(|e| tracing::error!("category {slug}: {e}"))
                .ok()
        }
    });
    let (title, subtitle) = match category().flatten() {
        Some(c) => (c.name, c.description),
        None => (slug.clone(), None),
    };

    rsx! {
        ArticleGrid {
            title,
            subtitle,
            filters: PublicArticleFilters::for_category(&slug),
            on_navigate,
        }
    }
}

/// Articles with one tag. Mount with a `key` per slug.
#[component]
pub fn BlogTagView(slug: String, on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let lookup = slug.clone();
    let tag = use_resource(move || {
        let api = api.blog_public.clone();
        let slug = lookup.clone();
        async move {
            api.tag(&slug)
                .await
                .inspect_err(|e| tracing::error!("tag {slug}: {e}"))
                .ok()
        }
    });
    let name = tag().flatten().map(|t| t.name).unwrap_or_else(|| slug.clone());

    rsx! {
        ArticleGrid {
            title: "#{name}",
            filters: PublicArticleFilters::for_tag(&slug),
            on_navigate,
        }
    }
}
