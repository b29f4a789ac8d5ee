use dioxus::prelude::*;
use store::commands::{ArticleBulkAction, ArticleCommand, Command};
use store::filters::ArticleFilters;
use store::list::{dispatch, dispatch_bulk};
use store::messages;
use store::models::{ArticleStatus, Category, Id};
use store::pagination::Noun;
use store::Selection;

use crate::components::{
    ArticleStatusBadge, Button, ButtonVariant, EmptyState, ErrorBanner, Input, PaginationBar, Select, Skeleton,
};
use crate::hooks::use_paginated_list;
use crate::navigation::Destination;
use crate::notifications::use_feedback;
use crate::services::{confirm, use_api};

/// Article table with filters, row actions and bulk actions.
#[component]
pub fn ArticlesView(on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut list = use_paginated_list(
        api.blog_admin.clone(),
        ArticleFilters::default,
        messages::LOAD_ARTICLES_FAILED,
    );
    let mut selection = use_signal(Selection::default);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut search = use_signal(String::new);

    let categories_api = api.blog_admin.clone();
    let _categories = use_resource(move || {
        let api = categories_api.clone();
        async move {
            match api.categories().await {
                Ok(loaded) => categories.set(loaded),
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("categories for filter: {e}");
                }
            }
        }
    });

    let command_api = api.blog_admin.clone();
    let run_command = use_callback(move |command: ArticleCommand| {
        if let Some(question) = command.confirmation() {
            if !confirm(question) {
                return;
            }
        }
        let api = command_api.clone();
        spawn(async move {
            match dispatch(&api, &command, list.refetch()).await {
                Ok(()) => feedback.success(command.success_message()),
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    let bulk_api = api.blog_admin.clone();
    let run_bulk = use_callback(move |action: ArticleBulkAction| {
        if action == ArticleBulkAction::Delete && !confirm("Удалить выбранные статьи?") {
            return;
        }
        let api = bulk_api.clone();
        let sent = selection.peek().ids();
        spawn(async move {
            match dispatch_bulk(&api, action, &sent, list.refetch()).await {
                Ok(()) => {
                    selection.write().remove_all(&sent);
                    feedback.success(messages::SAVED);
                }
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    // Selected rows that left the screen must not be hit by a bulk action.
    use_effect(move || {
        let visible: Vec<Id> = list.list.read().items.iter().map(|row| row.id).collect();
        selection.write().retain_visible(&visible);
    });

    let filters = list.filters();
    let state = list.list.read().clone();
    let visible_ids: Vec<Id> = state.items.iter().map(|a| a.id).collect();
    let all_selected = selection().all_selected(&visible_ids);
    let toggle_all = move |_: FormEvent| selection.write().toggle_all(&visible_ids);

    let status_options: Vec<(String, String)> = std::iter::once((String::new(), "Все статусы".to_string()))
        .chain(ArticleStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label().to_string())))
        .collect();
    let category_options: Vec<(String, String)> = std::iter::once((String::new(), "Все категории".to_string()))
        .chain(categories().iter().map(|c| (c.id.to_string(), c.name.clone())))
        .collect();

    rsx! {
        div {
            class: "flex flex-wrap items-end gap-3 mb-4",
            div {
                class: "w-64",
                Input {
                    placeholder: "Поиск по заголовку",
                    value: search(),
                    oninput: move |evt: FormEvent| {
                        search.set(evt.value());
                        list.update(|f| f.with_search(&evt.value()));
                    },
                }
            }
            div {
                class: "w-48",
                Select {
                    value: filters.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
                    options: status_options,
                    onchange: move |evt: FormEvent| list.update(|f| f.with_status(ArticleStatus::parse(&evt.value()))),
                }
            }
            div {
                class: "w-48",
                Select {
                    value: filters.category_id.map(|id| id.to_string()).unwrap_or_default(),
                    options: category_options,
                    onchange: move |evt: FormEvent| list.update(|f| f.with_category(evt.value().parse().ok())),
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    search.set(String::new());
                    list.reset();
                },
                "Сбросить"
            }
            div { class: "flex-1" }
            Button {
                onclick: move |_| on_navigate.call(Destination::NewArticle),
                "+ Новая статья"
            }
        }

        if !selection().is_empty() {
            div {
                class: "flex items-center gap-2 mb-3 text-sm",
                span { "Выбрано: {selection().len()}" }
                for action in ArticleBulkAction::ALL {
                    Button {
                        key: "{action.label()}",
                        variant: if action == ArticleBulkAction::Delete { ButtonVariant::Destructive } else { ButtonVariant::Outline },
                        onclick: move |_| run_bulk.call(action),
                        "{action.label()}"
                    }
                }
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
            Skeleton {}
        } else if state.items.is_empty() {
            EmptyState {}
        } else {
            table {
                class: "w-full bg-white border rounded-lg text-sm",
                thead {
                    tr {
                        class: "text-left text-neutral-500",
                        th {
                            class: "p-3 w-8",
                            input {
                                r#type: "checkbox",
                                checked: all_selected,
                                onchange: toggle_all,
                            }
                        }
                        th { class: "p-3", "Заголовок" }
                        th { class: "p-3", "Категория" }
                        th { class: "p-3", "Статус" }
                        th { class: "p-3", "Просмотры" }
                        th { class: "p-3", "" }
                    }
                }
                tbody {
                    {state.items.iter().map(|article| {
                        let id = article.id;
                        let category = article.category.as_ref().map(|c| c.name.clone()).unwrap_or_default();
                        let published = article.status == ArticleStatus::Published;
                        rsx! {
                            tr {
                                key: "{id}",
                                class: "border-t hover:bg-neutral-50",
                                td {
                                    class: "p-3",
                                    input {
                                        r#type: "checkbox",
                                        checked: selection().contains(id),
                                        onchange: move |_| selection.write().toggle(id),
                                    }
                                }
                                td {
                                    class: "p-3 font-medium cursor-pointer",
                                    onclick: move |_| on_navigate.call(Destination::EditArticle(id)),
                                    "{article.title}"
                                }
                                td { class: "p-3", "{category}" }
                                td { class: "p-3", ArticleStatusBadge { status: article.status } }
                                td { class: "p-3", "{article.counters.views_count}" }
                                td {
                                    class: "p-3 whitespace-nowrap text-right",
                                    if !published {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(ArticleCommand::Publish(id)),
                                            "Опубликовать"
                                        }
                                    } else {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(ArticleCommand::Archive(id)),
                                            "В архив"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| run_command.call(ArticleCommand::Duplicate(id)),
                                        "Копия"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        class: "text-red-600",
                                        onclick: move |_| run_command.call(ArticleCommand::Delete(id)),
                                        "Удалить"
                                    }
                                }
                            }
                        }
                    })}
                }
            }

            PaginationBar {
                meta: state.meta,
                noun: Noun::ARTICLES,
                per_page: filters.per_page,
                on_page: move |page| list.go_to_page(page),
                on_per_page: move |size| list.update(|f| f.with_per_page(size)),
            }
        }
    }
}
