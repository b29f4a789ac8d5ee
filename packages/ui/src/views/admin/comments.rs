use dioxus::prelude::*;
use store::commands::{Command, CommentBulkAction, CommentCommand};
use store::filters::CommentFilters;
use store::list::{dispatch, dispatch_bulk};
use store::messages;
use store::models::{CommentStatus, Id};
use store::pagination::Noun;
use store::Selection;

use crate::components::{
    Button, ButtonVariant, CommentStatusBadge, EmptyState, ErrorBanner, Input, ModalOverlay, PaginationBar, Select,
    Skeleton, Textarea,
};
use crate::hooks::use_paginated_list;
use crate::notifications::use_feedback;
use crate::services::{confirm, use_api};

/// Moderation queue: status filter, row and bulk actions, replies.
#[component]
pub fn CommentsView() -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut list = use_paginated_list(
        api.blog_admin.clone(),
        CommentFilters::default,
        messages::LOAD_COMMENTS_FAILED,
    );
    let mut selection = use_signal(Selection::default);
    let mut search = use_signal(String::new);
    let mut replying = use_signal(|| Option::<(Id, String)>::None);

    let command_api = api.blog_admin.clone();
    let run_command = use_callback(move |command: CommentCommand| {
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
    let run_bulk = use_callback(move |action: CommentBulkAction| {
        if action == CommentBulkAction::Delete && !confirm("Удалить выбранные комментарии?") {
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

    let reply_api = api.blog_admin.clone();
    let send_reply = use_callback(move |(id, content): (Id, String)| {
        if content.trim().is_empty() {
            feedback.warning(messages::FORM_HAS_ERRORS);
            return;
        }
        let api = reply_api.clone();
        spawn(async move {
            match api.reply_to_comment(id, content.trim()).await {
                Ok(_) => {
                    replying.set(None);
                    feedback.success("Ответ опубликован");
                    list.refetch().await;
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
        });
    });

    let filters = list.filters();
    let state = list.list.read().clone();
    let visible_ids: Vec<Id> = state.items.iter().map(|c| c.id).collect();
    let all_selected = selection().all_selected(&visible_ids);
    let toggle_all = move |_: FormEvent| selection.write().toggle_all(&visible_ids);

    let status_options: Vec<(String, String)> = std::iter::once((String::new(), "Все статусы".to_string()))
        .chain(CommentStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label().to_string())))
        .collect();

    rsx! {
        div {
            class: "flex flex-wrap items-end gap-3 mb-4",
            div {
                class: "w-64",
                Input {
                    placeholder: "Поиск по тексту или автору",
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
                    onchange: move |evt: FormEvent| list.update(|f| f.with_status(CommentStatus::parse(&evt.value()))),
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
        }

        if !selection().is_empty() {
            div {
                class: "flex items-center gap-2 mb-3 text-sm",
                span { "Выбрано: {selection().len()}" }
                for action in CommentBulkAction::ALL {
                    Button {
                        key: "{action.label()}",
                        variant: if action == CommentBulkAction::Delete { ButtonVariant::Destructive } else { ButtonVariant::Outline },
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
                        th { class: "p-3", "Комментарий" }
                        th { class: "p-3", "Статья" }
                        th { class: "p-3", "Статус" }
                        th { class: "p-3", "" }
                    }
                }
                tbody {
                    {state.items.iter().map(|comment| {
                        let id = comment.id;
                        let article = comment.article.as_ref().map(|a| a.title.clone()).unwrap_or_default();
                        let date = comment.created_at.map(|d| d.format("%d.%m.%Y %H:%M").to_string()).unwrap_or_default();
                        let status = comment.status;
                        rsx! {
                            tr {
                                key: "{id}",
                                class: "border-t align-top hover:bg-neutral-50",
                                td {
                                    class: "p-3",
                                    input {
                                        r#type: "checkbox",
                                        checked: selection().contains(id),
                                        onchange: move |_| selection.write().toggle(id),
                                    }
                                }
                                td {
                                    class: "p-3 max-w-md",
                                    div { class: "font-medium", "{comment.author_name}" }
                                    div { class: "text-xs text-neutral-400", "{date}" }
                                    p { class: "mt-1 whitespace-pre-line", "{comment.content}" }
                                    if !comment.replies.is_empty() {
                                        p { class: "mt-1 text-xs text-neutral-500", "Ответов: {comment.replies.len()}" }
                                    }
                                }
                                td { class: "p-3", "{article}" }
                                td { class: "p-3", CommentStatusBadge { status } }
                                td {
                                    class: "p-3 whitespace-nowrap text-right",
                                    if status != CommentStatus::Approved {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(CommentCommand::Approve(id)),
                                            "Одобрить"
                                        }
                                    }
                                    if status != CommentStatus::Rejected {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(CommentCommand::Reject(id)),
                                            "Отклонить"
                                        }
                                    }
                                    if status != CommentStatus::Spam {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(CommentCommand::Spam(id)),
                                            "Спам"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| replying.set(Some((id, String::new()))),
                                        "Ответить"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        class: "text-red-600",
                                        onclick: move |_| run_command.call(CommentCommand::Delete(id)),
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
                noun: Noun::COMMENTS,
                on_page: move |page| list.go_to_page(page),
            }
        }

        if let Some((reply_to, draft)) = replying() {
            ModalOverlay {
                title: "Ответ на комментарий",
                on_close: move |_| replying.set(None),
                Textarea {
                    rows: 5,
                    placeholder: "Текст ответа",
                    value: draft,
                    oninput: move |evt: FormEvent| replying.set(Some((reply_to, evt.value()))),
                }
                div {
                    class: "flex justify-end gap-2 mt-4",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| replying.set(None), "Отмена" }
                    Button {
                        onclick: move |_| {
                            let pending = replying.peek().clone();
                            if let Some(pending) = pending {
                                send_reply.call(pending);
                            }
                        },
                        "Отправить"
                    }
                }
            }
        }
    }
}
