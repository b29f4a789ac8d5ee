use dioxus::prelude::*;
use store::messages;
use store::models::{Article, Comment, CommentInput, Id};
use store::validation::{validate_comment, FieldErrors};

use super::card::format_date;
use super::sidebar::BlogSidebar;
use crate::components::{Button, ErrorBanner, Input, Label, Markdown, Skeleton, Textarea};
use crate::navigation::Destination;
use crate::notifications::use_feedback;
use crate::services::use_api;

/// Article page: body, tags, likes and the approved comment thread.
/// Mount with a `key` per slug.
#[component]
pub fn BlogArticleView(slug: String, on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut article = use_signal(|| Option::<Article>::None);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut liked = use_signal(|| false);
    let reply_to = use_signal(|| Option::<Id>::None);

    let load_api = api.blog_public.clone();
    let load_slug = slug.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        let slug = load_slug.clone();
        async move {
            let (loaded, thread) = futures::join!(api.article(&slug), api.comments(&slug));
            match loaded {
                Ok(a) => {
                    article.set(Some(a));
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("article {slug}: {e}");
                    error.set(Some(messages::LOAD_ARTICLE_FAILED.to_string()));
                }
            }
            match thread {
                Ok(list) => comments.set(list),
                Err(e) => tracing::error!("comments of {slug}: {e}"),
            }
        }
    });

    let like_api = api.blog_public.clone();
    let like_slug = slug.clone();
    let like = use_callback(move |_: ()| {
        if liked() {
            return;
        }
        liked.set(true);
        let api = like_api.clone();
        let slug = like_slug.clone();
        spawn(async move {
            match api.like(&slug).await {
                Ok(count) => {
                    if let Some(a) = article.write().as_mut() {
                        a.counters.likes_count = count;
                    }
                }
                Err(e) => {
                    liked.set(false);
                    feedback.failure(&e, messages::ACTION_FAILED);
                }
            }
        });
    });

    if let Some(message) = error() {
        return rsx! {
            div {
                class: "max-w-3xl mx-auto px-4 py-10",
                ErrorBanner { message, on_retry: move |_| loader.restart() }
                button {
                    class: "text-sm underline",
                    onclick: move |_| on_navigate.call(Destination::Blog),
                    "← Все статьи"
                }
            }
        };
    }
    let Some(current) = article() else {
        return rsx! {
            div { class: "max-w-3xl mx-auto px-4 py-10", Skeleton { rows: 8 } }
        };
    };

    let date = format_date(&current);
    let author = current.author.as_ref().map(|a| a.name.clone()).unwrap_or_default();
    let category = current.category.as_ref().map(|c| (c.slug.clone(), c.name.clone()));
    let thread = comments();
    let page_title = current.seo.meta_title.clone().unwrap_or_else(|| current.title.clone());

    rsx! {
        document::Title { "{page_title}" }
        if let Some(description) = current.seo.meta_description.clone() {
            document::Meta { name: "description", content: description }
        }
        div {
            class: "max-w-6xl mx-auto px-4 py-10 grid grid-cols-1 lg:grid-cols-4 gap-8",
            article {
                class: "lg:col-span-3 bg-white border rounded-lg p-8",
                button {
                    class: "text-sm text-neutral-500 hover:underline mb-4",
                    onclick: move |_| on_navigate.call(Destination::Blog),
                    "← Все статьи"
                }
                if let Some((category_slug, category_name)) = category {
                    div {
                        button {
                            class: "text-xs font-medium uppercase tracking-wide text-neutral-500 hover:underline",
                            onclick: move |_| on_navigate.call(Destination::BlogCategory(category_slug.clone())),
                            "{category_name}"
                        }
                    }
                }
                h1 { class: "text-3xl font-bold mt-2", "{current.title}" }
                div {
                    class: "flex flex-wrap items-center gap-4 text-sm text-neutral-500 mt-3 mb-6",
                    if !author.is_empty() {
                        span { "{author}" }
                    }
                    span { "{date}" }
                    span { "👁 {current.counters.views_count}" }
                }
                if let Some(image) = current.featured_image.clone() {
                    img { class: "w-full rounded mb-6", src: "{image}", alt: "{current.title}" }
                }
                Markdown { source: current.content.clone() }

                if !current.tags.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2 mt-8",
                        {current.tags.iter().map(|tag| {
                            let tag_slug = tag.slug.clone();
                            rsx! {
                                button {
                                    key: "{tag.id}",
                                    class: "text-xs bg-neutral-100 rounded-full px-3 py-1 hover:bg-neutral-200",
                                    onclick: move |_| on_navigate.call(Destination::BlogTag(tag_slug.clone())),
                                    "#{tag.name}"
                                }
                            }
                        })}
                    }
                }

                div {
                    class: "mt-8",
                    button {
                        class: if liked() { "px-4 py-2 rounded-full border border-red-300 text-red-600" } else { "px-4 py-2 rounded-full border hover:border-red-300" },
                        disabled: liked(),
                        onclick: move |_| like.call(()),
                        "♥ {current.counters.likes_count}"
                    }
                }

                section {
                    class: "mt-10 border-t pt-8",
                    h2 { class: "text-xl font-semibold mb-4", "Комментарии ({current.counters.comments_count})" }
                    if thread.is_empty() {
                        p { class: "text-sm text-neutral-500 mb-6", "Будьте первым, кто оставит комментарий." }
                    }
                    {thread.into_iter().map(|comment| {
                        let id = comment.id;
                        rsx! { CommentThread { key: "{id}", comment, depth: 0, reply_to } }
                    })}
                    CommentForm { slug: slug.clone(), reply_to }
                }
            }
            BlogSidebar { on_navigate }
        }
    }
}

/// Replies deeper than this are shown without further indentation.
const MAX_INDENT: u8 = 3;

#[component]
fn CommentThread(comment: Comment, depth: u8, reply_to: Signal<Option<Id>>) -> Element {
    let mut reply_to = reply_to;
    let id = comment.id;
    let date = comment
        .created_at
        .map(|d| d.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_default();
    let indent = if depth > 0 && depth <= MAX_INDENT { "ml-6 border-l pl-4" } else { "" };

    rsx! {
        div {
            class: "mb-4 {indent}",
            div {
                class: "flex items-baseline gap-3",
                span { class: "font-medium", "{comment.author_name}" }
                span { class: "text-xs text-neutral-400", "{date}" }
            }
            p { class: "text-sm mt-1 whitespace-pre-line", "{comment.content}" }
            button {
                class: "text-xs text-neutral-500 hover:underline mt-1",
                onclick: move |_| reply_to.set(Some(id)),
                "Ответить"
            }
            {comment.replies.iter().cloned().map(|reply| {
                let reply_id = reply.id;
                rsx! { CommentThread { key: "{reply_id}", comment: reply, depth: depth.saturating_add(1), reply_to } }
            })}
        }
    }
}

#[component]
fn CommentForm(slug: String, reply_to: Signal<Option<Id>>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut reply_to = reply_to;
    let mut form = use_signal(CommentInput::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut sending = use_signal(|| false);

    let send_api = api.blog_public.clone();
    let send = use_callback(move |_: ()| {
        let mut input = form.peek().clone();
        input.parent_id = *reply_to.peek();
        if let Err(found) = validate_comment(&input) {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        sending.set(true);
        let api = send_api.clone();
        let slug = slug.clone();
        spawn(async move {
            match api.post_comment(&slug, &input).await {
                Ok(_) => {
                    form.set(CommentInput::default());
                    reply_to.set(None);
                    feedback.success("Комментарий отправлен на модерацию");
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
            sending.set(false);
        });
    });

    let current = form();
    let errs = errors();

    rsx! {
        div {
            class: "mt-6 flex flex-col gap-4 bg-neutral-50 rounded-lg p-5",
            h3 { class: "font-semibold", "Оставить комментарий" }
            if reply_to().is_some() {
                div {
                    class: "text-xs text-neutral-500",
                    "Ответ на комментарий · "
                    button { class: "underline", onclick: move |_| reply_to.set(None), "отменить" }
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div {
                    Label { html_for: "comment-name", "Имя" }
                    Input {
                        id: "comment-name",
                        value: current.author_name.clone(),
                        error: errs.get("author_name").map(str::to_string),
                        oninput: move |evt: FormEvent| form.write().author_name = evt.value(),
                    }
                }
                div {
                    Label { html_for: "comment-email", "Email (не публикуется)" }
                    Input {
                        id: "comment-email",
                        r#type: "email",
                        value: current.author_email.clone(),
                        error: errs.get("author_email").map(str::to_string),
                        oninput: move |evt: FormEvent| form.write().author_email = evt.value(),
                    }
                }
            }
            div {
                Label { html_for: "comment-content", "Комментарий" }
                Textarea {
                    id: "comment-content",
                    rows: 4,
                    value: current.content.clone(),
                    error: errs.get("content").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().content = evt.value(),
                }
            }
            div {
                Button { disabled: sending(), onclick: move |_| send.call(()), "Отправить" }
            }
        }
    }
}
