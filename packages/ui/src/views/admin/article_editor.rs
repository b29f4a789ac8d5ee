use api::blog_admin::BlockInput;
use dioxus::prelude::*;
use store::messages;
use store::models::{ArticleInput, ArticleStatus, Category, ContentBlock, Id, Tag};
use store::reorder::{move_item, order_ids, persist_order};
use store::slug::{follow_source, slugify, transliterated_slug};
use store::validation::{validate_article, FieldErrors};

use crate::components::{
    block_kind_label, render_block, Button, ButtonVariant, Checkbox, ErrorBanner, Input, Label, Markdown,
    ReorderableRow, Select, Skeleton, Textarea, BLOCK_KINDS,
};
use crate::navigation::Destination;
use crate::notifications::use_feedback;
use crate::services::{confirm, use_api};

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn error_of(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.get(field).map(str::to_string)
}

/// Create/edit form of an article. `id == None` creates a new one.
///
/// Content blocks can only be managed once the article exists.
#[component]
pub fn ArticleEditorView(id: Option<Id>, on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut form = use_signal(ArticleInput::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut tags = use_signal(Vec::<Tag>::new);
    let mut loading = use_signal(|| id.is_some());
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut preview = use_signal(|| false);

    let loader_api = api.blog_admin.clone();
    let mut loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            let (loaded_categories, loaded_tags) = futures::join!(api.categories(), api.tags());
            match loaded_categories {
                Ok(list) => categories.set(list),
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("categories for editor: {e}");
                }
            }
            match loaded_tags {
                Ok(list) => tags.set(list),
                Err(e) => tracing::error!("tags for editor: {e}"),
            }
            let Some(id) = id else {
                return;
            };
            match api.article(id).await {
                Ok(article) => {
                    form.set(ArticleInput::from_article(&article));
                    load_error.set(None);
                }
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("article {id}: {e}");
                    load_error.set(Some(messages::LOAD_ARTICLE_FAILED.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let save_api = api.blog_admin.clone();
    let save = use_callback(move |publish: bool| {
        let mut input = form.peek().clone();
        if publish {
            input.status = ArticleStatus::Published;
        }
        if input.slug.trim().is_empty() {
            input.slug = slugify(&input.title);
        }
        if let Err(found) = validate_article(&input) {
            errors.set(found);
            feedback.warning(messages::FORM_HAS_ERRORS);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        let api = save_api.clone();
        spawn(async move {
            let result = match id {
                Some(id) => api.update_article(id, &input).await,
                None => api.create_article(&input).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    feedback.success(messages::SAVED);
                    if publish {
                        on_navigate.call(Destination::Articles);
                    } else if id.is_none() {
                        on_navigate.call(Destination::EditArticle(saved.id));
                    } else {
                        form.set(ArticleInput::from_article(&saved));
                    }
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
        });
    });

    if loading() {
        return rsx! { Skeleton { rows: 8 } };
    }
    if let Some(message) = load_error() {
        return rsx! {
            ErrorBanner {
                message,
                on_retry: move |_| {
                    loading.set(true);
                    loader.restart();
                },
            }
        };
    }

    let current = form();
    let errs = errors();
    let category_options: Vec<(String, String)> = std::iter::once((String::new(), "Выберите категорию".to_string()))
        .chain(categories().iter().map(|c| (c.id.to_string(), c.name.clone())))
        .collect();
    let status_options: Vec<(String, String)> = ArticleStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    rsx! {
        div {
            class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
            div {
                class: "lg:col-span-2 flex flex-col gap-4 bg-white border rounded-lg p-6",
                div {
                    Label { html_for: "title", "Заголовок" }
                    Input {
                        id: "title",
                        value: current.title.clone(),
                        error: error_of(&errs, "title"),
                        oninput: move |evt: FormEvent| {
                            let title = evt.value();
                            let mut f = form.write();
                            f.slug = follow_source(&f.slug, &title);
                            f.title = title;
                            errors.write().clear_field("title");
                        },
                    }
                }
                div {
                    div {
                        class: "flex items-center justify-between",
                        Label { html_for: "slug", "Адрес (slug)" }
                        button {
                            class: "text-xs underline text-neutral-500",
                            title: "Записать заголовок латиницей",
                            onclick: move |_| {
                                let mut f = form.write();
                                f.slug = transliterated_slug(&f.title);
                                errors.write().clear_field("slug");
                            },
                            "Транслитерация"
                        }
                    }
                    Input {
                        id: "slug",
                        value: current.slug.clone(),
                        error: error_of(&errs, "slug"),
                        oninput: move |evt: FormEvent| {
                            form.write().slug = evt.value();
                            errors.write().clear_field("slug");
                        },
                    }
                }
                div {
                    Label { html_for: "excerpt", "Анонс" }
                    Textarea {
                        id: "excerpt",
                        rows: 2,
                        value: current.excerpt.clone(),
                        oninput: move |evt: FormEvent| form.write().excerpt = evt.value(),
                    }
                }
                div {
                    div {
                        class: "flex items-center justify-between",
                        Label { html_for: "content", "Текст (Markdown)" }
                        button {
                            class: "text-xs underline text-neutral-500",
                            onclick: move |_| preview.toggle(),
                            if preview() { "Редактировать" } else { "Предпросмотр" }
                        }
                    }
                    if preview() {
                        Markdown { source: current.content.clone(), class: "border rounded p-4 mt-1.5" }
                    } else {
                        Textarea {
                            id: "content",
                            rows: 16,
                            class: "font-mono",
                            value: current.content.clone(),
                            error: error_of(&errs, "content"),
                            oninput: move |evt: FormEvent| {
                                form.write().content = evt.value();
                                errors.write().clear_field("content");
                            },
                        }
                    }
                }

                if let Some(article_id) = id {
                    BlockList { article_id }
                } else {
                    p { class: "text-sm text-neutral-500", "Сохраните статью, чтобы добавлять блоки." }
                }
            }

            div {
                class: "flex flex-col gap-4",
                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-4",
                    div {
                        Label { html_for: "status", "Статус" }
                        Select {
                            id: "status",
                            value: current.status.as_str().to_string(),
                            options: status_options,
                            onchange: move |evt: FormEvent| {
                                if let Some(status) = ArticleStatus::parse(&evt.value()) {
                                    form.write().status = status;
                                }
                            },
                        }
                    }
                    div {
                        Label { html_for: "category", "Категория" }
                        Select {
                            id: "category",
                            value: current.category_id.map(|c| c.to_string()).unwrap_or_default(),
                            options: category_options,
                            error: error_of(&errs, "category_id"),
                            onchange: move |evt: FormEvent| {
                                form.write().category_id = evt.value().parse().ok();
                                errors.write().clear_field("category_id");
                            },
                        }
                    }
                    div {
                        Label { "Теги" }
                        div {
                            class: "flex flex-wrap gap-3 mt-1.5",
                            {tags().into_iter().map(|tag| {
                                let tag_id = tag.id;
                                rsx! {
                                    Checkbox {
                                        key: "{tag_id}",
                                        checked: current.tag_ids.contains(&tag_id),
                                        label: tag.name,
                                        onchange: move |on: bool| {
                                            let mut f = form.write();
                                            f.tag_ids.retain(|&t| t != tag_id);
                                            if on {
                                                f.tag_ids.push(tag_id);
                                            }
                                        },
                                    }
                                }
                            })}
                        }
                    }
                    div {
                        Label { html_for: "featured_image", "Обложка (URL)" }
                        Input {
                            id: "featured_image",
                            value: current.featured_image.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| form.write().featured_image = non_empty(evt.value()),
                        }
                    }
                }

                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-4",
                    h3 { class: "font-semibold", "SEO" }
                    div {
                        Label { html_for: "meta_title", "Meta title" }
                        Input {
                            id: "meta_title",
                            value: current.seo.meta_title.clone().unwrap_or_default(),
                            error: error_of(&errs, "meta_title"),
                            oninput: move |evt: FormEvent| {
                                form.write().seo.meta_title = non_empty(evt.value());
                                errors.write().clear_field("meta_title");
                            },
                        }
                    }
                    div {
                        Label { html_for: "meta_description", "Meta description" }
                        Textarea {
                            id: "meta_description",
                            rows: 3,
                            value: current.seo.meta_description.clone().unwrap_or_default(),
                            error: error_of(&errs, "meta_description"),
                            oninput: move |evt: FormEvent| {
                                form.write().seo.meta_description = non_empty(evt.value());
                                errors.write().clear_field("meta_description");
                            },
                        }
                    }
                    div {
                        Label { html_for: "og_title", "OG title" }
                        Input {
                            id: "og_title",
                            value: current.seo.og_title.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| form.write().seo.og_title = non_empty(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "og_description", "OG description" }
                        Textarea {
                            id: "og_description",
                            rows: 2,
                            value: current.seo.og_description.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| form.write().seo.og_description = non_empty(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "og_image", "OG image (URL)" }
                        Input {
                            id: "og_image",
                            value: current.seo.og_image.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| form.write().seo.og_image = non_empty(evt.value()),
                        }
                    }
                }

                div {
                    class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: saving(),
                        onclick: move |_| save.call(false),
                        "Сохранить"
                    }
                    Button {
                        disabled: saving(),
                        onclick: move |_| save.call(true),
                        "Опубликовать"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_navigate.call(Destination::Articles),
                        "Отмена"
                    }
                }
            }
        }
    }
}

/// Ordered content blocks of a saved article.
#[component]
fn BlockList(article_id: Id) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut blocks = use_signal(Vec::<ContentBlock>::new);
    let dragging = use_signal(|| Option::<Id>::None);
    let mut draft = use_signal(|| BlockInput {
        kind: "text".to_string(),
        content: String::new(),
    });
    let mut editing = use_signal(|| Option::<(Id, BlockInput)>::None);

    let load_api = api.blog_admin.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.blocks(article_id).await {
                Ok(list) => blocks.set(list),
                Err(e) => feedback.failure(&e, messages::LOAD_ARTICLE_FAILED),
            }
        }
    });

    let order_api = api.blog_admin.clone();
    let drop_block = use_callback(move |(dragged, target): (Id, Id)| {
        let before = blocks.peek().clone();
        let mut current = before.clone();
        if !move_item(&mut current, dragged, target) {
            return;
        }
        blocks.set(current.clone());
        let sink = order_api.block_order(article_id);
        spawn(async move {
            let outcome = persist_order(&sink, &order_ids(&current)).await;
            if let Some(shown) = outcome.replacement(before) {
                blocks.set(shown);
                feedback.warning(messages::REORDER_FAILED);
            }
        });
    });

    let add_api = api.blog_admin.clone();
    let add_block = use_callback(move |_: ()| {
        let input = draft.peek().clone();
        if input.content.trim().is_empty() {
            feedback.warning(messages::FORM_HAS_ERRORS);
            return;
        }
        let api = add_api.clone();
        spawn(async move {
            match api.create_block(article_id, &input).await {
                Ok(block) => {
                    blocks.write().push(block);
                    draft.write().content.clear();
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
        });
    });

    let update_api = api.blog_admin.clone();
    let save_edit = use_callback(move |_: ()| {
        let Some((block_id, input)) = editing.peek().clone() else {
            return;
        };
        let api = update_api.clone();
        spawn(async move {
            match api.update_block(article_id, block_id, &input).await {
                Ok(updated) => {
                    if let Some(slot) = blocks.write().iter_mut().find(|b| b.id == block_id) {
                        *slot = updated;
                    }
                    editing.set(None);
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
        });
    });

    let delete_api = api.blog_admin.clone();
    let delete_block = use_callback(move |block_id: Id| {
        if !confirm("Удалить блок?") {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_block(article_id, block_id).await {
                Ok(()) => blocks.write().retain(|b| b.id != block_id),
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    let kind_options: Vec<(String, String)> = BLOCK_KINDS
        .iter()
        .map(|(kind, label)| (kind.to_string(), label.to_string()))
        .collect();
    let edit_state = editing();

    rsx! {
        div {
            class: "border-t pt-4",
            h3 { class: "font-semibold mb-3", "Блоки" }
            div {
                class: "flex flex-col gap-2",
                {blocks().into_iter().map(|block| {
                    let block_id = block.id;
                    let html = render_block(&block.kind, &block.content);
                    let in_edit = edit_state.as_ref().filter(|(id, _)| *id == block_id).map(|(_, input)| input.clone());
                    let start_input = BlockInput { kind: block.kind.clone(), content: block.content.clone() };
                    rsx! {
                        ReorderableRow {
                            key: "{block_id}",
                            id: block_id,
                            dragging,
                            disabled: in_edit.is_some(),
                            on_drop: move |pair| drop_block.call(pair),
                            div {
                                class: "flex-1 border rounded p-3",
                                div {
                                    class: "flex items-center justify-between text-xs text-neutral-500 mb-2",
                                    span { "{block_kind_label(&block.kind)}" }
                                    div {
                                        class: "flex gap-2",
                                        if in_edit.is_none() {
                                            button {
                                                class: "underline",
                                                onclick: move |_| editing.set(Some((block_id, start_input.clone()))),
                                                "Изменить"
                                            }
                                        }
                                        button {
                                            class: "underline text-red-600",
                                            onclick: move |_| delete_block.call(block_id),
                                            "Удалить"
                                        }
                                    }
                                }
                                if let Some(input) = in_edit.clone() {
                                    Textarea {
                                        rows: 5,
                                        value: input.content.clone(),
                                        oninput: move |evt: FormEvent| {
                                            if let Some((_, input)) = editing.write().as_mut() {
                                                input.content = evt.value();
                                            }
                                        },
                                    }
                                    div {
                                        class: "flex gap-2 mt-2",
                                        Button { onclick: move |_| save_edit.call(()), "Сохранить" }
                                        Button { variant: ButtonVariant::Ghost, onclick: move |_| editing.set(None), "Отмена" }
                                    }
                                } else {
                                    div { class: "prose max-w-none", dangerous_inner_html: "{html}" }
                                }
                            }
                        }
                    }
                })}
            }

            div {
                class: "flex flex-col gap-2 mt-4 border border-dashed rounded p-3",
                div {
                    class: "w-48",
                    Select {
                        value: draft().kind,
                        options: kind_options,
                        onchange: move |evt: FormEvent| draft.write().kind = evt.value(),
                    }
                }
                Textarea {
                    rows: 3,
                    placeholder: "Содержимое блока",
                    value: draft().content,
                    oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                }
                div {
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| add_block.call(()), "+ Добавить блок" }
                }
            }
        }
    }
}
