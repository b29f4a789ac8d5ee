use dioxus::prelude::*;
use store::messages;
use store::models::{Category, CategoryInput, Id};
use store::reorder::{move_item, order_ids, persist_order};
use store::slug::follow_source;
use store::validation::{validate_category, FieldErrors};

use crate::components::{
    Button, ButtonVariant, Checkbox, EmptyState, ErrorBanner, Input, Label, ModalOverlay, ReorderableRow, Skeleton,
    Textarea,
};
use crate::notifications::use_feedback;
use crate::services::{confirm, use_api};

/// Which category the dialog edits; `None` inside means a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Editing(Option<Id>);

/// Categories in manual order. Rows are dragged to reorder; the server
/// order wins when it refuses the new one.
#[component]
pub fn CategoriesView() -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let dragging = use_signal(|| Option::<Id>::None);
    let mut dialog = use_signal(|| Option::<Editing>::None);

    let load_api = api.blog_admin.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.categories().await {
                Ok(list) => {
                    categories.set(list);
                    error.set(None);
                }
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("categories: {e}");
                    error.set(Some(messages::LOAD_CATEGORIES_FAILED.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let order_api = api.blog_admin.clone();
    let drop_category = use_callback(move |(dragged, target): (Id, Id)| {
        let before = categories.peek().clone();
        let mut current = before.clone();
        if !move_item(&mut current, dragged, target) {
            return;
        }
        categories.set(current.clone());
        let sink = order_api.category_order();
        spawn(async move {
            let outcome = persist_order(&sink, &order_ids(&current)).await;
            if let Some(shown) = outcome.replacement(before) {
                categories.set(shown);
                feedback.warning(messages::REORDER_FAILED);
            }
        });
    });

    let delete_api = api.blog_admin.clone();
    let delete_category = use_callback(move |id: Id| {
        if !confirm("Удалить категорию? Статьи останутся без категории.") {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_category(id).await {
                Ok(()) => {
                    categories.write().retain(|c| c.id != id);
                    feedback.success("Категория удалена");
                }
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    let on_saved = use_callback(move |saved: Category| {
        let mut list = categories.write();
        match list.iter_mut().find(|c| c.id == saved.id) {
            Some(slot) => *slot = saved,
            None => list.push(saved),
        }
        drop(list);
        dialog.set(None);
    });

    rsx! {
        div {
            class: "flex items-center justify-between mb-4",
            p { class: "text-sm text-neutral-500", "Перетаскивайте строки, чтобы изменить порядок." }
            Button {
                onclick: move |_| dialog.set(Some(Editing(None))),
                "+ Новая категория"
            }
        }

        if let Some(message) = error() {
            ErrorBanner {
                message,
                on_retry: move |_| loader.restart(),
            }
        }

        if loading() {
            Skeleton {}
        } else if categories().is_empty() {
            EmptyState {}
        } else {
            div {
                class: "bg-white border rounded-lg divide-y",
                {categories().into_iter().map(|category| {
                    let id = category.id;
                    let color = category.color.clone().unwrap_or_else(|| "#a3a3a3".to_string());
                    rsx! {
                        ReorderableRow {
                            key: "{id}",
                            id,
                            dragging,
                            on_drop: move |pair| drop_category.call(pair),
                            div {
                                class: "flex flex-1 items-center gap-3 py-3 pr-3",
                                span { class: "w-3 h-3 rounded-full", style: "background: {color}" }
                                span { class: "font-medium", "{category.name}" }
                                span { class: "text-xs text-neutral-400", "/{category.slug}" }
                                if !category.is_active {
                                    span { class: "text-xs bg-neutral-200 rounded px-2", "скрыта" }
                                }
                                div { class: "flex-1" }
                                span { class: "text-sm text-neutral-500", "{category.articles_count}" }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| dialog.set(Some(Editing(Some(id)))),
                                    "Изменить"
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    class: "text-red-600",
                                    onclick: move |_| delete_category.call(id),
                                    "Удалить"
                                }
                            }
                        }
                    }
                })}
            }
        }

        if let Some(Editing(target)) = dialog() {
            CategoryDialog {
                existing: target.and_then(|id| categories.peek().iter().find(|c| c.id == id).cloned()),
                on_saved: move |saved| on_saved.call(saved),
                on_close: move |_| dialog.set(None),
            }
        }
    }
}

#[component]
fn CategoryDialog(existing: Option<Category>, on_saved: EventHandler<Category>, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let editing_id = existing.as_ref().map(|c| c.id);
    let mut form = use_signal(|| existing.as_ref().map(CategoryInput::from_category).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);

    let save_api = api.blog_admin.clone();
    let save = use_callback(move |_: ()| {
        let input = form.peek().clone();
        if let Err(found) = validate_category(&input) {
            errors.set(found);
            return;
        }
        saving.set(true);
        let api = save_api.clone();
        spawn(async move {
            let result = match editing_id {
                Some(id) => api.update_category(id, &input).await,
                None => api.create_category(&input).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    feedback.success(messages::SAVED);
                    on_saved.call(saved);
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
        });
    });

    let current = form();
    let errs = errors();
    let dialog_title = if editing_id.is_some() { "Редактирование категории" } else { "Новая категория" };

    rsx! {
        ModalOverlay {
            title: dialog_title,
            on_close: move |_| on_close.call(()),
            div {
                class: "flex flex-col gap-4",
                div {
                    Label { html_for: "category-name", "Название" }
                    Input {
                        id: "category-name",
                        value: current.name.clone(),
                        error: errs.get("name").map(str::to_string),
                        oninput: move |evt: FormEvent| {
                            let name = evt.value();
                            let mut f = form.write();
                            f.slug = follow_source(&f.slug, &name);
                            f.name = name;
                        },
                    }
                }
                div {
                    Label { html_for: "category-slug", "Адрес (slug)" }
                    Input {
                        id: "category-slug",
                        value: current.slug.clone(),
                        error: errs.get("slug").map(str::to_string),
                        oninput: move |evt: FormEvent| form.write().slug = evt.value(),
                    }
                }
                div {
                    Label { html_for: "category-color", "Цвет" }
                    div {
                        class: "flex items-center gap-3",
                        input {
                            r#type: "color",
                            class: "h-9 w-12 mt-1.5",
                            value: "{current.color}",
                            oninput: move |evt| form.write().color = evt.value(),
                        }
                        Input {
                            id: "category-color",
                            value: current.color.clone(),
                            error: errs.get("color").map(str::to_string),
                            oninput: move |evt: FormEvent| form.write().color = evt.value(),
                        }
                    }
                }
                div {
                    Label { html_for: "category-description", "Описание" }
                    Textarea {
                        id: "category-description",
                        rows: 3,
                        value: current.description.clone(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                }
                Checkbox {
                    checked: current.is_active,
                    label: "Показывать в блоге",
                    onchange: move |on: bool| form.write().is_active = on,
                }
                div {
                    class: "flex justify-end gap-2",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Отмена" }
                    Button { disabled: saving(), onclick: move |_| save.call(()), "Сохранить" }
                }
            }
        }
    }
}
