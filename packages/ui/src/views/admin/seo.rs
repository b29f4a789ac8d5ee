use dioxus::prelude::*;
use store::messages;
use store::models::SeoSettings;
use store::validation::{validate_seo, FieldErrors};

use crate::components::{Button, ButtonVariant, Checkbox, ErrorBanner, Input, Label, Skeleton, Textarea};
use crate::notifications::use_feedback;
use crate::services::use_api;

/// Networks that always get a field, in display order.
const SOCIAL_NETWORKS: [(&str, &str); 4] = [
    ("vk", "ВКонтакте"),
    ("telegram", "Telegram"),
    ("youtube", "YouTube"),
    ("dzen", "Дзен"),
];

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Site-wide SEO settings, loaded and saved as a whole.
#[component]
pub fn SeoView() -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut settings = use_signal(|| Option::<SeoSettings>::None);
    let mut errors = use_signal(FieldErrors::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut regenerating = use_signal(|| false);

    let load_api = api.blog_admin.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.seo_settings().await {
                Ok(loaded) => {
                    settings.set(Some(loaded));
                    load_error.set(None);
                }
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("seo settings: {e}");
                    load_error.set(Some(messages::LOAD_SEO_FAILED.to_string()));
                }
            }
        }
    });

    let save_api = api.blog_admin.clone();
    let save = use_callback(move |_: ()| {
        let Some(mut input) = settings.peek().clone() else {
            return;
        };
        input.social_links.retain(|_, url| !url.trim().is_empty());
        if let Err(found) = validate_seo(&input) {
            errors.set(found);
            feedback.warning(messages::FORM_HAS_ERRORS);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        let api = save_api.clone();
        spawn(async move {
            match api.update_seo_settings(&input).await {
                Ok(saved) => {
                    settings.set(Some(saved));
                    feedback.success(messages::SAVED);
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
            saving.set(false);
        });
    });

    let sitemap_api = api.blog_admin.clone();
    let regenerate = use_callback(move |_: ()| {
        regenerating.set(true);
        let api = sitemap_api.clone();
        spawn(async move {
            match api.regenerate_sitemap().await {
                Ok(()) => feedback.success("Карта сайта обновлена"),
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
            regenerating.set(false);
        });
    });

    if let Some(message) = load_error() {
        return rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        };
    }
    let Some(current) = settings() else {
        return rsx! { Skeleton { rows: 6 } };
    };
    let errs = errors();
    let mut networks: Vec<(String, String)> = SOCIAL_NETWORKS
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect();
    for key in current.social_links.keys() {
        if !networks.iter().any(|(k, _)| k == key) {
            networks.push((key.clone(), key.clone()));
        }
    }

    rsx! {
        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
            div {
                class: "bg-white border rounded-lg p-6 flex flex-col gap-4",
                h3 { class: "font-semibold", "Основное" }
                div {
                    Label { html_for: "site_name", "Название сайта" }
                    Input {
                        id: "site_name",
                        value: current.site_name.clone(),
                        error: errs.get("site_name").map(str::to_string),
                        oninput: move |evt: FormEvent| {
                            if let Some(s) = settings.write().as_mut() {
                                s.site_name = evt.value();
                            }
                        },
                    }
                }
                div {
                    Label { html_for: "site_description", "Описание сайта" }
                    Textarea {
                        id: "site_description",
                        rows: 3,
                        value: current.site_description.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(s) = settings.write().as_mut() {
                                s.site_description = evt.value();
                            }
                        },
                    }
                }
                div {
                    Label { html_for: "default_meta_title", "Meta title по умолчанию" }
                    Input {
                        id: "default_meta_title",
                        value: current.default_meta_title.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(s) = settings.write().as_mut() {
                                s.default_meta_title = evt.value();
                            }
                        },
                    }
                }
                div {
                    Label { html_for: "default_meta_description", "Meta description по умолчанию" }
                    Textarea {
                        id: "default_meta_description",
                        rows: 3,
                        value: current.default_meta_description.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(s) = settings.write().as_mut() {
                                s.default_meta_description = evt.value();
                            }
                        },
                    }
                }
                div {
                    Label { html_for: "robots_txt", "robots.txt" }
                    Textarea {
                        id: "robots_txt",
                        rows: 6,
                        class: "font-mono",
                        value: current.robots_txt.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(s) = settings.write().as_mut() {
                                s.robots_txt = evt.value();
                            }
                        },
                    }
                }
            }

            div {
                class: "flex flex-col gap-6",
                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-4",
                    h3 { class: "font-semibold", "Аналитика" }
                    div {
                        Label { html_for: "google_analytics_id", "Google Analytics ID" }
                        Input {
                            id: "google_analytics_id",
                            value: current.google_analytics_id.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| {
                                if let Some(s) = settings.write().as_mut() {
                                    s.google_analytics_id = optional(evt.value());
                                }
                            },
                        }
                    }
                    div {
                        Label { html_for: "yandex_metrika_id", "Яндекс Метрика ID" }
                        Input {
                            id: "yandex_metrika_id",
                            value: current.yandex_metrika_id.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| {
                                if let Some(s) = settings.write().as_mut() {
                                    s.yandex_metrika_id = optional(evt.value());
                                }
                            },
                        }
                    }
                }

                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-4",
                    h3 { class: "font-semibold", "Социальные сети" }
                    {networks.into_iter().map(|(key, label)| {
                        let value = current.social_links.get(&key).cloned().unwrap_or_default();
                        let field = key.clone();
                        rsx! {
                            div {
                                key: "{key}",
                                Label { html_for: "social-{key}", "{label}" }
                                Input {
                                    id: "social-{key}",
                                    placeholder: "https://",
                                    value,
                                    oninput: move |evt: FormEvent| {
                                        if let Some(s) = settings.write().as_mut() {
                                            s.social_links.insert(field.clone(), evt.value());
                                        }
                                    },
                                }
                            }
                        }
                    })}
                    if let Some(message) = errs.get("social_links") {
                        p { class: "text-xs text-red-600", "{message}" }
                    }
                }

                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-4",
                    h3 { class: "font-semibold", "Карта сайта" }
                    Checkbox {
                        checked: current.sitemap_enabled,
                        label: "Генерировать sitemap.xml",
                        onchange: move |on: bool| {
                            if let Some(s) = settings.write().as_mut() {
                                s.sitemap_enabled = on;
                            }
                        },
                    }
                    div {
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: regenerating() || !current.sitemap_enabled,
                            onclick: move |_| regenerate.call(()),
                            "Пересоздать карту сайта"
                        }
                    }
                }

                div {
                    Button { disabled: saving(), onclick: move |_| save.call(()), "Сохранить настройки" }
                }
            }
        }
    }
}
