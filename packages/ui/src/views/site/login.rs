//! Email/password sign-in.

use dioxus::prelude::*;
use store::messages;
use store::validation::{validate_login, FieldErrors};

use crate::auth::{use_auth, AuthState};
use crate::components::{Button, Checkbox, ErrorBanner, Input, Label};
use crate::services::use_api;
use crate::theme::use_theme;

/// Sign-in form. `on_success` fires after a successful login and right
/// away when a session already exists.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let theme = use_theme().classes();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| true);
    let mut errors = use_signal(FieldErrors::new);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            on_success.call(());
        }
    });

    let submit = use_callback(move |_: ()| {
        let (email_value, password_value) = (email.peek().clone(), password.peek().clone());
        if let Err(found) = validate_login(&email_value, &password_value) {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        failure.set(None);
        submitting.set(true);
        let api = api.auth.clone();
        let remember = *remember.peek();
        spawn(async move {
            match api.login(&email_value, &password_value, remember).await {
                Ok(user) => auth.set(AuthState::signed_in(user)),
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    failure.set(Some(messages::LOGIN_FAILED.to_string()));
                    password.set(String::new());
                }
            }
            submitting.set(false);
        });
    });

    let errs = errors();

    rsx! {
        div {
            class: "min-h-[70vh] flex items-center justify-center px-4",
            form {
                class: "w-full max-w-sm bg-white border rounded-lg p-8 flex flex-col gap-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                h1 {
                    class: "text-2xl font-bold bg-clip-text text-transparent {theme.gradient}",
                    "Buildline"
                }
                p { class: "text-sm text-neutral-500 -mt-2", "Вход в панель управления" }
                if let Some(message) = failure() {
                    ErrorBanner { message }
                }
                div {
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        value: email(),
                        error: errs.get("email").map(str::to_string),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "login-password", "Пароль" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        error: errs.get("password").map(str::to_string),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                Checkbox {
                    checked: remember(),
                    label: "Запомнить меня",
                    onchange: move |on: bool| remember.set(on),
                }
                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Входим…" } else { "Войти" }
                }
            }
        }
    }
}
