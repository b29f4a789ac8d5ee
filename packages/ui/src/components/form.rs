//! Form controls. Inputs with an error message get a red border.

use dioxus::prelude::*;

const CONTROL: &str = "w-full bg-white border rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] mt-1.5";

fn border(error: &Option<String>) -> &'static str {
    if error.is_some() {
        "border-red-500"
    } else {
        "border-neutral-300 focus:border-neutral-500"
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-neutral-700",
            r#for: "{html_for}",
            {children}
        }
    }
}

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "mt-1 text-xs text-red-600", "{message}" }
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    value: String,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "{CONTROL} {border(&error)} {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
        FieldError { message: error.clone() }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] class: String,
    value: String,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "{CONTROL} {border(&error)} {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
        FieldError { message: error.clone() }
    }
}

/// `options` are `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] id: String,
    #[props(default)] class: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] error: Option<String>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "{CONTROL} {border(&error)} {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
        FieldError { message: error.clone() }
    }
}

#[component]
pub fn Checkbox(checked: bool, #[props(default)] label: String, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "inline-flex items-center gap-2 text-sm text-neutral-700 cursor-pointer",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            if !label.is_empty() {
                span { "{label}" }
            }
        }
    }
}
