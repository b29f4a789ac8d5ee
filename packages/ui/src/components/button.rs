use dioxus::prelude::*;

use crate::theme::use_theme;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    /// Filled with the active theme color.
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] title: String,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let theme = use_theme().classes();
    let look = match variant {
        ButtonVariant::Primary => format!("{} {}", theme.primary, theme.hover),
        ButtonVariant::Secondary => theme.secondary.to_string(),
        ButtonVariant::Outline => format!("bg-white border {} {}", theme.border, theme.text),
        ButtonVariant::Ghost => "bg-transparent text-neutral-600 hover:bg-neutral-100".to_string(),
        ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-700".to_string(),
    };

    rsx! {
        button {
            class: "btn {look} {class}",
            r#type: "{r#type}",
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
