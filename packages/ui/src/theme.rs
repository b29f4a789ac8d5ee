//! Theme context: one [`ThemeService`] per app, shared through a signal.
//!
//! [`ThemeProvider`] restores the saved palette from persistent storage on
//! mount. [`use_theme`] hands out a copyable [`ThemeContext`] whose
//! [`classes`](ThemeContext::classes) are read by buttons, headers and badges.

use dioxus::prelude::*;
use store::{ThemeClasses, ThemeName, ThemeService};

use crate::services::persistent_storage;

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    service: Signal<ThemeService>,
}

impl ThemeContext {
    pub fn current(&self) -> ThemeName {
        self.service.read().current()
    }

    /// Class bundle of the active palette.
    pub fn classes(&self) -> ThemeClasses {
        self.service.read().classes()
    }

    pub fn select(&mut self, theme: ThemeName) {
        self.service.write().select(theme);
    }
}

/// Current theme context.
///
/// # Panics
///
/// When called outside a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    match try_use_context::<ThemeContext>() {
        Some(theme) => theme,
        None => panic!("use_theme() called outside of <ThemeProvider>; wrap the app in ThemeProvider"),
    }
}

#[component]
pub fn ThemeProvider(#[props(default)] default_theme: ThemeName, children: Element) -> Element {
    let service = use_signal(move || ThemeService::restore(persistent_storage(), default_theme));
    use_context_provider(|| ThemeContext { service });

    rsx! {
        {children}
    }
}

/// Row of swatches switching the palette.
#[component]
pub fn ThemePicker() -> Element {
    let mut theme = use_theme();
    let current = theme.current();

    rsx! {
        div {
            class: "flex items-center gap-2",
            for name in ThemeName::ALL {
                button {
                    key: "{name}",
                    class: if name == current { "w-6 h-6 rounded-full ring-2 ring-offset-2 ring-neutral-400" } else { "w-6 h-6 rounded-full" },
                    style: "background-color: {name.swatch()}",
                    title: "{name.label()}",
                    onclick: move |_| theme.select(name),
                }
            }
        }
    }
}
