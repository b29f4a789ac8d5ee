//! Dialog frame of the console: a titled card over a dimmed page.

use dioxus::prelude::*;

/// Keys that close an open dialog.
fn dismisses(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// Titled dialog. Closes on a click outside the card, on the × button and
/// on Escape; the overlay takes focus when it opens so Escape reaches it.
#[component]
pub fn ModalOverlay(title: String, #[props(default)] subtitle: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30 outline-none",
            style: "z-index: 2000",
            tabindex: "-1",
            role: "dialog",
            aria_label: "{title}",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("dialog focus: {e:?}");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if dismisses(&evt.key()) {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg max-w-lg w-full mx-4 p-6",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "flex items-start justify-between gap-4 mb-4",
                    div {
                        h2 { class: "text-lg font-semibold", "{title}" }
                        if !subtitle.is_empty() {
                            p { class: "text-sm text-neutral-500", "{subtitle}" }
                        }
                    }
                    button {
                        class: "text-neutral-400 hover:text-neutral-700 text-xl leading-none",
                        title: "Закрыть",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_dismisses() {
        assert!(dismisses(&Key::Escape));
        assert!(!dismisses(&Key::Enter));
        assert!(!dismisses(&Key::Character("q".into())));
    }
}
