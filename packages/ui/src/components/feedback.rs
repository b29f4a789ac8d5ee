use dioxus::prelude::*;

/// Red-bordered banner for a failed load.
#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-4 border border-red-300 bg-red-50 text-red-700 rounded px-4 py-3 mb-4",
            span { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "text-sm underline",
                    onclick: move |_| retry.call(()),
                    "Повторить"
                }
            }
        }
    }
}

/// Grey placeholder rows shown while loading.
#[component]
pub fn Skeleton(#[props(default = 5)] rows: usize) -> Element {
    rsx! {
        div {
            class: "animate-pulse flex flex-col gap-3",
            for i in 0..rows {
                div { key: "{i}", class: "h-10 bg-neutral-200 rounded" }
            }
        }
    }
}

#[component]
pub fn EmptyState(#[props(default = store::messages::EMPTY_LIST.to_string())] message: String) -> Element {
    rsx! {
        div { class: "py-12 text-center text-neutral-500", "{message}" }
    }
}
