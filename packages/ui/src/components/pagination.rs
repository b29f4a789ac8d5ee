use dioxus::prelude::*;
use store::pagination::{page_window, summary, Noun, PerPage};
use store::PaginationMeta;

use crate::theme::use_theme;

/// "Показано …" caption, the sliding page window and, when
/// `on_per_page` is given, a page-size select.
#[component]
pub fn PaginationBar(
    meta: PaginationMeta,
    noun: Noun,
    on_page: EventHandler<u32>,
    on_per_page: Option<EventHandler<PerPage>>,
    #[props(default)] per_page: PerPage,
) -> Element {
    let theme = use_theme().classes();
    let current = meta.current_page;
    let last = meta.last_page;
    let caption = summary(&meta, noun);

    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-4 mt-4 text-sm text-neutral-600",
            span { "{caption}" }

            div {
                class: "flex items-center gap-1",
                button {
                    class: "px-2 py-1 rounded border border-neutral-300 disabled:opacity-40",
                    disabled: current <= 1,
                    onclick: move |_| on_page.call(current - 1),
                    "‹"
                }
                for page in page_window(current, last) {
                    button {
                        key: "{page}",
                        class: if page == current { format!("px-3 py-1 rounded {}", theme.primary) } else { "px-3 py-1 rounded border border-neutral-300 hover:bg-neutral-100".to_string() },
                        onclick: move |_| on_page.call(page),
                        "{page}"
                    }
                }
                button {
                    class: "px-2 py-1 rounded border border-neutral-300 disabled:opacity-40",
                    disabled: current >= last,
                    onclick: move |_| on_page.call(current + 1),
                    "›"
                }
            }

            if let Some(on_per_page) = on_per_page {
                select {
                    class: "border border-neutral-300 rounded px-2 py-1",
                    onchange: move |evt: FormEvent| {
                        if let Some(size) = evt.value().parse::<u32>().ok().and_then(PerPage::from_value) {
                            on_per_page.call(size);
                        }
                    },
                    for size in PerPage::ALL {
                        option {
                            key: "{size.get()}",
                            value: "{size.get()}",
                            selected: size == per_page,
                            "{size.get()} на странице"
                        }
                    }
                }
            }
        }
    }
}
