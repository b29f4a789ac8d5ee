//! Drag-and-drop rows for manually ordered lists.
//!
//! Each row is draggable and a drop target at once. The parent owns the
//! order: it receives `(dragged, target)` and runs the reorder itself.

use dioxus::prelude::*;
use store::Id;

/// Id of the row being dragged, shared by the rows of one list.
pub type DropTarget = Signal<Option<Id>>;

#[component]
pub fn ReorderableRow(
    id: Id,
    dragging: DropTarget,
    on_drop: EventHandler<(Id, Id)>,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let mut dragging = dragging;
    let mut hovered = use_signal(|| false);
    let is_dragged = dragging() == Some(id);

    let class = match (is_dragged, hovered()) {
        (true, _) => "reorder-row opacity-50",
        (false, true) => "reorder-row border-t-2 border-neutral-500",
        (false, false) => "reorder-row",
    };

    rsx! {
        div {
            class: "{class}",
            draggable: !disabled,
            ondragstart: move |_| dragging.set(Some(id)),
            ondragend: move |_| {
                dragging.set(None);
                hovered.set(false);
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                if !hovered() {
                    hovered.set(true);
                }
            },
            ondragleave: move |_| hovered.set(false),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                hovered.set(false);
                if let Some(dragged) = dragging() {
                    dragging.set(None);
                    on_drop.call((dragged, id));
                }
            },
            span { class: "reorder-handle cursor-grab select-none text-neutral-400 pr-3", "⠿" }
            {children}
        }
    }
}
