use dioxus::prelude::*;
use store::models::{ArticleStatus, CommentStatus};

const BADGE: &str = "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-semibold";

#[component]
pub fn ArticleStatusBadge(status: ArticleStatus) -> Element {
    let color = match status {
        ArticleStatus::Draft => "bg-neutral-100 text-neutral-700",
        ArticleStatus::Published => "bg-emerald-100 text-emerald-700",
        ArticleStatus::Scheduled => "bg-sky-100 text-sky-700",
        ArticleStatus::Archived => "bg-amber-100 text-amber-700",
    };
    rsx! {
        span { class: "{BADGE} {color}", "{status.label()}" }
    }
}

#[component]
pub fn CommentStatusBadge(status: CommentStatus) -> Element {
    let color = match status {
        CommentStatus::Pending => "bg-amber-100 text-amber-700",
        CommentStatus::Approved => "bg-emerald-100 text-emerald-700",
        CommentStatus::Rejected => "bg-neutral-100 text-neutral-700",
        CommentStatus::Spam => "bg-red-100 text-red-700",
    };
    rsx! {
        span { class: "{BADGE} {color}", "{status.label()}" }
    }
}
