//! Building blocks shared by every view.

mod badges;
mod button;
mod feedback;
mod form;
mod markdown;
mod modal;
mod pagination;
mod reorder;

pub use badges::{ArticleStatusBadge, CommentStatusBadge};
pub use button::{Button, ButtonVariant};
pub use feedback::{EmptyState, ErrorBanner, Skeleton};
pub use form::{Checkbox, FieldError, Input, Label, Select, Textarea};
pub use markdown::{block_kind_label, render_block, render_markdown, Markdown, BLOCK_KINDS};
pub use modal::ModalOverlay;
pub use pagination::PaginationBar;
pub use reorder::{DropTarget, ReorderableRow};
