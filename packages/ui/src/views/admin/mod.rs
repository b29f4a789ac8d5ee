//! Admin console screens. Each takes `on_navigate` when it links elsewhere;
//! the router lives in the web crate.

mod article_editor;
mod articles;
mod categories;
mod comments;
mod dashboard;
mod layout;
mod multi_org_users;
mod roles;
mod seo;
mod users;

pub use article_editor::ArticleEditorView;
pub use articles::ArticlesView;
pub use categories::CategoriesView;
pub use comments::CommentsView;
pub use dashboard::DashboardView;
pub use layout::AdminShell;
pub use multi_org_users::MultiOrgUsersView;
pub use roles::RolesView;
pub use seo::SeoView;
pub use users::UsersView;
