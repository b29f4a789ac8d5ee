//! Public blog: index, category and tag listings, article pages.

mod article;
mod card;
mod list;
mod sidebar;

pub use article::BlogArticleView;
pub use card::ArticleCard;
pub use list::{BlogCategoryView, BlogIndexView, BlogTagView};
pub use sidebar::BlogSidebar;
