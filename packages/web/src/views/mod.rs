//! Route components. Each one hands a view its route parameters and the
//! `on_navigate` handler.

mod admin;
pub use admin::{
    AdminFrame, Articles, Categories, Comments, Dashboard, EditArticle, MultiOrgUsers, NewArticle, Roles, Seo, Users,
};

mod site;
pub use site::{About, Blog, BlogArticle, BlogCategory, BlogTag, Contacts, Home, Login, NotFound, Pricing, SiteFrame};
