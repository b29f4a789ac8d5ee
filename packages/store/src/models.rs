//! # Domain models mirrored from the Buildline backend
//!
//! Every type here is a plain data shape exchanged with the REST API. The
//! backend owns the entities; the console only keeps disposable copies scoped
//! to a view's lifetime, so none of these types enforce business rules.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Article`] / [`ArticleInput`] | A blog article and its create/update payload. |
//! | [`Category`] / [`CategoryInput`] | A blog category; `sort_order` is changed through explicit reorder calls. |
//! | [`Tag`] | A free-form article tag. |
//! | [`ContentBlock`] | An ordered block of an article's body. |
//! | [`Comment`] | A reader comment with nested replies. |
//! | [`OrganizationUser`], [`Role`], [`Permission`], [`Invitation`], [`Organization`] | User management. |
//! | [`SeoSettings`] | Site-wide SEO settings, fetched and saved as one unit. |
//! | [`DashboardStats`] | Counters shown on the admin dashboard. |
//! | [`PaginationMeta`] / [`PaginationLinks`] | Paging information returned with list endpoints. |
//!
//! Status enums serialize to the lowercase strings the backend uses.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend identifier. All entities use numeric ids.
pub type Id = u64;

/// Publication state of an article.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
    Archived,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Draft,
        ArticleStatus::Published,
        ArticleStatus::Scheduled,
        ArticleStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Scheduled => "scheduled",
            ArticleStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Russian label shown in badges and filter selects.
    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Черновик",
            ArticleStatus::Published => "Опубликована",
            ArticleStatus::Scheduled => "Запланирована",
            ArticleStatus::Archived => "В архиве",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation state of a comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Spam,
}

impl CommentStatus {
    pub const ALL: [CommentStatus; 4] = [
        CommentStatus::Pending,
        CommentStatus::Approved,
        CommentStatus::Rejected,
        CommentStatus::Spam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Rejected => "rejected",
            CommentStatus::Spam => "spam",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "На модерации",
            CommentStatus::Approved => "Одобрен",
            CommentStatus::Rejected => "Отклонён",
            CommentStatus::Spam => "Спам",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category as embedded inside an article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Id,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Author as embedded inside an article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    pub name: String,
    pub slug: String,
}

/// View/like/comment counters of an article.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleCounters {
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
}

/// Per-article SEO overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoFields {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Id,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(flatten)]
    pub counters: ArticleCounters,
    #[serde(flatten)]
    pub seo: SeoFields,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload for an article.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub status: ArticleStatus,
    pub category_id: Option<Id>,
    pub tag_ids: Vec<Id>,
    #[serde(flatten)]
    pub seo: SeoFields,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleInput {
    /// Snapshot of an existing article for the edit form.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            slug: article.slug.clone(),
            excerpt: article.excerpt.clone().unwrap_or_default(),
            content: article.content.clone(),
            status: article.status,
            category_id: article.category.as_ref().map(|c| c.id),
            tag_ids: article.tags.iter().map(|t| t.id).collect(),
            seo: article.seo.clone(),
            featured_image: article.featured_image.clone(),
            published_at: article.published_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub articles_count: u64,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub color: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for CategoryInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            color: "#3b82f6".to_string(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl CategoryInput {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            color: category.color.clone().unwrap_or_else(|| "#3b82f6".to_string()),
            description: category.description.clone().unwrap_or_default(),
            is_active: category.is_active,
        }
    }
}

/// One block of an article body. Blocks are ordered by `sort_order`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: Id,
    /// Block kind as named by the backend: "text", "image", "quote", ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Article as referenced from a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub id: Id,
    pub title: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    #[serde(default)]
    pub article: Option<ArticleRef>,
    pub author_name: String,
    #[serde(default)]
    pub author_email: Option<String>,
    pub content: String,
    #[serde(default)]
    pub status: CommentStatus,
    #[serde(default)]
    pub replies: Vec<Comment>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for a public comment submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentInput {
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub parent_id: Option<Id>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Id,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub users_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUser {
    pub id: Id,
    pub name: String,
    pub email: String,
    /// Built-in role slugs.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub custom_role_ids: Vec<Id>,
    #[serde(default)]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl OrganizationUser {
    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Id,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_system: bool,
    /// Permission slugs granted by this role.
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Id,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvitationInput {
    pub email: String,
    pub role: String,
}

/// Site-wide SEO settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub default_meta_title: String,
    #[serde(default)]
    pub default_meta_description: String,
    #[serde(default)]
    pub robots_txt: String,
    #[serde(default)]
    pub google_analytics_id: Option<String>,
    #[serde(default)]
    pub yandex_metrika_id: Option<String>,
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
    #[serde(default)]
    pub sitemap_enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub articles_total: u64,
    #[serde(default)]
    pub articles_published: u64,
    #[serde(default)]
    pub articles_draft: u64,
    #[serde(default)]
    pub comments_pending: u64,
    #[serde(default)]
    pub users_total: u64,
    #[serde(default)]
    pub views_total: u64,
}

/// Paging information returned alongside list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 15,
            total: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PaginationMeta) -> Self {
        Self { items, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_decodes_flattened_counters_and_seo() {
        let json = r#"{
            "id": 7,
            "title": "Как вести стройку",
            "slug": "kak-vesti-stroyku",
            "content": "...",
            "status": "published",
            "category": {"id": 2, "name": "Советы", "slug": "sovety"},
            "tags": [{"id": 1, "name": "бетон", "slug": "beton"}],
            "views_count": 120,
            "likes_count": 4,
            "meta_title": "Стройка",
            "published_at": "2024-03-01T10:00:00Z"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.counters.views_count, 120);
        assert_eq!(article.counters.comments_count, 0);
        assert_eq!(article.seo.meta_title.as_deref(), Some("Стройка"));
        assert_eq!(article.tags.len(), 1);
        assert!(article.published_at.is_some());
    }

    #[test]
    fn test_comment_decodes_nested_replies() {
        let json = r#"{
            "id": 1,
            "author_name": "Иван",
            "content": "Спасибо",
            "status": "approved",
            "replies": [{"id": 2, "author_name": "Админ", "content": "Пожалуйста"}]
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.replies.len(), 1);
        assert_eq!(comment.replies[0].status, CommentStatus::Pending);
    }

    #[test]
    fn test_status_parse_roundtrips_wire_names() {
        assert_eq!(ArticleStatus::parse("scheduled"), Some(ArticleStatus::Scheduled));
        assert_eq!(CommentStatus::parse("spam"), Some(CommentStatus::Spam));
        assert_eq!(CommentStatus::parse("deleted"), None);
    }

    #[test]
    fn test_article_input_from_article_keeps_relations() {
        let json = r#"{"id": 3, "title": "T", "slug": "t",
            "category": {"id": 9, "name": "C", "slug": "c"},
            "tags": [{"id": 4, "name": "a", "slug": "a"}, {"id": 5, "name": "b", "slug": "b"}]}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        let input = ArticleInput::from_article(&article);
        assert_eq!(input.category_id, Some(9));
        assert_eq!(input.tag_ids, vec![4, 5]);
        assert_eq!(input.status, ArticleStatus::Draft);
    }
}
