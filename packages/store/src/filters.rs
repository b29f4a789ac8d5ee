//! Filter state for list screens and its query-string encoding.
//!
//! Each list screen owns one filter value. Any change to a non-page field
//! goes through a `with_*` builder that also resets `page` to 1, so the
//! screen never asks for page 7 of a freshly narrowed result set.

use crate::models::{ArticleStatus, CommentStatus, Id};
use crate::pagination::PerPage;

/// Query pairs in the order they are sent.
pub type QueryPairs = Vec<(String, String)>;

/// Common behaviour of every filter object.
pub trait ListQuery: Clone + PartialEq + Default {
    fn page(&self) -> u32;

    /// Same filters, different page. Pages below 1 become 1.
    fn with_page(&self, page: u32) -> Self;

    fn to_query(&self) -> QueryPairs;

    /// Back to the state the screen mounts with.
    fn reset(&self) -> Self {
        Self::default()
    }
}

fn push(query: &mut QueryPairs, key: &str, value: impl ToString) {
    query.push((key.to_string(), value.to_string()));
}

fn push_search(query: &mut QueryPairs, search: &Option<String>) {
    if let Some(s) = search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        push(query, "search", s);
    }
}

fn normalize_search(search: &str) -> Option<String> {
    let trimmed = search.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArticleFilters {
    pub page: u32,
    pub per_page: PerPage,
    pub status: Option<ArticleStatus>,
    pub category_id: Option<Id>,
    pub search: Option<String>,
}

impl Default for ArticleFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PerPage::default(),
            status: None,
            category_id: None,
            search: None,
        }
    }
}

impl ArticleFilters {
    pub fn with_status(&self, status: Option<ArticleStatus>) -> Self {
        Self { status, page: 1, ..self.clone() }
    }

    pub fn with_category(&self, category_id: Option<Id>) -> Self {
        Self { category_id, page: 1, ..self.clone() }
    }

    pub fn with_search(&self, search: &str) -> Self {
        Self { search: normalize_search(search), page: 1, ..self.clone() }
    }

    pub fn with_per_page(&self, per_page: PerPage) -> Self {
        Self { per_page, page: 1, ..self.clone() }
    }
}

impl ListQuery for ArticleFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push(&mut query, "page", self.page.max(1));
        push(&mut query, "per_page", self.per_page.get());
        if let Some(status) = self.status {
            push(&mut query, "status", status.as_str());
        }
        if let Some(category_id) = self.category_id {
            push(&mut query, "category_id", category_id);
        }
        push_search(&mut query, &self.search);
        query
    }
}

pub const COMMENTS_PER_PAGE: u32 = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct CommentFilters {
    pub page: u32,
    pub per_page: u32,
    pub status: Option<CommentStatus>,
    pub article_id: Option<Id>,
    pub search: Option<String>,
}

impl Default for CommentFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: COMMENTS_PER_PAGE,
            status: None,
            article_id: None,
            search: None,
        }
    }
}

impl CommentFilters {
    pub fn with_status(&self, status: Option<CommentStatus>) -> Self {
        Self { status, page: 1, ..self.clone() }
    }

    pub fn with_article(&self, article_id: Option<Id>) -> Self {
        Self { article_id, page: 1, ..self.clone() }
    }

    pub fn with_search(&self, search: &str) -> Self {
        Self { search: normalize_search(search), page: 1, ..self.clone() }
    }
}

impl ListQuery for CommentFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push(&mut query, "page", self.page.max(1));
        push(&mut query, "per_page", self.per_page);
        if let Some(status) = self.status {
            push(&mut query, "status", status.as_str());
        }
        if let Some(article_id) = self.article_id {
            push(&mut query, "article_id", article_id);
        }
        push_search(&mut query, &self.search);
        query
    }
}

pub const USERS_PER_PAGE: u32 = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct UserFilters {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl Default for UserFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: USERS_PER_PAGE,
            search: None,
            role: None,
            is_active: None,
        }
    }
}

impl UserFilters {
    pub fn with_search(&self, search: &str) -> Self {
        Self { search: normalize_search(search), page: 1, ..self.clone() }
    }

    pub fn with_role(&self, role: Option<String>) -> Self {
        Self { role, page: 1, ..self.clone() }
    }

    pub fn with_active(&self, is_active: Option<bool>) -> Self {
        Self { is_active, page: 1, ..self.clone() }
    }
}

impl ListQuery for UserFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push(&mut query, "page", self.page.max(1));
        push(&mut query, "per_page", self.per_page);
        push_search(&mut query, &self.search);
        if let Some(role) = &self.role {
            push(&mut query, "role", role);
        }
        if let Some(active) = self.is_active {
            push(&mut query, "is_active", if active { 1 } else { 0 });
        }
        query
    }
}

/// Users across several organizations.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiOrgUserFilters {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub organization_ids: Vec<Id>,
}

impl Default for MultiOrgUserFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: USERS_PER_PAGE,
            search: None,
            organization_ids: Vec::new(),
        }
    }
}

impl MultiOrgUserFilters {
    pub fn with_search(&self, search: &str) -> Self {
        Self { search: normalize_search(search), page: 1, ..self.clone() }
    }

    /// Adds the organization if absent, removes it otherwise.
    pub fn toggle_organization(&self, id: Id) -> Self {
        let mut organization_ids = self.organization_ids.clone();
        match organization_ids.iter().position(|&o| o == id) {
            Some(pos) => {
                organization_ids.remove(pos);
            }
            None => organization_ids.push(id),
        }
        Self { organization_ids, page: 1, ..self.clone() }
    }
}

impl ListQuery for MultiOrgUserFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push(&mut query, "page", self.page.max(1));
        push(&mut query, "per_page", self.per_page);
        push_search(&mut query, &self.search);
        for id in &self.organization_ids {
            push(&mut query, "filters[organization_ids][]", id);
        }
        query
    }
}

pub const PUBLIC_PER_PAGE: u32 = 9;

/// Filters of the public blog index, category and tag pages.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicArticleFilters {
    pub page: u32,
    pub per_page: u32,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl Default for PublicArticleFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PUBLIC_PER_PAGE,
            category: None,
            tag: None,
            search: None,
        }
    }
}

impl PublicArticleFilters {
    pub fn for_category(slug: &str) -> Self {
        Self { category: Some(slug.to_string()), ..Self::default() }
    }

    pub fn for_tag(slug: &str) -> Self {
        Self { tag: Some(slug.to_string()), ..Self::default() }
    }

    pub fn with_search(&self, search: &str) -> Self {
        Self { search: normalize_search(search), page: 1, ..self.clone() }
    }
}

impl ListQuery for PublicArticleFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push(&mut query, "page", self.page.max(1));
        push(&mut query, "per_page", self.per_page);
        if let Some(category) = &self.category {
            push(&mut query, "category", category);
        }
        if let Some(tag) = &self.tag {
            push(&mut query, "tag", tag);
        }
        push_search(&mut query, &self.search);
        query
    }
}

/// Renders query pairs as `a=1&b=2` without percent-encoding; for logs and tests.
pub fn query_string(query: &QueryPairs) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_four_of_fifteen() {
        let filters = ArticleFilters::default().with_page(4);
        assert_eq!(query_string(&filters.to_query()), "page=4&per_page=15");
    }

    #[test]
    fn test_reset_matches_initial_mount_query() {
        let initial = ArticleFilters::default();
        let narrowed = initial
            .with_status(Some(ArticleStatus::Published))
            .with_category(Some(3))
            .with_search("бетон")
            .with_per_page(PerPage::Fifty)
            .with_page(6);
        assert_ne!(narrowed.to_query(), initial.to_query());
        assert_eq!(narrowed.reset().to_query(), initial.to_query());

        let comments = CommentFilters::default().with_status(Some(CommentStatus::Spam));
        assert_eq!(comments.reset().to_query(), CommentFilters::default().to_query());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let filters = ArticleFilters::default().with_page(5).with_status(Some(ArticleStatus::Draft));
        assert_eq!(filters.page, 1);
        let users = UserFilters::default().with_page(3).with_search("petrov");
        assert_eq!(users.page, 1);
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let filters = ArticleFilters::default().with_search("   ");
        assert_eq!(filters.search, None);
        assert_eq!(query_string(&filters.to_query()), "page=1&per_page=15");
    }

    #[test]
    fn test_article_query_order() {
        let filters = ArticleFilters::default()
            .with_status(Some(ArticleStatus::Scheduled))
            .with_category(Some(12))
            .with_search(" кровля ");
        assert_eq!(
            query_string(&filters.to_query()),
            "page=1&per_page=15&status=scheduled&category_id=12&search=кровля"
        );
    }

    #[test]
    fn test_organization_ids_repeat_array_key() {
        let filters = MultiOrgUserFilters::default()
            .toggle_organization(4)
            .toggle_organization(9)
            .toggle_organization(11)
            .toggle_organization(9);
        assert_eq!(
            query_string(&filters.to_query()),
            "page=1&per_page=15&filters[organization_ids][]=4&filters[organization_ids][]=11"
        );
    }

    #[test]
    fn test_page_below_one_is_clamped() {
        assert_eq!(CommentFilters::default().with_page(0).page, 1);
    }
}
