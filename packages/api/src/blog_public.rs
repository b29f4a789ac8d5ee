//! Read-only blog endpoints for visitors, plus comments and likes.

use serde::Deserialize;
use store::filters::{ListQuery, PublicArticleFilters, QueryPairs};
use store::list::ListSource;
use store::models::{Article, Category, Comment, CommentInput, Tag};
use store::Page;

use crate::client::ApiClient;
use crate::error::ApiError;

pub const POPULAR_LIMIT: u32 = 5;

/// Everything the blog sidebar shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sidebar {
    pub categories: Vec<Category>,
    pub popular: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct LikeResult {
    likes_count: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPublicApi {
    client: ApiClient,
}

impl BlogPublicApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn articles(&self, filters: &PublicArticleFilters) -> Result<Page<Article>, ApiError> {
        self.client.get_page("/blog/articles", &filters.to_query()).await
    }

    pub async fn article(&self, slug: &str) -> Result<Article, ApiError> {
        self.client.get(&format!("/blog/articles/{slug}"), &QueryPairs::new()).await
    }

    /// Active categories in display order.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let mut categories: Vec<Category> = self.client.get("/blog/categories", &QueryPairs::new()).await?;
        categories.retain(|c| c.is_active);
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    pub async fn category(&self, slug: &str) -> Result<Category, ApiError> {
        self.client.get(&format!("/blog/categories/{slug}"), &QueryPairs::new()).await
    }

    pub async fn tag(&self, slug: &str) -> Result<Tag, ApiError> {
        self.client.get(&format!("/blog/tags/{slug}"), &QueryPairs::new()).await
    }

    pub async fn popular(&self, limit: u32) -> Result<Vec<Article>, ApiError> {
        let query = vec![("limit".to_string(), limit.to_string())];
        self.client.get("/blog/articles/popular", &query).await
    }

    /// Categories and popular articles, fetched concurrently. Either half
    /// failing leaves that half empty.
    pub async fn sidebar(&self) -> Sidebar {
        let (categories, popular) = futures::join!(self.categories(), self.popular(POPULAR_LIMIT));
        Sidebar {
            categories: categories.unwrap_or_else(|e| {
                tracing::error!("sidebar categories failed: {e}");
                Vec::new()
            }),
            popular: popular.unwrap_or_else(|e| {
                tracing::error!("sidebar popular articles failed: {e}");
                Vec::new()
            }),
        }
    }

    /// Approved comments of an article, replies nested.
    pub async fn comments(&self, slug: &str) -> Result<Vec<Comment>, ApiError> {
        self.client
            .get(&format!("/blog/articles/{slug}/comments"), &QueryPairs::new())
            .await
    }

    /// New comments wait for moderation; the returned comment is `pending`.
    pub async fn post_comment(&self, slug: &str, input: &CommentInput) -> Result<Comment, ApiError> {
        self.client
            .post(&format!("/blog/articles/{slug}/comments"), input)
            .await
    }

    /// Returns the new like count.
    pub async fn like(&self, slug: &str) -> Result<u64, ApiError> {
        let result: LikeResult = self
            .client
            .post(&format!("/blog/articles/{slug}/like"), &serde_json::json!({}))
            .await?;
        Ok(result.likes_count)
    }
}

impl ListSource<PublicArticleFilters> for BlogPublicApi {
    type Item = Article;
    type Error = ApiError;

    async fn fetch(&self, filters: &PublicArticleFilters) -> Result<Page<Article>, ApiError> {
        self.articles(filters).await
    }
}
