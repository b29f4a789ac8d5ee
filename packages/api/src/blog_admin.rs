//! # Blog administration endpoints
//!
//! [`BlogAdminApi`] covers everything under `/admin/blog`: articles and their
//! content blocks, categories, tags, comment moderation, SEO settings and the
//! dashboard counters.
//!
//! The list screens talk to it through the `store` traits:
//!
//! | Trait | Filter / command |
//! |-------|------------------|
//! | `ListSource` | [`ArticleFilters`], [`CommentFilters`] |
//! | `CommandSink` | [`ArticleCommand`], [`CommentCommand`] |
//! | `BulkSink` | [`ArticleBulkAction`], [`CommentBulkAction`] |
//! | `OrderSink` | [`CategoryOrder`], [`BlockOrder`] |

use serde::{Deserialize, Serialize};
use store::commands::{ArticleBulkAction, ArticleCommand, CommentBulkAction, CommentCommand};
use store::filters::{ArticleFilters, CommentFilters, ListQuery, QueryPairs};
use store::list::{BulkSink, CommandSink, ListSource};
use store::models::{
    Article, ArticleInput, Category, CategoryInput, Comment, ContentBlock, DashboardStats, SeoSettings, Tag,
};
use store::reorder::OrderSink;
use store::{Id, Page};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct BulkRequest<'a, A> {
    action: A,
    ids: &'a [Id],
}

#[derive(Serialize)]
struct OrderRequest<'a> {
    ids: &'a [Id],
}

#[derive(Serialize)]
struct ReplyRequest<'a> {
    content: &'a str,
}

/// Create/update payload of a content block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogAdminApi {
    client: ApiClient,
}

impl BlogAdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // Articles

    pub async fn articles(&self, filters: &ArticleFilters) -> Result<Page<Article>, ApiError> {
        self.client.get_page("/admin/blog/articles", &filters.to_query()).await
    }

    pub async fn article(&self, id: Id) -> Result<Article, ApiError> {
        self.client.get(&format!("/admin/blog/articles/{id}"), &QueryPairs::new()).await
    }

    pub async fn create_article(&self, input: &ArticleInput) -> Result<Article, ApiError> {
        self.client.post("/admin/blog/articles", input).await
    }

    pub async fn update_article(&self, id: Id, input: &ArticleInput) -> Result<Article, ApiError> {
        self.client.put(&format!("/admin/blog/articles/{id}"), input).await
    }

    pub async fn publish_article(&self, id: Id) -> Result<(), ApiError> {
        self.article_action(id, "publish").await
    }

    pub async fn archive_article(&self, id: Id) -> Result<(), ApiError> {
        self.article_action(id, "archive").await
    }

    pub async fn duplicate_article(&self, id: Id) -> Result<(), ApiError> {
        self.article_action(id, "duplicate").await
    }

    pub async fn delete_article(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/admin/blog/articles/{id}")).await
    }

    async fn article_action(&self, id: Id, action: &str) -> Result<(), ApiError> {
        self.client
            .post_empty(&format!("/admin/blog/articles/{id}/{action}"), &serde_json::json!({}))
            .await
    }

    pub async fn bulk_articles(&self, action: ArticleBulkAction, ids: &[Id]) -> Result<(), ApiError> {
        self.client
            .post_empty("/admin/blog/articles/bulk", &BulkRequest { action, ids })
            .await
    }

    // Content blocks

    pub async fn blocks(&self, article_id: Id) -> Result<Vec<ContentBlock>, ApiError> {
        let mut blocks: Vec<ContentBlock> = self
            .client
            .get(&format!("/admin/blog/articles/{article_id}/blocks"), &QueryPairs::new())
            .await?;
        blocks.sort_by_key(|b| b.sort_order);
        Ok(blocks)
    }

    pub async fn create_block(&self, article_id: Id, input: &BlockInput) -> Result<ContentBlock, ApiError> {
        self.client
            .post(&format!("/admin/blog/articles/{article_id}/blocks"), input)
            .await
    }

    pub async fn update_block(&self, article_id: Id, block_id: Id, input: &BlockInput) -> Result<ContentBlock, ApiError> {
        self.client
            .put(&format!("/admin/blog/articles/{article_id}/blocks/{block_id}"), input)
            .await
    }

    pub async fn delete_block(&self, article_id: Id, block_id: Id) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/admin/blog/articles/{article_id}/blocks/{block_id}"))
            .await
    }

    pub async fn reorder_blocks(&self, article_id: Id, ids: &[Id]) -> Result<(), ApiError> {
        self.client
            .post_empty(
                &format!("/admin/blog/articles/{article_id}/blocks/reorder"),
                &OrderRequest { ids },
            )
            .await
    }

    pub fn block_order(&self, article_id: Id) -> BlockOrder {
        BlockOrder {
            api: self.clone(),
            article_id,
        }
    }

    // Categories and tags

    /// All categories in display order.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let mut categories: Vec<Category> = self
            .client
            .get("/admin/blog/categories", &QueryPairs::new())
            .await?;
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.client.post("/admin/blog/categories", input).await
    }

    pub async fn update_category(&self, id: Id, input: &CategoryInput) -> Result<Category, ApiError> {
        self.client.put(&format!("/admin/blog/categories/{id}"), input).await
    }

    pub async fn delete_category(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/admin/blog/categories/{id}")).await
    }

    pub async fn reorder_categories(&self, ids: &[Id]) -> Result<(), ApiError> {
        self.client
            .post_empty("/admin/blog/categories/reorder", &OrderRequest { ids })
            .await
    }

    pub fn category_order(&self) -> CategoryOrder {
        CategoryOrder { api: self.clone() }
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.client.get("/admin/blog/tags", &QueryPairs::new()).await
    }

    // Comments

    pub async fn comments(&self, filters: &CommentFilters) -> Result<Page<Comment>, ApiError> {
        self.client.get_page("/admin/blog/comments", &filters.to_query()).await
    }

    async fn comment_action(&self, id: Id, action: &str) -> Result<(), ApiError> {
        self.client
            .post_empty(&format!("/admin/blog/comments/{id}/{action}"), &serde_json::json!({}))
            .await
    }

    pub async fn approve_comment(&self, id: Id) -> Result<(), ApiError> {
        self.comment_action(id, "approve").await
    }

    pub async fn reject_comment(&self, id: Id) -> Result<(), ApiError> {
        self.comment_action(id, "reject").await
    }

    pub async fn spam_comment(&self, id: Id) -> Result<(), ApiError> {
        self.comment_action(id, "spam").await
    }

    pub async fn delete_comment(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/admin/blog/comments/{id}")).await
    }

    /// Posts an approved reply from the signed-in user.
    pub async fn reply_to_comment(&self, id: Id, content: &str) -> Result<Comment, ApiError> {
        self.client
            .post(&format!("/admin/blog/comments/{id}/reply"), &ReplyRequest { content })
            .await
    }

    pub async fn bulk_comments(&self, action: CommentBulkAction, ids: &[Id]) -> Result<(), ApiError> {
        self.client
            .post_empty("/admin/blog/comments/bulk", &BulkRequest { action, ids })
            .await
    }

    // SEO and dashboard

    pub async fn seo_settings(&self) -> Result<SeoSettings, ApiError> {
        self.client.get("/admin/blog/seo", &QueryPairs::new()).await
    }

    pub async fn update_seo_settings(&self, settings: &SeoSettings) -> Result<SeoSettings, ApiError> {
        self.client.put("/admin/blog/seo", settings).await
    }

    /// Asks the backend to rebuild `sitemap.xml`.
    pub async fn regenerate_sitemap(&self) -> Result<(), ApiError> {
        self.client
            .post_empty("/admin/blog/seo/sitemap", &serde_json::json!({}))
            .await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get("/admin/blog/dashboard", &QueryPairs::new()).await
    }

    /// Most recently updated articles for the dashboard.
    pub async fn recent_articles(&self, limit: u32) -> Result<Vec<Article>, ApiError> {
        let filters = ArticleFilters::default();
        let mut query = filters.to_query();
        query.retain(|(k, _)| k != "per_page");
        query.push(("per_page".to_string(), limit.to_string()));
        query.push(("sort".to_string(), "-updated_at".to_string()));
        let page: Page<Article> = self.client.get_page("/admin/blog/articles", &query).await?;
        Ok(page.items)
    }
}

impl ListSource<ArticleFilters> for BlogAdminApi {
    type Item = Article;
    type Error = ApiError;

    async fn fetch(&self, filters: &ArticleFilters) -> Result<Page<Article>, ApiError> {
        self.articles(filters).await
    }
}

impl ListSource<CommentFilters> for BlogAdminApi {
    type Item = Comment;
    type Error = ApiError;

    async fn fetch(&self, filters: &CommentFilters) -> Result<Page<Comment>, ApiError> {
        self.comments(filters).await
    }
}

impl CommandSink<ArticleCommand> for BlogAdminApi {
    type Error = ApiError;

    async fn execute(&self, command: &ArticleCommand) -> Result<(), ApiError> {
        match *command {
            ArticleCommand::Publish(id) => self.publish_article(id).await,
            ArticleCommand::Archive(id) => self.archive_article(id).await,
            ArticleCommand::Duplicate(id) => self.duplicate_article(id).await,
            ArticleCommand::Delete(id) => self.delete_article(id).await,
        }
    }
}

impl CommandSink<CommentCommand> for BlogAdminApi {
    type Error = ApiError;

    async fn execute(&self, command: &CommentCommand) -> Result<(), ApiError> {
        match *command {
            CommentCommand::Approve(id) => self.approve_comment(id).await,
            CommentCommand::Reject(id) => self.reject_comment(id).await,
            CommentCommand::Spam(id) => self.spam_comment(id).await,
            CommentCommand::Delete(id) => self.delete_comment(id).await,
        }
    }
}

impl BulkSink<ArticleBulkAction> for BlogAdminApi {
    type Error = ApiError;

    async fn execute_bulk(&self, action: ArticleBulkAction, ids: &[Id]) -> Result<(), ApiError> {
        self.bulk_articles(action, ids).await
    }
}

impl BulkSink<CommentBulkAction> for BlogAdminApi {
    type Error = ApiError;

    async fn execute_bulk(&self, action: CommentBulkAction, ids: &[Id]) -> Result<(), ApiError> {
        self.bulk_comments(action, ids).await
    }
}

/// Category order persisted through `/admin/blog/categories/reorder`.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryOrder {
    api: BlogAdminApi,
}

impl OrderSink for CategoryOrder {
    type Item = Category;
    type Error = ApiError;

    async fn save_order(&self, ids: &[Id]) -> Result<(), ApiError> {
        self.api.reorder_categories(ids).await
    }

    async fn load(&self) -> Result<Vec<Category>, ApiError> {
        self.api.categories().await
    }
}

/// Block order of one article.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockOrder {
    api: BlogAdminApi,
    article_id: Id,
}

impl OrderSink for BlockOrder {
    type Item = ContentBlock;
    type Error = ApiError;

    async fn save_order(&self, ids: &[Id]) -> Result<(), ApiError> {
        self.api.reorder_blocks(self.article_id, ids).await
    }

    async fn load(&self) -> Result<Vec<ContentBlock>, ApiError> {
        self.api.blocks(self.article_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_request_body() {
        let body = serde_json::to_value(BulkRequest {
            action: CommentBulkAction::Approve,
            ids: &[3, 5],
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "action": "approve", "ids": [3, 5] }));
    }

    #[test]
    fn test_block_input_uses_type_key() {
        let body = serde_json::to_value(BlockInput {
            kind: "quote".to_string(),
            content: "Цитата".to_string(),
        })
        .unwrap();
        assert_eq!(body["type"], "quote");
    }
}
