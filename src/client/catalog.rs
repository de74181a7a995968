use std::sync::Arc;

use super::ApiClient;
use crate::{
    error::api::ApiError,
    model::{
        api::ApiResponse,
        content::{KnowledgeArticle, Notice, Server},
        plan::Plan,
    },
};

/// Request cache key of the plan catalog.
pub const PLANS_CACHE_KEY: &str = "plans";
pub const NOTICES_CACHE_KEY: &str = "notices";
pub const SERVERS_CACHE_KEY: &str = "servers";
pub const KNOWLEDGE_CACHE_KEY: &str = "knowledge";

impl ApiClient {
    /// Plan catalog, served from the request cache.
    pub async fn plans(&self) -> Result<Arc<Vec<Plan>>, ApiError> {
        self.cached_data(PLANS_CACHE_KEY, "/user/plan/fetch").await
    }

    /// Announcements, served from the request cache.
    pub async fn notices(&self) -> Result<Arc<Vec<Notice>>, ApiError> {
        self.cached_data(NOTICES_CACHE_KEY, "/user/notice/fetch")
            .await
    }

    /// Nodes available to the account, served from the request cache.
    pub async fn servers(&self) -> Result<Arc<Vec<Server>>, ApiError> {
        self.cached_data(SERVERS_CACHE_KEY, "/user/server/fetch")
            .await
    }

    /// Knowledge base article list in the configured language, served from the request cache.
    pub async fn knowledge_articles(&self) -> Result<Arc<Vec<KnowledgeArticle>>, ApiError> {
        let client = self.clone();
        let ttl = self.inner.config.cache.ttl();

        self.inner
            .cache
            .read_through(KNOWLEDGE_CACHE_KEY, ttl, move || async move {
                let language = client.inner.config.knowledge_language.clone();
                client
                    .get_with_query::<ApiResponse<Vec<KnowledgeArticle>>, _>(
                        "/user/knowledge/fetch",
                        &[("language", language)],
                    )
                    .await
                    .map(|response| Arc::new(response.data))
            })
            .await
    }

    /// A single knowledge base article. Never cached, articles may be edited at any time.
    pub async fn knowledge_article(&self, id: i64) -> Result<KnowledgeArticle, ApiError> {
        self.get_with_query::<ApiResponse<KnowledgeArticle>, _>(
            "/user/knowledge/fetch",
            &[("id", id)],
        )
        .await
        .map(|response| response.data)
    }
}
