use crate::cache::CacheConfig;

/// Configuration for the backend API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, e.g. `https://portal.example/api/v1`.
    pub base_url: String,

    /// Language requested for knowledge base articles.
    pub knowledge_language: String,

    /// TTL settings of cached list reads.
    pub cache: CacheConfig,
}

impl ClientConfig {
    /// Create a new configuration with sensible defaults
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the backend API, a trailing slash is ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            knowledge_language: "zh-CN".to_string(),
            cache: CacheConfig::default(),
        }
    }
}
