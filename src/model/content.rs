//! Read-mostly content lists: announcements, nodes and knowledge base articles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: i64,
}

/// Proxy node available to the account's plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub host: String,
    #[serde(default, deserialize_with = "crate::util::lenient::flexible_bool")]
    pub show: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub last_check_at: Option<i64>,
    #[serde(default, deserialize_with = "crate::util::lenient::flexible_bool")]
    pub is_online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: serde_json::Value,
    #[serde(default)]
    pub updated_at: serde_json::Value,
}

/// Public site configuration readable without a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestConfig {
    /// Terms-of-service link shown on the registration form
    #[serde(default)]
    pub tos_url: Option<String>,
}
