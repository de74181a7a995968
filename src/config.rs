use std::path::PathBuf;

use crate::{
    cache::CacheConfig, error::config::ConfigError, notification::NotificationConfig,
    session::SessionConfig, settlement::PollerConfig,
};

const DEFAULT_SESSION_FILE: &str = ".portal-session.json";
const DEFAULT_KNOWLEDGE_LANGUAGE: &str = "zh-CN";

pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub knowledge_language: String,
    pub session: SessionConfig,
    pub notifications: NotificationConfig,
    pub cache: CacheConfig,
    pub poller: PollerConfig,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `PORTAL_API_URL` is required and must be an http(s) URL. `PORTAL_SESSION_FILE` and
    /// `PORTAL_KNOWLEDGE_LANGUAGE` are optional. Component settings use their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("PORTAL_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("PORTAL_API_URL".to_string()))?;

        Self::new(
            api_url,
            std::env::var("PORTAL_SESSION_FILE").ok(),
            std::env::var("PORTAL_KNOWLEDGE_LANGUAGE").ok(),
        )
    }

    fn new(
        api_url: String,
        session_file: Option<String>,
        knowledge_language: Option<String>,
    ) -> Result<Self, ConfigError> {
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "PORTAL_API_URL".to_string(),
                reason: format!("expected an http(s) URL, got {:?}", api_url),
            });
        }

        Ok(Self {
            api_url,
            session_file: session_file
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string())
                .into(),
            knowledge_language: knowledge_language
                .filter(|language| !language.is_empty())
                .unwrap_or_else(|| DEFAULT_KNOWLEDGE_LANGUAGE.to_string()),
            session: SessionConfig::default(),
            notifications: NotificationConfig::default(),
            cache: CacheConfig::default(),
            poller: PollerConfig::default(),
        })
    }
}
