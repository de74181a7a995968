use std::time::Duration;

/// Configuration for the session manager
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum time without recorded activity before a persisted session is discarded at
    /// startup (seconds).
    pub idle_timeout_seconds: u64,
}

impl SessionConfig {
    /// Get idle timeout as Duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_seconds: 5 * 60 * 60, // 5 hours
        }
    }
}
