use std::time::Duration;

/// Configuration for the settlement poller
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between order detail reads while the order is pending (milliseconds).
    ///
    /// The first read happens one interval after polling starts.
    pub interval_ms: u64,
}

impl PollerConfig {
    /// Get the polling interval as Duration, never shorter than 1 millisecond
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}
