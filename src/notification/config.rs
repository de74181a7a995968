use std::time::Duration;

use super::Severity;

/// Configuration for the notification queue
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// How long an info notification stays visible (milliseconds).
    pub info_duration_ms: u64,

    /// How long a success notification stays visible (milliseconds).
    pub success_duration_ms: u64,

    /// How long an error notification stays visible (milliseconds).
    pub error_duration_ms: u64,
}

impl NotificationConfig {
    /// Get the default display duration of a severity as Duration
    pub fn duration_for(&self, severity: Severity) -> Duration {
        let millis = match severity {
            Severity::Info => self.info_duration_ms,
            Severity::Success => self.success_duration_ms,
            Severity::Error => self.error_duration_ms,
        };
        Duration::from_millis(millis)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            info_duration_ms: 3000,    // 3 seconds
            success_duration_ms: 3000, // 3 seconds
            error_duration_ms: 5000,   // 5 seconds
        }
    }
}
