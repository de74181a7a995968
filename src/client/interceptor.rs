use dioxus_logger::tracing;

use super::ApiClient;
use crate::error::{api::ApiError, failure::FailureKind};

/// Shown when the backend rejects the session credential.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired, please sign in again.";

/// Shown when the backend answers with a 5xx status.
pub const SERVER_ERROR_MESSAGE: &str = "The server ran into a problem, please try again later.";

/// Shown when the backend cannot be reached at all.
pub const CONNECTIVITY_MESSAGE: &str =
    "Network connection failed, please check your connection.";

impl ApiClient {
    /// Error interceptor applied to every failed transport call.
    ///
    /// Raises the cross-cutting notification for the failure class and, for a rejected
    /// credential, ends the session. Request-specific failures are left to the caller.
    ///
    /// # Arguments
    /// - `err` - Error of the failed request
    pub(super) fn intercept(&self, err: &ApiError) {
        match err.failure_kind() {
            FailureKind::Authentication => {
                tracing::warn!("Backend rejected the session credential: {}", err);

                self.inner.notifications.error(SESSION_EXPIRED_MESSAGE);
                self.inner.session.logout();
            }
            FailureKind::Server => {
                tracing::error!("Backend server error: {}", err);

                self.inner.notifications.error(SERVER_ERROR_MESSAGE);
            }
            FailureKind::Connectivity => {
                tracing::warn!("Backend unreachable: {}", err);

                self.inner.notifications.error(CONNECTIVITY_MESSAGE);
            }
            FailureKind::Request => {
                tracing::debug!("Request failed: {}", err);
            }
        }
    }
}
