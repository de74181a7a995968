//! Test utilities for wiring the client core against the mock backend.

use portal_test_utils::{constant::TEST_AUTH_TOKEN, TestSetup};
use skyline_portal::{
    client::ClientConfig, notification::NotificationQueue, session::SessionManager,
    settlement::PollerConfig, Portal,
};

/// Polling interval used against the mock backend.
pub const TEST_POLL_INTERVAL_MS: u64 = 100;

/// Extension trait for TestSetup to build a portal pointed at the mock backend
pub trait TestSetupExt {
    /// Portal with an in-memory, signed-out session.
    fn portal(&self) -> Portal;

    /// Portal with an in-memory session signed in with [`TEST_AUTH_TOKEN`].
    fn signed_in_portal(&self) -> Portal;
}

impl TestSetupExt for TestSetup {
    fn portal(&self) -> Portal {
        Portal::new(
            ClientConfig::new(self.api_url()),
            SessionManager::in_memory(),
            NotificationQueue::default(),
            PollerConfig {
                interval_ms: TEST_POLL_INTERVAL_MS,
            },
        )
        .expect("Failed to build portal")
    }

    fn signed_in_portal(&self) -> Portal {
        let portal = self.portal();
        portal.session().login(TEST_AUTH_TOKEN);
        portal
    }
}

/// Messages currently in the portal's notification queue.
pub fn notification_messages(portal: &Portal) -> Vec<String> {
    portal
        .notifications()
        .snapshot()
        .into_iter()
        .map(|notification| notification.message)
        .collect()
}
