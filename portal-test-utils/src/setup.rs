use std::path::PathBuf;

use mockito::{Mock, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

use crate::error::TestError;

/// Mock backend plus a scratch directory for session files.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
    session_dir: TempDir,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let session_dir = tempfile::tempdir()?;

        Ok(Self {
            server,
            mocks: Vec::new(),
            session_dir,
        })
    }

    /// Base URL of the mock backend.
    pub fn api_url(&self) -> String {
        self.server.url()
    }

    /// Path of a session file inside the scratch directory. The file does not exist yet.
    pub fn session_file(&self) -> PathBuf {
        self.session_dir.path().join("session.json")
    }

    /// Writes a persisted session with the given credential and last activity.
    ///
    /// # Arguments
    /// - `credential` - Value stored under `auth_token`
    /// - `last_activity_ms` - Epoch milliseconds stored under `last_activity`
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the written session file
    /// - `Err(TestError)` - The file could not be written
    pub fn write_session(
        &self,
        credential: &str,
        last_activity_ms: i64,
    ) -> Result<PathBuf, TestError> {
        let path = self.session_file();
        let contents = json!({
            "auth_token": credential,
            "last_activity": last_activity_ms.to_string(),
        });

        std::fs::write(&path, serde_json::to_vec_pretty(&contents)?)?;

        Ok(path)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
