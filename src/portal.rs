//! Wiring of the client core.
//!
//! [`Portal`] owns one instance of every long-lived component and exposes the flows that span
//! several of them: signing in hands the login credential to the session and refreshes the
//! user state, tracking an order opens an [`OrderTracker`] on the shared client.

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    client::{ApiClient, ClientConfig},
    config::Config,
    error::{api::ApiError, Error},
    model::auth::LoginRequest,
    notification::NotificationQueue,
    session::{FileStorage, SessionManager},
    settlement::{OrderTracker, PollerConfig},
    store::UserStateStore,
};

/// Client core of the portal.
///
/// Cheap to clone; all clones share the same components.
#[derive(Clone)]
pub struct Portal {
    client: ApiClient,
    user: UserStateStore,
    poller: PollerConfig,
}

impl Portal {
    /// Builds the client core from configuration.
    ///
    /// The session is restored from the configured session file, which performs the idle
    /// check before any other component can observe the credential.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `Ok(Portal)` - All components are wired
    /// - `Err(Error::HttpClientError)` - The HTTP client could not be initialized
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let storage = Arc::new(FileStorage::new(config.session_file.clone()));
        let session = SessionManager::restore(storage, config.session.clone());
        let notifications = NotificationQueue::new(config.notifications.clone());

        let mut client_config = ClientConfig::new(config.api_url.as_str());
        client_config.knowledge_language = config.knowledge_language.clone();
        client_config.cache = config.cache.clone();

        Self::new(client_config, session, notifications, config.poller.clone())
    }

    pub fn new(
        client_config: ClientConfig,
        session: SessionManager,
        notifications: NotificationQueue,
        poller: PollerConfig,
    ) -> Result<Self, Error> {
        let client = ApiClient::new(client_config, session, notifications)?;
        let user = UserStateStore::new(Arc::new(client.clone()));

        Ok(Self {
            client,
            user,
            poller,
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &SessionManager {
        self.client.session()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        self.client.notifications()
    }

    pub fn user(&self) -> &UserStateStore {
        &self.user
    }

    /// Signs in with email and password.
    ///
    /// On success the credential starts the session and the user state is refreshed.
    ///
    /// # Returns
    /// - `Ok(())` - The session is authenticated
    /// - `Err(ApiError)` - The backend refused the credentials or the request failed; the
    ///   session is left untouched
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let credential = self
            .client
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.session().login(credential);
        self.user.refresh();

        tracing::info!("Signed in as {}", email);

        Ok(())
    }

    pub fn sign_out(&self) {
        self.session().logout();
    }

    /// Opens an order and starts tracking it if it is pending.
    pub async fn track_order(&self, trade_no: &str) -> Result<OrderTracker, ApiError> {
        OrderTracker::open(self.client.clone(), trade_no, &self.poller).await
    }
}
