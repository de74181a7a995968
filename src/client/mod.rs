//! HTTP client for the portal backend.
//!
//! [`ApiClient`] is the transport boundary of the client core. Every request passes through two
//! interceptors: the auth interceptor attaches the current session credential as the
//! `Authorization` header, and the error interceptor classifies failures and raises the
//! cross-cutting notifications (forced logout on 401, server and connectivity notices). The
//! error is always returned to the caller as well, so per-form error handling still runs.
//!
//! Endpoint methods are grouped by area in the submodules. Parameterless list reads go through
//! the [`RequestCache`](crate::cache::RequestCache); everything else hits the backend directly.

mod auth;
mod catalog;
mod config;
mod interceptor;
mod order;
mod ticket;
mod user;

pub use config::ClientConfig;
pub use interceptor::{CONNECTIVITY_MESSAGE, SERVER_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE};

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    cache::RequestCache,
    error::api::ApiError,
    model::api::{ApiResponse, ErrorDto},
    notification::NotificationQueue,
    session::SessionManager,
};

/// Client for the portal backend REST API.
///
/// Cheap to clone; all clones share the HTTP connection pool, the session, the notification
/// queue and the request cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientRef>,
}

struct ApiClientRef {
    config: ClientConfig,
    http: reqwest::Client,
    session: SessionManager,
    notifications: NotificationQueue,
    cache: RequestCache,
}

impl ApiClient {
    /// Creates a new API client.
    ///
    /// # Arguments
    /// - `config` - Base URL and cache settings
    /// - `session` - Session whose credential is attached to requests and which is logged out
    ///   when the backend rejects the credential
    /// - `notifications` - Queue receiving cross-cutting failure notifications
    ///
    /// # Returns
    /// - `Ok(ApiClient)` - Client ready to issue requests
    /// - `Err(reqwest::Error)` - The HTTP client could not be initialized (TLS backend)
    pub fn new(
        config: ClientConfig,
        session: SessionManager,
        notifications: NotificationQueue,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("skyline-portal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientRef {
                config,
                http,
                session,
                notifications,
                cache: RequestCache::new(),
            }),
        })
    }

    pub fn session(&self) -> &SessionManager {
        &self.inner.session
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.inner.notifications
    }

    pub fn cache(&self) -> &RequestCache {
        &self.inner.cache
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.inner.config.base_url, path);
        let builder = self.inner.http.request(method, url);

        // Auth interceptor
        match self.inner.session.credential() {
            Some(credential) => builder.header(reqwest::header::AUTHORIZATION, credential),
            None => builder,
        }
    }

    /// Sends a request and decodes the JSON body, running the error interceptor on failure.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let result = Self::send(builder).await;

        if let Err(err) = &result {
            self.intercept(err);
        }

        result
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorDto>()
                .await
                .ok()
                .and_then(|body| body.message);

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(ApiError::from_reqwest)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    async fn post_form<T, B>(&self, path: &str, form: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).form(form))
            .await
    }

    /// Reads `{ data: T }` and unwraps the envelope.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get::<ApiResponse<T>>(path)
            .await
            .map(|response| response.data)
    }

    /// Posts a JSON body and unwraps the `{ data: T }` envelope of the response.
    async fn post_json_data<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post_json::<ApiResponse<T>, _>(path, body)
            .await
            .map(|response| response.data)
    }

    /// Reads `{ data: T }` through the request cache.
    ///
    /// The cached value is `Arc`-wrapped so every caller sharing an entry receives the same
    /// allocation. The error interceptor runs once per real transport call, not per replay.
    async fn cached_data<T>(&self, key: &str, path: &'static str) -> Result<Arc<T>, ApiError>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let client = self.clone();
        self.inner
            .cache
            .read_through(key, self.inner.config.cache.ttl(), move || async move {
                client.get_data::<T>(path).await.map(Arc::new)
            })
            .await
    }
}

/// Cache-busting timestamp appended to reads the backend or an intermediary might cache.
fn cache_buster() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
