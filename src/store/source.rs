use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    client::ApiClient,
    error::api::ApiError,
    model::{
        plan::Plan,
        user::{SubscribeResponse, UserInfo},
    },
};

/// The three independent reads the user-state store composes.
#[async_trait]
pub trait UserSource: Send + Sync + 'static {
    /// Account profile, the mandatory anchor of the aggregated view.
    async fn fetch_profile(&self) -> Result<UserInfo, ApiError>;

    async fn fetch_plans(&self) -> Result<Arc<Vec<Plan>>, ApiError>;

    async fn fetch_subscription(&self) -> Result<SubscribeResponse, ApiError>;
}

#[async_trait]
impl UserSource for ApiClient {
    async fn fetch_profile(&self) -> Result<UserInfo, ApiError> {
        self.user_info().await
    }

    async fn fetch_plans(&self) -> Result<Arc<Vec<Plan>>, ApiError> {
        self.plans().await
    }

    async fn fetch_subscription(&self) -> Result<SubscribeResponse, ApiError> {
        self.subscription().await
    }
}
