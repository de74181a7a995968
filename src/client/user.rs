use super::{cache_buster, ApiClient};
use crate::{
    error::api::ApiError,
    model::{
        api::{ApiResponse, PaginatedData},
        auth::ChangePasswordRequest,
        user::{
            CommissionLog, InviteInfo, SubscribeResponse, TrafficLog, TransferRequest, UserInfo,
        },
    },
};

impl ApiClient {
    /// Account profile. Not cached, it must reflect mutations immediately.
    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.get_data("/user/info").await
    }

    /// Live subscription usage, in its own `{ status, data?, message? }` envelope.
    pub async fn subscription(&self) -> Result<SubscribeResponse, ApiError> {
        self.get("/user/getSubscribe").await
    }

    /// Rotates the subscription URL and UUID.
    pub async fn reset_subscription(&self) -> Result<(), ApiError> {
        self.get_with_query::<serde_json::Value, _>(
            "/user/resetSecurity",
            &[("t", cache_buster())],
        )
        .await
        .map(|_| ())
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/user/changePassword", request)
            .await
            .map(|_| ())
    }

    pub async fn traffic_log(&self) -> Result<Vec<TrafficLog>, ApiError> {
        self.get_with_query::<ApiResponse<Vec<TrafficLog>>, _>(
            "/user/stat/getTrafficLog",
            &[("t", cache_buster())],
        )
        .await
        .map(|response| response.data)
    }

    /// Moves commission into the account balance.
    ///
    /// # Arguments
    /// - `amount_cents` - Amount to transfer, in cents
    pub async fn transfer_commission(&self, amount_cents: i64) -> Result<(), ApiError> {
        let request = TransferRequest {
            transfer_amount: amount_cents,
        };

        self.post_json::<serde_json::Value, _>("/user/transfer", &request)
            .await
            .map(|_| ())
    }

    pub async fn invites(&self) -> Result<InviteInfo, ApiError> {
        self.get_with_query::<ApiResponse<InviteInfo>, _>(
            "/user/invite/fetch",
            &[("_", cache_buster())],
        )
        .await
        .map(|response| response.data)
    }

    /// Asks the backend to issue a new invite code. Read it back with [`ApiClient::invites`].
    pub async fn generate_invite_code(&self) -> Result<(), ApiError> {
        self.get::<serde_json::Value>("/user/invite/save")
            .await
            .map(|_| ())
    }

    /// One page of commission records, `page` starting at 1.
    pub async fn commission_logs(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<PaginatedData<CommissionLog>, ApiError> {
        self.get_with_query(
            "/user/invite/details",
            &[
                ("current", page.to_string()),
                ("page_size", page_size.to_string()),
                ("t", cache_buster()),
            ],
        )
        .await
    }
}
