use serde_json::json;

use super::ApiClient;
use crate::{
    error::api::ApiError,
    model::ticket::{CreateTicketRequest, Ticket, TicketReplyRequest},
};

impl ApiClient {
    pub async fn tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.get_data("/user/ticket/fetch").await
    }

    /// A single ticket including its message thread.
    pub async fn ticket(&self, id: i64) -> Result<Ticket, ApiError> {
        self.get_with_query::<crate::model::api::ApiResponse<Ticket>, _>(
            "/user/ticket/fetch",
            &[("id", id)],
        )
        .await
        .map(|response| response.data)
    }

    pub async fn create_ticket(&self, request: &CreateTicketRequest) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/user/ticket/save", request)
            .await
            .map(|_| ())
    }

    pub async fn reply_to_ticket(&self, request: &TicketReplyRequest) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/user/ticket/reply", request)
            .await
            .map(|_| ())
    }

    pub async fn close_ticket(&self, id: i64) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/user/ticket/close", &json!({ "id": id }))
            .await
            .map(|_| ())
    }

    /// Ticket form configuration. The shape is backend-defined and passed through untouched.
    pub async fn ticket_config(&self) -> Result<serde_json::Value, ApiError> {
        self.get_data("/user/comm/config").await
    }
}
