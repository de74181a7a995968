use serde_json::json;

use super::{cache_buster, ApiClient};
use crate::{
    error::api::ApiError,
    model::{
        api::ApiResponse,
        order::{
            CheckoutRequest, CheckoutResponse, CouponCheck, CouponCheckRequest,
            CreateOrderRequest, Order, OrderDetail, PaymentMethod, PaymentMethodsResponse,
        },
    },
};

impl ApiClient {
    /// Validates a coupon against a plan.
    pub async fn check_coupon(&self, request: &CouponCheckRequest) -> Result<CouponCheck, ApiError> {
        self.post_json_data("/user/coupon/check", request).await
    }

    /// Places an order for a plan and billing period.
    ///
    /// # Returns
    /// - `Ok(String)` - Trade number of the new order
    /// - `Err(ApiError)` - The backend refused the order or the request failed
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<String, ApiError> {
        self.post_json_data("/user/order/save", request).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_data("/user/order/fetch").await
    }

    /// Reads the current state of one order. Never cached, the settlement poller relies on it.
    pub async fn order_detail(&self, trade_no: &str) -> Result<OrderDetail, ApiError> {
        self.get_with_query::<ApiResponse<OrderDetail>, _>(
            "/user/order/detail",
            &[("trade_no", trade_no)],
        )
        .await
        .map(|response| response.data)
    }

    pub async fn cancel_order(&self, trade_no: &str) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>(
            "/user/order/cancel",
            &json!({ "trade_no": trade_no }),
        )
        .await
        .map(|_| ())
    }

    /// Payment methods offered for an order. A missing `data` field yields an empty list.
    pub async fn payment_methods(&self, trade_no: &str) -> Result<Vec<PaymentMethod>, ApiError> {
        self.get_with_query::<PaymentMethodsResponse, _>(
            "/user/order/getPaymentMethod",
            &[("trade_no", trade_no.to_string()), ("t", cache_buster())],
        )
        .await
        .map(|response| response.data.unwrap_or_default())
    }

    /// Starts payment of an order with the selected method.
    ///
    /// The backend expects a form-encoded body here, unlike the other writes.
    ///
    /// # Returns
    /// - `Ok(CheckoutResponse)` - Inspect [`CheckoutResponse::redirect_url`] for the payment page
    /// - `Err(ApiError)` - The request failed
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse, ApiError> {
        self.post_form("/user/order/checkout", &request.form_fields())
            .await
    }
}
