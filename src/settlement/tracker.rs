use std::sync::Arc;

use dioxus_logger::tracing;

use super::{PollerConfig, SettlementPoller};
use crate::{
    client::ApiClient,
    error::api::ApiError,
    model::order::{CheckoutRequest, OrderDetail, OrderStatus, PaymentMethod},
};

pub const PAYMENT_METHODS_ERROR_MESSAGE: &str = "Failed to load payment methods.";
pub const CHECKOUT_FAILED_MESSAGE: &str = "Failed to obtain a payment link.";
pub const CHECKOUT_REQUEST_ERROR_MESSAGE: &str = "Payment request failed, please try again.";
pub const ORDER_CANCELLED_MESSAGE: &str = "Order cancelled.";
pub const CANCEL_FAILED_MESSAGE: &str = "Unable to cancel the order, please try again later.";

/// Owner of one order's payment flow.
///
/// Opening a pending order loads its payment methods once and starts a [`SettlementPoller`].
/// Closing or dropping the tracker tears the poller down.
pub struct OrderTracker {
    client: ApiClient,
    trade_no: String,
    detail: OrderDetail,
    payment_methods: Vec<PaymentMethod>,
    poller: Option<SettlementPoller>,
}

impl OrderTracker {
    /// Loads an order and starts tracking it.
    ///
    /// If the order is pending, payment methods are fetched once (a failure raises an error
    /// notification and leaves the list empty) and polling starts. Orders already in a terminal
    /// state are loaded without polling.
    ///
    /// # Arguments
    /// - `client` - API client
    /// - `trade_no` - Trade number of the order
    /// - `config` - Polling interval
    ///
    /// # Returns
    /// - `Ok(OrderTracker)` - The order was loaded
    /// - `Err(ApiError)` - The initial order detail could not be read
    pub async fn open(
        client: ApiClient,
        trade_no: impl Into<String>,
        config: &PollerConfig,
    ) -> Result<Self, ApiError> {
        let trade_no = trade_no.into();
        let detail = client.order_detail(&trade_no).await?;

        let mut tracker = Self {
            client,
            trade_no,
            detail,
            payment_methods: Vec::new(),
            poller: None,
        };

        if tracker.detail.status() == OrderStatus::Pending {
            tracker.payment_methods = match tracker.client.payment_methods(&tracker.trade_no).await {
                Ok(methods) => methods,
                Err(err) => {
                    tracing::warn!(trade_no = %tracker.trade_no, "Failed to load payment methods: {}", err);
                    tracker
                        .client
                        .notifications()
                        .error(PAYMENT_METHODS_ERROR_MESSAGE);
                    Vec::new()
                }
            };

            tracker.poller = Some(SettlementPoller::spawn(
                Arc::new(tracker.client.clone()),
                tracker.trade_no.clone(),
                config,
            ));
        }

        Ok(tracker)
    }

    pub fn trade_no(&self) -> &str {
        &self.trade_no
    }

    /// Latest known order detail, updated by the poller while it runs.
    pub fn detail(&self) -> OrderDetail {
        self.poller
            .as_ref()
            .and_then(SettlementPoller::latest)
            .unwrap_or_else(|| self.detail.clone())
    }

    pub fn status(&self) -> OrderStatus {
        self.detail().status()
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn poller(&self) -> Option<&SettlementPoller> {
        self.poller.as_ref()
    }

    /// Requests a payment page for the order.
    ///
    /// Account balance is applied whenever the order carries a positive balance amount.
    ///
    /// # Arguments
    /// - `method_id` - Id of one of [`OrderTracker::payment_methods`]
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the payment page to redirect to
    /// - `Err(ApiError::Rejected)` - The backend returned no redirect URL
    /// - `Err(ApiError)` - The request failed
    pub async fn checkout(&self, method_id: i64) -> Result<String, ApiError> {
        let request = CheckoutRequest {
            trade_no: self.trade_no.clone(),
            method: method_id,
            use_balance: self.detail().uses_balance(),
        };

        let response = match self.client.checkout(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.client
                    .notifications()
                    .error(err.user_message(CHECKOUT_REQUEST_ERROR_MESSAGE));
                return Err(err);
            }
        };

        match response.redirect_url() {
            Some(url) => Ok(url.to_string()),
            None => {
                let message = response
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| CHECKOUT_FAILED_MESSAGE.to_string());

                self.client.notifications().error(message.clone());
                Err(ApiError::Rejected(message))
            }
        }
    }

    /// Cancels the order on the backend.
    ///
    /// On success polling stops and a success notification is raised. On failure an error
    /// notification is raised and polling continues.
    pub async fn cancel(&mut self) -> Result<(), ApiError> {
        match self.client.cancel_order(&self.trade_no).await {
            Ok(()) => {
                self.close();
                self.client.notifications().success(ORDER_CANCELLED_MESSAGE);
                Ok(())
            }
            Err(err) => {
                self.client
                    .notifications()
                    .error(err.user_message(CANCEL_FAILED_MESSAGE));
                Err(err)
            }
        }
    }

    /// Stops polling. The last known detail stays available.
    pub fn close(&mut self) {
        if let Some(poller) = self.poller.take() {
            if let Some(latest) = poller.latest() {
                self.detail = latest;
            }
            poller.cancel();
        }
    }
}
