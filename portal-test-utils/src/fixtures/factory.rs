use chrono::{TimeDelta, Utc};
use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_PAYMENT_URL};

/// Create a mock account profile.
///
/// # Arguments
/// - `plan_id` - Selected plan, `None` for an account without a plan
///
/// # Returns
/// - `Value` - `/user/info` payload with 10 GiB quota, 1 MiB up and 2 MiB down
pub fn mock_user_info(plan_id: Option<i64>) -> Value {
    json!({
        "id": 1,
        "email": TEST_EMAIL,
        "transfer_enable": 10_737_418_240_i64,
        "u": 1_048_576,
        "d": 2_097_152,
        "plan_id": plan_id,
        "uuid": "3b2f1c8e-5d7a-4f4e-9a51-0c6f8b7d2e10",
        "expired_at": 1_767_225_600,
        "subscribe_url": "https://sub.example.com/profile-token",
        "balance": 0,
        "commission_balance": 0
    })
}

/// Create a successful subscription usage envelope.
pub fn mock_subscription(u: i64, d: i64, subscribe_url: &str) -> Value {
    json!({
        "status": "success",
        "data": {
            "u": u,
            "d": d,
            "subscribe_url": subscribe_url
        }
    })
}

pub fn mock_plan(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "content": "<p>Unlimited devices</p>",
        "transfer_enable": 100,
        "month_price": 1500,
        "year_price": 15000,
        "show": 1,
        "renew": 1
    })
}

/// Create a mock order detail.
///
/// # Arguments
/// - `trade_no` - Trade number of the order
/// - `status` - Wire status (`0` pending, `1` paid, `2` cancelled, `3` completed)
/// - `balance_amount` - Part of the price covered by account balance, in cents
///
/// # Returns
/// - `Value` - `/user/order/detail` payload for a monthly plan order
pub fn mock_order_detail(trade_no: &str, status: u8, balance_amount: Option<i64>) -> Value {
    json!({
        "trade_no": trade_no,
        "plan_id": 1,
        "total_amount": 1500,
        "balance_amount": balance_amount,
        "status": status,
        "created_at": 1_727_740_800,
        "period": "month_price",
        "plan": mock_plan(1, "Standard")
    })
}

pub fn mock_payment_method(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "payment": "EPay",
        "icon": null
    })
}

/// Checkout envelope carrying a payment redirect.
pub fn mock_checkout_redirect() -> Value {
    json!({ "type": 1, "data": TEST_PAYMENT_URL })
}

/// Epoch milliseconds `hours` ago, for persisted `last_activity` values.
pub fn epoch_millis_hours_ago(hours: i64) -> i64 {
    (Utc::now() - TimeDelta::hours(hours)).timestamp_millis()
}
