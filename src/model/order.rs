use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::plan::{Period, Plan};

/// Lifecycle state of an order, encoded as `0..=3` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    /// Awaiting payment, the only non-terminal state
    Pending,
    Paid,
    Cancelled,
    Completed,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Paid),
            2 => Ok(Self::Cancelled),
            3 => Ok(Self::Completed),
            other => Err(format!("unknown order status {}", other)),
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => 0,
            OrderStatus::Paid => 1,
            OrderStatus::Cancelled => 2,
            OrderStatus::Completed => 3,
        }
    }
}

/// Order summary as listed by `/user/order/fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub trade_no: String,
    pub plan_id: i64,
    /// Amount still due in cents
    pub total_amount: i64,
    pub status: OrderStatus,
    /// Creation time as epoch seconds
    pub created_at: i64,
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Part of the price covered by account balance, in cents
    #[serde(default)]
    pub balance_amount: Option<i64>,
}

impl Order {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

/// Full order returned by `/user/order/detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub payment_link: Option<String>,
}

impl OrderDetail {
    pub fn status(&self) -> OrderStatus {
        self.order.status
    }

    pub fn period(&self) -> Period {
        Period::from_key(&self.period)
    }

    /// Price before account balance was applied.
    pub fn original_price(&self) -> i64 {
        self.order.total_amount + self.order.balance_amount.unwrap_or(0)
    }

    /// Whether checkout should ask the backend to draw on the account balance.
    pub fn uses_balance(&self) -> bool {
        self.order.balance_amount.is_some_and(|amount| amount > 0)
    }
}

/// Payment gateway offered for a pending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// `{ status, message, data }` envelope of `/user/order/getPaymentMethod`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodsResponse {
    #[serde(default)]
    pub data: Option<Vec<PaymentMethod>>,
}

/// `{ type, data, message }` envelope of `/user/order/checkout`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    #[serde(rename = "type", default)]
    pub kind: Option<i64>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CheckoutResponse {
    /// Payment redirect URL, present only for `type == 1` with a non-empty string `data`.
    pub fn redirect_url(&self) -> Option<&str> {
        match (self.kind, self.data.as_ref()) {
            (Some(1), Some(serde_json::Value::String(url))) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

/// Form fields of a checkout request.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub trade_no: String,
    pub method: i64,
    pub use_balance: bool,
}

impl CheckoutRequest {
    /// Form-encoded fields; `use_balance` is only sent when set.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("trade_no", self.trade_no.clone()),
            ("method", self.method.to_string()),
        ];
        if self.use_balance {
            fields.push(("use_balance", "1".to_string()));
        }
        fields
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub plan_id: i64,
    /// Price field name of the chosen period, e.g. `month_price`
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CouponCheckRequest {
    pub code: String,
    pub plan_id: i64,
}

/// Result of validating a coupon against a plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CouponCheck {
    /// 1 for a fixed amount, 2 for a percentage
    #[serde(rename = "type")]
    pub kind: u8,
    pub value: i64,
    #[serde(default)]
    pub final_amount: Option<i64>,
}
