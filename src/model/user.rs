use serde::{Deserialize, Serialize};

use crate::model::plan::Plan;

/// Account profile returned by `/user/info`.
///
/// The authoritative source for identity and quota fields. Its usage fields (`u`, `d`,
/// `subscribe_url`) may lag behind [`SubscribeInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    /// Traffic quota in bytes
    pub transfer_enable: i64,
    /// Uploaded bytes
    pub u: i64,
    /// Downloaded bytes
    pub d: i64,
    /// Selected plan, absent when the account has never purchased one
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub uuid: String,
    /// Expiry as epoch seconds, absent for non-expiring plans
    #[serde(default)]
    pub expired_at: Option<i64>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub subscribe_url: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Account balance in cents
    #[serde(default)]
    pub balance: i64,
    /// Commission balance in cents
    #[serde(default)]
    pub commission_balance: i64,
}

/// Live subscription usage returned by `/user/getSubscribe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeInfo {
    #[serde(default)]
    pub u: Option<i64>,
    #[serde(default)]
    pub d: Option<i64>,
    #[serde(default)]
    pub subscribe_url: Option<String>,
}

/// Outcome flag of the subscription usage envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscribeStatus {
    Success,
    Error,
}

/// `{ status, data?, message? }` envelope of `/user/getSubscribe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub status: SubscribeStatus,
    #[serde(default)]
    pub data: Option<SubscribeInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One day of traffic accounting from `/user/stat/getTrafficLog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficLog {
    pub record_time: i64,
    pub u: i64,
    pub d: i64,
    #[serde(deserialize_with = "crate::util::lenient::flexible_f64")]
    pub rate: f64,
    #[serde(default)]
    pub total: i64,
}

/// Invite code owned by the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteCode {
    pub id: i64,
    pub code: String,
    pub user_id: i64,
    pub created_at: i64,
    #[serde(default)]
    pub invite_count: Option<i64>,
}

/// Invite codes plus the five aggregate counters of `/user/invite/fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteInfo {
    pub codes: Vec<InviteCode>,
    /// Registered invitees, pending commission, commission rate, total commission and the
    /// commission available for transfer, in the backend's order
    pub stat: [i64; 5],
}

/// Commission earned from an invitee's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionLog {
    pub trade_no: String,
    /// Amounts in cents
    pub order_amount: i64,
    pub commission_amount: i64,
    /// 0 while pending, 1 once paid out
    pub commission_status: u8,
    pub created_at: i64,
}

impl CommissionLog {
    pub fn is_paid(&self) -> bool {
        self.commission_status == 1
    }
}

/// Moves commission into the account balance.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    /// Amount in cents
    pub transfer_amount: i64,
}
