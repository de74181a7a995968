use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketMessage {
    pub id: i64,
    pub ticket_id: i64,
    #[serde(default)]
    pub is_me: bool,
    pub message: String,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Ticket body: the list endpoint returns the opening message, the detail endpoint the thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketBody {
    Text(String),
    Thread(Vec<TicketMessage>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    /// 0 low, 1 medium, 2 high
    pub level: u8,
    /// 0 open, 1 closed
    pub status: u8,
    /// For open tickets: 0 staff replied, 1 waiting on staff
    #[serde(default)]
    pub reply_status: u8,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub message: Option<TicketBody>,
}

impl Ticket {
    pub fn is_closed(&self) -> bool {
        self.status == 1
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub message: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketReplyRequest {
    pub id: i64,
    pub message: String,
}
