//! Order settlement tracking.
//!
//! A pending order is re-read on a fixed interval until it reaches a terminal status
//! (`Paid`, `Cancelled` or `Completed`). Polling is fail-stop: the first failed read ends it and
//! it never restarts by itself. Teardown goes through a cancellation token that is checked
//! before every read and before applying every result.

mod config;
mod poller;
mod tracker;

pub use config::PollerConfig;
pub use poller::{OrderSource, PollOutcome, SettlementPoller};
pub use tracker::{
    OrderTracker, CANCEL_FAILED_MESSAGE, CHECKOUT_FAILED_MESSAGE, CHECKOUT_REQUEST_ERROR_MESSAGE,
    ORDER_CANCELLED_MESSAGE, PAYMENT_METHODS_ERROR_MESSAGE,
};
