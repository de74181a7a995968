use std::sync::Arc;

use async_trait::async_trait;
use dioxus_logger::tracing;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::PollerConfig;
use crate::{
    client::ApiClient,
    error::api::ApiError,
    model::order::{OrderDetail, OrderStatus},
};

/// Read access to the current state of an order.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    async fn fetch_order(&self, trade_no: &str) -> Result<OrderDetail, ApiError>;
}

#[async_trait]
impl OrderSource for ApiClient {
    async fn fetch_order(&self, trade_no: &str) -> Result<OrderDetail, ApiError> {
        self.order_detail(trade_no).await
    }
}

/// How a polling run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A read returned a terminal status
    Settled(OrderStatus),
    /// A read failed; polling does not resume on its own
    Failed(ApiError),
    /// Polling was torn down before the order settled
    Cancelled,
}

/// Background task re-reading one pending order until it settles.
///
/// Every interval the order detail is read again. Polling stops on the first read with a
/// terminal status, on the first failed read, or on teardown. A read already in flight at
/// teardown is allowed to finish but its result is discarded.
///
/// Dropping the poller tears it down.
pub struct SettlementPoller {
    trade_no: String,
    cancel: CancellationToken,
    latest: watch::Receiver<Option<OrderDetail>>,
    outcome: watch::Receiver<Option<PollOutcome>>,
}

impl SettlementPoller {
    /// Starts polling `trade_no` on the current tokio runtime.
    ///
    /// # Arguments
    /// - `source` - Where order details are read from
    /// - `trade_no` - Trade number of a pending order
    /// - `config` - Polling interval
    ///
    /// # Returns
    /// - `SettlementPoller` - Handle owning the polling task
    pub fn spawn(
        source: Arc<dyn OrderSource>,
        trade_no: impl Into<String>,
        config: &PollerConfig,
    ) -> Self {
        let trade_no = trade_no.into();
        let cancel = CancellationToken::new();
        let (latest_tx, latest) = watch::channel(None);
        let (outcome_tx, outcome) = watch::channel(None);

        let period = config.interval();
        let task_cancel = cancel.clone();
        let task_trade_no = trade_no.clone();

        tracing::info!(trade_no = %trade_no, "Started polling order status");

        tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let outcome = loop {
                tokio::select! {
                    biased;
                    _ = task_cancel.cancelled() => break PollOutcome::Cancelled,
                    _ = ticks.tick() => {}
                }

                let result = source.fetch_order(&task_trade_no).await;

                if task_cancel.is_cancelled() {
                    break PollOutcome::Cancelled;
                }

                match result {
                    Ok(detail) => {
                        let status = detail.status();
                        latest_tx.send_replace(Some(detail));

                        if status.is_terminal() {
                            tracing::info!(
                                trade_no = %task_trade_no,
                                ?status,
                                "Order settled, stopped polling"
                            );
                            break PollOutcome::Settled(status);
                        }
                    }
                    Err(err) => {
                        tracing::error!(
                            trade_no = %task_trade_no,
                            "Order status polling failed, stopped polling: {}",
                            err
                        );
                        break PollOutcome::Failed(err);
                    }
                }
            };

            if outcome == PollOutcome::Cancelled {
                tracing::debug!(trade_no = %task_trade_no, "Order status polling cancelled");
            }

            outcome_tx.send_replace(Some(outcome));
        });

        Self {
            trade_no,
            cancel,
            latest,
            outcome,
        }
    }

    pub fn trade_no(&self) -> &str {
        &self.trade_no
    }

    /// Most recent order detail read by the poller, if any read has completed.
    pub fn latest(&self) -> Option<OrderDetail> {
        self.latest.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<OrderDetail>> {
        self.latest.clone()
    }

    /// Stops polling. No further read is issued and no in-flight result is applied.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.borrow().is_some()
    }

    /// Waits for polling to end.
    pub async fn outcome(&self) -> PollOutcome {
        let mut outcome = self.outcome.clone();

        // Bound to a local so the borrow ends before `outcome` is dropped
        let finished = match outcome.wait_for(Option::is_some).await {
            Ok(outcome) => (*outcome).clone().unwrap_or(PollOutcome::Cancelled),
            // Task ended without reporting, e.g. the runtime shut down
            Err(_) => PollOutcome::Cancelled,
        };
        finished
    }
}

impl Drop for SettlementPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
