use dioxus_logger::tracing::{self, Level};
use skyline_portal::{settlement::PollOutcome, Config, Portal};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let portal = match Portal::from_config(&config) {
        Ok(portal) => portal,
        Err(e) => {
            tracing::error!("Failed to start portal client: {}", e);
            std::process::exit(1);
        }
    };

    if !portal.session().is_authenticated() {
        tracing::info!(
            "No active session in {}, sign in through the portal first",
            config.session_file.display()
        );
        return;
    }

    let state = portal.user().settled().await;
    match state.aggregated_view() {
        Some(view) => tracing::info!(
            email = %view.user.email,
            plan = view.current_plan.as_ref().map(|plan| plan.name.as_str()).unwrap_or("none"),
            used_bytes = view.used_traffic(),
            remaining_bytes = view.remaining_traffic(),
            "Loaded account"
        ),
        None => tracing::error!(
            "Failed to load account: {}",
            state.error.as_deref().unwrap_or("unknown error")
        ),
    }

    let Some(trade_no) = std::env::args().nth(1) else {
        return;
    };

    let tracker = match portal.track_order(&trade_no).await {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!("Failed to load order {}: {}", trade_no, e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        trade_no = %trade_no,
        status = ?tracker.status(),
        payment_methods = tracker.payment_methods().len(),
        "Tracking order"
    );

    if let Some(poller) = tracker.poller() {
        match poller.outcome().await {
            PollOutcome::Settled(status) => {
                tracing::info!(trade_no = %trade_no, ?status, "Order settled")
            }
            PollOutcome::Failed(e) => {
                tracing::error!(trade_no = %trade_no, "Stopped tracking order: {}", e)
            }
            PollOutcome::Cancelled => {}
        }
    }
}
