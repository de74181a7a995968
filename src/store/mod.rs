//! Aggregated user state.
//!
//! The [`UserStateStore`] composes three independent reads (profile, plan catalog, live usage)
//! into one observable [`UserState`]. The profile is the mandatory anchor: if it fails the
//! aggregation fails. The catalog and usage reads degrade to empty defaults instead.
//!
//! A refresh always reflects the most recent request. Each refresh starts a new generation and
//! cancels the token of the previous one, and a composition only lands if its generation is
//! still current when it completes.

mod source;
mod state;

pub use source::UserSource;
pub use state::{AggregatedUserView, UserState};

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use dioxus_logger::tracing;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{
    error::api::ApiError,
    model::{
        plan::Plan,
        user::{SubscribeInfo, SubscribeResponse, SubscribeStatus, UserInfo},
    },
};

/// Inline error shown when the profile could not be read.
pub const PROFILE_ERROR_MESSAGE: &str = "Failed to load user information.";

/// Reactive store of the signed-in user's profile, plans and usage.
///
/// Cheap to clone; all clones share the same state. Refreshing spawns onto the tokio runtime.
#[derive(Clone)]
pub struct UserStateStore {
    inner: Arc<UserStateStoreRef>,
}

struct UserStateStoreRef {
    source: Arc<dyn UserSource>,
    state: watch::Sender<UserState>,
    started: AtomicBool,
    generation: AtomicU64,
    cancel: Mutex<CancellationToken>,
}

impl UserStateStore {
    /// Creates a store reading from `source`.
    ///
    /// Nothing is fetched until the store is first observed or refreshed.
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        let (state, _) = watch::channel(UserState::default());

        Self {
            inner: Arc::new(UserStateStoreRef {
                source,
                state,
                started: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                cancel: Mutex::new(CancellationToken::new()),
            }),
        }
    }

    /// Re-issues the profile, plan catalog and usage reads concurrently.
    ///
    /// Sets `loading` and clears `error` immediately. A refresh issued while another is
    /// outstanding supersedes it: the earlier composition is cancelled and never applied.
    pub fn refresh(&self) {
        self.inner.started.store(true, Ordering::SeqCst);

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = {
            let mut current = self
                .inner
                .cancel
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            current.cancel();
            *current = CancellationToken::new();
            current.clone()
        };

        tracing::debug!(generation, "Refreshing user state");

        self.inner.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let source = Arc::clone(&inner.source);
            let reads = async {
                tokio::join!(
                    source.fetch_profile(),
                    source.fetch_plans(),
                    source.fetch_subscription()
                )
            };

            let (profile, plans, subscription) = tokio::select! {
                _ = token.cancelled() => return,
                results = reads => results,
            };

            if token.is_cancelled() {
                return;
            }

            let next = compose(profile, plans, subscription);

            let applied = inner.state.send_if_modified(|state| {
                if inner.generation.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *state = next;
                true
            });

            if !applied {
                tracing::debug!(generation, "Discarding superseded user state refresh");
            }
        });
    }

    /// Current state, triggering the initial refresh on first use.
    pub fn snapshot(&self) -> UserState {
        self.ensure_started();
        self.inner.state.borrow().clone()
    }

    /// Observes state changes, triggering the initial refresh on first use.
    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.ensure_started();
        self.inner.state.subscribe()
    }

    /// Waits until no refresh is outstanding and returns the resulting state.
    ///
    /// Triggers the initial refresh on first use. A refresh that never completes (hung request)
    /// keeps this pending.
    pub async fn settled(&self) -> UserState {
        let mut updates = self.subscribe();

        // Bound to a local so the borrow ends before `updates` is dropped
        let state = match updates.wait_for(|state| !state.loading).await {
            Ok(state) => (*state).clone(),
            Err(_) => self.inner.state.borrow().clone(),
        };
        state
    }

    /// Refreshes and waits for that refresh to land.
    pub async fn refresh_and_wait(&self) -> UserState {
        self.refresh();
        self.settled().await
    }

    fn ensure_started(&self) {
        if self
            .inner
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.refresh();
        }
    }
}

/// Fan-in of the three reads of one refresh generation.
fn compose(
    profile: Result<UserInfo, ApiError>,
    plans: Result<Arc<Vec<Plan>>, ApiError>,
    subscription: Result<SubscribeResponse, ApiError>,
) -> UserState {
    let plans = plans.unwrap_or_else(|err| {
        tracing::warn!("Plan catalog unavailable, continuing without it: {}", err);
        Arc::new(Vec::new())
    });

    let subscription = match subscription {
        Ok(response) => usage_from_response(response),
        Err(err) => {
            tracing::warn!("Subscription usage unavailable, using profile values: {}", err);
            None
        }
    };

    match profile {
        Ok(profile) => UserState {
            loading: false,
            error: None,
            profile: Some(profile),
            plans,
            subscription,
        },
        Err(err) => {
            tracing::error!("Failed to load user profile: {}", err);

            UserState {
                loading: false,
                error: Some(err.user_message(PROFILE_ERROR_MESSAGE)),
                profile: None,
                plans,
                subscription,
            }
        }
    }
}

fn usage_from_response(response: SubscribeResponse) -> Option<SubscribeInfo> {
    match response.status {
        SubscribeStatus::Success => response.data,
        SubscribeStatus::Error => {
            tracing::warn!(
                "Subscription usage reported an error: {}",
                response.message.as_deref().unwrap_or("no message")
            );
            None
        }
    }
}
