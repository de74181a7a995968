//! Session lifetime management.
//!
//! This module owns the authentication credential of the client. The [`SessionManager`] is the
//! single place the credential is mutated, through an enumerated set of transitions: `login`,
//! `logout`, `record_activity`, and the idle check performed once by [`SessionManager::restore`]
//! at startup. Every other component only reads the credential (the HTTP client attaches it to
//! outgoing requests) or observes the session status.
//!
//! The credential and last-activity timestamp are mirrored into a [`SessionStorage`] whenever
//! they change so that a restart within the idle window resumes the session transparently.

mod config;
pub mod storage;

pub use config::SessionConfig;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeDelta, Utc};
use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::util::time::{elapsed_since, from_epoch_millis, to_epoch_millis};

/// Storage key of the session credential.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key of the last-activity timestamp (epoch milliseconds).
pub const LAST_ACTIVITY_KEY: &str = "last_activity";

/// Authentication status observed by the rest of the application.
///
/// A transition to `SignedOut` is the signal to navigate back to the unauthenticated area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated,
    SignedOut,
}

/// Read-only view of the session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub credential: Option<String>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Process-wide owner of the authentication credential.
///
/// Cheap to clone; all clones share the same session.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionManagerRef>,
}

struct SessionManagerRef {
    config: SessionConfig,
    storage: Arc<dyn SessionStorage>,
    state: RwLock<SessionSnapshot>,
    status: watch::Sender<SessionStatus>,
}

impl SessionManager {
    /// Restores the session persisted in `storage`.
    ///
    /// If a persisted activity timestamp is older than the configured idle timeout, the session
    /// is logged out before the manager is returned, so no caller ever observes the stale
    /// credential as authenticated. Otherwise process start counts as activity and the
    /// timestamp is re-stamped.
    ///
    /// Storage failures are logged and treated as absent values.
    ///
    /// # Arguments
    /// - `storage` - Durable storage holding the persisted credential and activity timestamp
    /// - `config` - Session configuration (idle timeout)
    ///
    /// # Returns
    /// - `SessionManager` - Manager holding the restored (or cleared) session
    pub fn restore(storage: Arc<dyn SessionStorage>, config: SessionConfig) -> Self {
        let credential = read_key(storage.as_ref(), AUTH_TOKEN_KEY);
        let last_activity_at = match credential {
            Some(_) => read_key(storage.as_ref(), LAST_ACTIVITY_KEY)
                .and_then(|value| from_epoch_millis(&value)),
            None => {
                // Activity is only tracked while authenticated
                if let Err(e) = storage.remove(LAST_ACTIVITY_KEY) {
                    tracing::warn!("Failed to remove stale activity timestamp: {}", e);
                }
                None
            }
        };

        let status = if credential.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::SignedOut
        };
        let (status, _) = watch::channel(status);

        let manager = Self {
            inner: Arc::new(SessionManagerRef {
                config,
                storage,
                state: RwLock::new(SessionSnapshot {
                    credential,
                    last_activity_at,
                }),
                status,
            }),
        };

        let idle_timeout =
            TimeDelta::from_std(manager.inner.config.idle_timeout()).unwrap_or(TimeDelta::MAX);

        match last_activity_at {
            Some(at) if elapsed_since(at, Utc::now()) > idle_timeout => {
                tracing::info!(
                    last_activity_at = %at,
                    "Session expired after prolonged inactivity"
                );
                manager.logout();
            }
            _ => manager.record_activity(),
        }

        manager
    }

    /// Creates a signed-out session backed by in-memory storage.
    pub fn in_memory() -> Self {
        Self::restore(Arc::new(MemoryStorage::new()), SessionConfig::default())
    }

    /// Starts an authenticated session with an already obtained credential.
    ///
    /// No network call is made; the credential comes from the login endpoint. The credential
    /// and a fresh activity timestamp are persisted.
    ///
    /// # Arguments
    /// - `credential` - Opaque credential returned by the backend
    pub fn login(&self, credential: impl Into<String>) {
        let credential = credential.into();
        let now = Utc::now();

        {
            let mut state = self.write_state();
            state.credential = Some(credential.clone());
            state.last_activity_at = Some(now);
        }

        self.persist(AUTH_TOKEN_KEY, &credential);
        self.persist(LAST_ACTIVITY_KEY, &to_epoch_millis(now));

        self.inner.status.send_if_modified(|status| {
            let changed = *status != SessionStatus::Authenticated;
            *status = SessionStatus::Authenticated;
            changed
        });

        tracing::info!("Session started");
    }

    /// Ends the session.
    ///
    /// Clears the credential and all session timestamps, in memory and in storage. Idempotent:
    /// the `SignedOut` status is only signalled on an actual transition, so repeated calls do
    /// not trigger repeated navigation.
    pub fn logout(&self) {
        {
            let mut state = self.write_state();
            state.credential = None;
            state.last_activity_at = None;
        }

        self.forget(AUTH_TOKEN_KEY);
        self.forget(LAST_ACTIVITY_KEY);

        let signalled = self.inner.status.send_if_modified(|status| {
            let changed = *status != SessionStatus::SignedOut;
            *status = SessionStatus::SignedOut;
            changed
        });

        if signalled {
            tracing::info!("Session ended");
        } else {
            tracing::debug!("Logout requested for a session that is already signed out");
        }
    }

    /// Refreshes the last-activity timestamp. A no-op while signed out.
    pub fn record_activity(&self) {
        let now = Utc::now();

        {
            let mut state = self.write_state();
            if state.credential.is_none() {
                return;
            }
            state.last_activity_at = Some(now);
        }

        self.persist(LAST_ACTIVITY_KEY, &to_epoch_millis(now));
    }

    /// Whether a credential is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.read_state().credential.is_some()
    }

    /// Current credential, for attaching to outgoing requests.
    pub fn credential(&self) -> Option<String> {
        self.read_state().credential.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.read_state().clone()
    }

    pub fn status(&self) -> SessionStatus {
        *self.inner.status.borrow()
    }

    /// Subscribes to session status transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.inner.status.subscribe()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionSnapshot> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionSnapshot> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.inner.storage.set(key, value) {
            tracing::warn!(key = %key, "Failed to persist session state: {}", e);
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.inner.storage.remove(key) {
            tracing::warn!(key = %key, "Failed to remove persisted session state: {}", e);
        }
    }
}

fn read_key(storage: &dyn SessionStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, "Failed to read persisted session state: {}", e);
            None
        }
    }
}
