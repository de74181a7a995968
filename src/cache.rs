//! Time-boxed, de-duplicated memoization of idempotent reads.
//!
//! The [`RequestCache`] keeps one entry per logical resource (`"plans"`, `"servers"`, ...). An
//! entry holds a shared, replayable handle to a single read: every caller asking for the same
//! key inside the TTL awaits the same execution and observes the same completion, success or
//! failure. Expiry is lazy: an expired entry is replaced on the next access, there is no
//! background sweep.
//!
//! Only parameterless list reads belong here. Writes and per-entity reads bypass the cache
//! because they must always reflect the latest state.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use dioxus_logger::tracing;
use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::time::Instant;

/// Shared handle to one in-flight or finished read.
type SharedRead<V> = Shared<BoxFuture<'static, V>>;

/// Configuration for the request cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a read result is reused before the next access re-executes it (minutes).
    pub ttl_minutes: u64,
}

impl CacheConfig {
    /// Get the TTL as Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes * 60)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_minutes: 5 }
    }
}

struct CacheEntry {
    expires_at: Instant,
    // Holds a `SharedRead<V>` for the value type the key was first read with
    read: Box<dyn Any + Send + Sync>,
}

/// Keyed read-through cache with at most one outstanding read per key.
#[derive(Default)]
pub struct RequestCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared result for `key`, executing `producer` only if needed.
    ///
    /// If a non-expired entry exists its shared result is returned without invoking
    /// `producer`. Otherwise `producer` is invoked once, its future is stored with an expiry of
    /// `now + ttl`, and the result is awaited. N concurrent callers for the same key inside the
    /// TTL window therefore trigger at most one execution.
    ///
    /// A failed read is cached and replayed like a success until the entry expires.
    ///
    /// # Arguments
    /// - `key` - Logical resource name
    /// - `ttl` - Time-to-live of a newly created entry
    /// - `producer` - Creates the read future, invoked at most once per cache window
    ///
    /// # Returns
    /// - `V` - Clone of the shared result
    pub async fn read_through<V, F, Fut>(&self, key: &str, ttl: Duration, producer: F) -> V
    where
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = V> + Send + 'static,
    {
        let read = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();

            let cached = entries
                .get(key)
                .filter(|entry| now < entry.expires_at)
                .and_then(|entry| entry.read.downcast_ref::<SharedRead<V>>())
                .cloned();

            match cached {
                Some(read) => {
                    tracing::debug!(key = %key, "Request cache hit");
                    read
                }
                None => {
                    tracing::debug!(key = %key, "Request cache miss, issuing read");

                    let read: SharedRead<V> = producer().boxed().shared();
                    entries.insert(
                        key.to_string(),
                        CacheEntry {
                            expires_at: now + ttl,
                            read: Box::new(read.clone()),
                        },
                    );
                    read
                }
            }
        };

        read.await
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
