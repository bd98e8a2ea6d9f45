//! Cache Manager Module
//!
//! Read-through caching with single-flight request deduplication. The
//! manager owns the cache store and the in-flight tracker behind a single
//! lock, so the "is a fetch already in flight" test and the registration
//! of a new fetch are one atomic step even under true parallelism.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::debug;

use crate::cache::inflight::FetchOutcome;
use crate::cache::{CacheStats, CacheStore, InFlightTracker};
use crate::error::{AppError, Result};

// == Cache State ==
/// The two maps the manager exclusively owns. Nothing outside the
/// manager mutates them.
#[derive(Debug)]
struct CacheState<V> {
    store: CacheStore<V>,
    inflight: InFlightTracker<V>,
}

// == Lookup Outcome ==
/// Result of the atomic store-then-tracker consultation.
enum Lookup<V> {
    /// Valid cached entry
    Hit(V),
    /// A fetch is already in flight; await its shared outcome
    Join(broadcast::Receiver<FetchOutcome<V>>),
    /// This caller starts the fetch and publishes on the sender
    Fetch(broadcast::Sender<FetchOutcome<V>>),
}

// == Cache Manager ==
/// Read-through cache with in-flight request deduplication.
///
/// Constructed once at startup and shared by cloning; clones point at the
/// same underlying state. The lock is only ever held between suspension
/// points, never across an await.
#[derive(Debug, Clone)]
pub struct CacheManager<V> {
    inner: Arc<Mutex<CacheState<V>>>,
}

impl<V> CacheManager<V>
where
    V: Clone + Send + 'static,
{
    // == Constructor ==
    /// Creates a cache manager with an empty store and no pending fetches.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheState {
                store: CacheStore::new(),
                inflight: InFlightTracker::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.inner.lock().expect("cache state lock poisoned")
    }

    // == Get Or Fetch ==
    /// Returns the cached value for `key`, or fetches it.
    ///
    /// - A valid cached entry is returned immediately; `fetcher` is never
    ///   invoked.
    /// - If a fetch for `key` is already in flight, this caller attaches
    ///   to it instead of starting a second one: N concurrent callers of
    ///   a missing key produce exactly one underlying fetch.
    /// - Otherwise the fetch runs on a spawned task. On success the
    ///   result is stored with `ttl`; on failure nothing is cached (no
    ///   negative caching). Either way the in-flight marker is cleared
    ///   before the outcome is broadcast, so a later call retries
    ///   cleanly.
    ///
    /// Failures are propagated unchanged to every waiter; a fetcher
    /// that panics surfaces as an internal error and the key stays
    /// retryable. There is no retry, timeout, or cancellation: a
    /// fetcher that never settles delays all callers of that key
    /// indefinitely.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, ttl: Duration, fetcher: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let lookup = {
            let mut state = self.lock();
            if let Some(value) = state.store.get(key) {
                Lookup::Hit(value)
            } else if let Some(rx) = state.inflight.subscribe(key) {
                Lookup::Join(rx)
            } else {
                // Register before yielding so concurrent callers find
                // the pending fetch instead of starting their own.
                Lookup::Fetch(state.inflight.register(key))
            }
        };

        match lookup {
            Lookup::Hit(value) => Ok(value),
            Lookup::Join(rx) => {
                debug!(key, "joining in-flight fetch");
                self.await_outcome(key, rx).await
            }
            Lookup::Fetch(tx) => {
                debug!(key, "starting fetch");
                // Subscribe before the task can publish, so the
                // initiating caller cannot miss the outcome.
                let rx = tx.subscribe();
                let fut = fetcher();
                let inner = Arc::clone(&self.inner);
                let key_owned = key.to_string();

                // Run the fetch on its own task: if the initiating
                // caller is dropped mid-await, waiters still get their
                // outcome and the marker is still cleared. The fetch
                // itself gets a separate task so a panicking fetcher
                // unwinds there; the publishing task turns the join
                // error into a failure outcome and cleans up as usual,
                // leaving the key retryable.
                let fetch = tokio::spawn(fut);
                tokio::spawn(async move {
                    let outcome = match fetch.await {
                        Ok(outcome) => outcome,
                        Err(join_error) => Err(AppError::Internal(format!(
                            "fetch for '{key_owned}' panicked: {join_error}"
                        ))),
                    };
                    {
                        let mut state =
                            inner.lock().expect("cache state lock poisoned");
                        if let Ok(value) = &outcome {
                            state.store.set(key_owned.as_str(), value.clone(), ttl);
                        }
                        state.inflight.resolve(&key_owned);
                    }
                    // Receivers are nonzero (the initiator subscribed
                    // before spawning), but they may have been dropped.
                    let _ = tx.send(outcome);
                });

                self.await_outcome(key, rx).await
            }
        }
    }

    /// Awaits the broadcast outcome of an in-flight fetch.
    async fn await_outcome(
        &self,
        key: &str,
        mut rx: broadcast::Receiver<FetchOutcome<V>>,
    ) -> Result<V> {
        match rx.recv().await {
            Ok(outcome) => outcome,
            // Sender dropped without publishing, e.g. the runtime shut
            // down before the publishing task ran.
            Err(_) => Err(AppError::Internal(format!(
                "fetch for '{key}' terminated without an outcome"
            ))),
        }
    }

    // == Get ==
    /// Returns the cached value for `key` if present and not expired;
    /// never triggers a fetch.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().store.get(key)
    }

    // == Set ==
    /// Manually populates the cache, bypassing any fetch.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.lock().store.set(key, value, ttl);
    }

    // == Invalidate ==
    /// Removes the entry for `key`, taking effect immediately for
    /// subsequent lookups.
    pub fn invalidate(&self, key: &str) {
        debug!(key, "cache invalidate");
        self.lock().store.delete(key);
    }

    // == Invalidate Pattern ==
    /// Removes every entry whose key matches a glob-style pattern
    /// (`*` = any substring).
    pub fn invalidate_pattern(&self, pattern: &str) {
        debug!(pattern, "cache invalidate by pattern");
        self.lock().store.delete_matching(pattern);
    }

    // == Clear ==
    /// Removes all entries and drops all in-flight markers. Waiters on a
    /// pending fetch still receive its outcome.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.store.clear();
        state.inflight.clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning the number removed.
    pub fn cleanup_expired(&self) -> usize {
        self.lock().store.cleanup_expired()
    }

    // == Stats ==
    /// Returns a snapshot of entry count, in-flight count, and the
    /// hit/miss counters. Diagnostic only.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let mut stats = state.store.stats();
        stats.in_flight = state.inflight.len();
        stats
    }
}

impl<V> Default for CacheManager<V>
where
    V: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
