//! In-Flight Request Tracker Module
//!
//! Ensures at most one outstanding fetch per key. Each in-flight fetch is
//! represented by a broadcast channel: the task running the fetch holds
//! the sender, and every caller that arrives while the fetch is pending
//! subscribes a receiver to await the shared outcome.

use std::collections::HashMap;

use tokio::sync::broadcast;

use crate::error::AppError;

/// Outcome of a fetch, delivered to every waiter on the key.
pub type FetchOutcome<V> = Result<V, AppError>;

// == In-Flight Tracker ==
/// Maps each key to the broadcast sender of its pending fetch.
///
/// Lifecycle per key: [`register`] when a miss starts a fetch, then
/// [`resolve`] exactly once when the fetch settles, on success and
/// failure paths alike. A leaked entry would permanently block future
/// fetches for that key.
///
/// [`register`]: InFlightTracker::register
/// [`resolve`]: InFlightTracker::resolve
#[derive(Debug)]
pub struct InFlightTracker<V> {
    pending: HashMap<String, broadcast::Sender<FetchOutcome<V>>>,
}

impl<V: Clone> InFlightTracker<V> {
    // == Constructor ==
    /// Creates a tracker with no pending fetches.
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    // == Has ==
    /// Returns true if a fetch for `key` is currently in flight.
    pub fn has(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    // == Register ==
    /// Records a new in-flight fetch for `key` and returns the sender the
    /// fetching task will publish the outcome on.
    ///
    /// Must only be called after [`has`]/[`subscribe`] reported no pending
    /// fetch, under the same lock acquisition.
    ///
    /// [`has`]: InFlightTracker::has
    /// [`subscribe`]: InFlightTracker::subscribe
    pub fn register(&mut self, key: impl Into<String>) -> broadcast::Sender<FetchOutcome<V>> {
        // Exactly one message is ever sent per fetch
        let (tx, _rx) = broadcast::channel(1);
        self.pending.insert(key.into(), tx.clone());
        tx
    }

    // == Subscribe ==
    /// Attaches a new waiter to the pending fetch for `key`, if any.
    pub fn subscribe(&self, key: &str) -> Option<broadcast::Receiver<FetchOutcome<V>>> {
        self.pending.get(key).map(|tx| tx.subscribe())
    }

    // == Resolve ==
    /// Removes the in-flight marker for `key` once its fetch has settled.
    pub fn resolve(&mut self, key: &str) {
        self.pending.remove(key);
    }

    // == Clear ==
    /// Drops all in-flight markers. Waiters already subscribed still
    /// receive their outcome from the fetching task's own sender.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    // == Length ==
    /// Returns the number of fetches currently in flight.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl<V: Clone> Default for InFlightTracker<V> {
    fn default() -> Self {
        Self::new()
    }
}
