//! Cache Module
//!
//! Read-through caching with TTL expiration and single-flight request
//! deduplication, used to shield the backing content store from
//! redundant fetches.

mod entry;
mod inflight;
mod manager;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use inflight::{FetchOutcome, InFlightTracker};
pub use manager::CacheManager;
pub use stats::CacheStats;
pub use store::CacheStore;
