//! Content API server with read-through caching
//!
//! Serves a consulting-firm site's content (blogs, careers, banners,
//! contact submissions) over HTTP, shielding the backing content store
//! behind an in-process cache with TTL expiry and single-flight request
//! deduplication.

pub mod api;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::CacheManager;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
