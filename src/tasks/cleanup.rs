//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.
//! Lazy purge-on-access keeps lookups correct on its own; the sweep only
//! bounds the memory held by keys nobody rereads.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheManager;

/// Spawns a background task that periodically removes expired cache
/// entries.
///
/// Returns a JoinHandle for the spawned task, which is aborted during
/// graceful shutdown.
pub fn spawn_cleanup_task<V>(
    cache: CacheManager<V>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
