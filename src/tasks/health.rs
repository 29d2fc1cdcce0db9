//! Store Health Monitor
//!
//! Background task that periodically pings the backing store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::store::KeyValueStore;

/// Spawns a background task that pings the store every `interval_secs`.
///
/// The result of each ping is written to `available`. Transitions between
/// reachable and unreachable are logged once; steady state logs at debug.
/// The monitor only observes. It never reconnects or retries on its own.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_health_monitor(
    store: Arc<dyn KeyValueStore>,
    available: Arc<AtomicBool>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting store health monitor with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let reachable = match store.ping().await {
                Ok(()) => true,
                Err(e) => {
                    debug!("Store ping failed: {}", e);
                    false
                }
            };

            let was_reachable = available.swap(reachable, Ordering::Relaxed);
            match (was_reachable, reachable) {
                (true, false) => warn!("Store {} became unavailable", store.backend_name()),
                (false, true) => info!("Store {} is available again", store.backend_name()),
                _ => debug!("Store health unchanged: available={}", reachable),
            }
        }
    })
}
