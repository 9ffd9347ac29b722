//! Background dispatch daemon.
//!
//! Runs the periodic dispatch tick while the simulation is in the
//! `Running` state. The loop waits on either the cancellation token or
//! the next timer tick; cancellation is observed only between ticks, so
//! a tick that has taken the store lock always completes before the
//! task exits.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::defaults::DEFAULT_TICK_INTERVAL_SECS;
use crate::dispatch::run_tick;
use crate::fleet::SharedStore;

/// Background daemon that drives the dispatch tick.
pub struct TickDaemon {
    /// Shared store ticked on each period.
    store: SharedStore,

    /// Interval between dispatch ticks.
    tick_interval: Duration,
}

impl TickDaemon {
    /// Creates a daemon over the given store with the default period.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            tick_interval: Duration::from_secs(DEFAULT_TICK_INTERVAL_SECS),
        }
    }

    /// Sets a custom tick interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Runs the dispatch loop until shutdown is signalled.
    pub async fn run(self, shutdown: CancellationToken) {
        info!(
            tick_interval_ms = self.tick_interval.as_millis() as u64,
            "Dispatch daemon starting"
        );

        let mut interval = tokio::time::interval(self.tick_interval);
        // Skip the first immediate tick
        interval.tick().await;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Dispatch daemon shutting down");
                    break;
                }

                _ = interval.tick() => {
                    let matched = {
                        let mut store = self.store.lock().unwrap();
                        run_tick(&mut store)
                    };
                    if matched > 0 {
                        info!(matched, "Dispatch tick paired taxis with clients");
                    } else {
                        debug!("Dispatch tick found no eligible pairs");
                    }
                }
            }
        }
    }
}
