//! Simulation lifecycle state machine.
//!
//! Two states, `Stopped` and `Running`, starting in `Stopped`. `start`
//! spawns the [`TickDaemon`](super::TickDaemon) with a fresh
//! cancellation token; `stop` signals the token; `restart` stops if
//! needed and empties both collections. The store lock stays the sole
//! serialization point for entity data — the lifecycle only guards its
//! own daemon handle, and never holds a lock across an await.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::daemon::TickDaemon;
use crate::config::defaults::DEFAULT_TICK_INTERVAL_SECS;
use crate::fleet::SharedStore;

/// Errors from lifecycle transitions.
///
/// Both are state conflicts, recoverable by the opposite transition; the
/// display strings are the messages reported to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// `start` was requested while already running.
    #[error("Simulation is already running")]
    AlreadyRunning,

    /// `stop` was requested while already stopped.
    #[error("Simulation is not running")]
    NotRunning,
}

/// A live `Running` period: one daemon task and its cancellation token.
struct ActiveRun {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Controls the Stopped/Running state of the dispatch simulation.
///
/// # Lifecycle
///
/// 1. **Creation**: `new()` takes the shared store; no task runs yet
/// 2. **Running**: `start()` spawns the tick daemon in the background
/// 3. **Stopped**: `stop()` cancels it; `restart()` also clears the store
/// 4. **Shutdown**: `shutdown()` cancels and joins, for process exit
pub struct Simulation {
    /// Store handed to each spawned daemon.
    store: SharedStore,

    /// Tick period applied at the next `start`.
    tick_interval: Duration,

    /// Current run, present exactly while in the `Running` state.
    active: Mutex<Option<ActiveRun>>,
}

impl Simulation {
    /// Creates a stopped simulation over the given store with the
    /// default tick period.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            tick_interval: Duration::from_secs(DEFAULT_TICK_INTERVAL_SECS),
            active: Mutex::new(None),
        }
    }

    /// Sets the tick period used by subsequent `start` calls.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Whether the dispatch daemon is currently running.
    pub fn is_running(&self) -> bool {
        self.active.lock().unwrap().is_some()
    }

    /// Starts the periodic dispatch daemon.
    ///
    /// Creates a fresh cancellation token and spawns the daemon; each
    /// `Running` period has exactly one background task.
    ///
    /// # Errors
    ///
    /// [`SimulationError::AlreadyRunning`] if a daemon is live; state is
    /// unchanged.
    pub fn start(&self) -> Result<(), SimulationError> {
        let mut active = self.active.lock().unwrap();
        if active.is_some() {
            return Err(SimulationError::AlreadyRunning);
        }

        let token = CancellationToken::new();
        let daemon = TickDaemon::new(Arc::clone(&self.store))
            .with_tick_interval(self.tick_interval);
        let handle = tokio::spawn(daemon.run(token.clone()));
        *active = Some(ActiveRun { token, handle });

        info!("Simulation started");
        Ok(())
    }

    /// Stops the dispatch daemon.
    ///
    /// Signals cancellation and returns without joining; the daemon
    /// observes the token at its next wait, so a tick already holding
    /// the store lock completes first.
    ///
    /// # Errors
    ///
    /// [`SimulationError::NotRunning`] if no daemon is live; state is
    /// unchanged.
    pub fn stop(&self) -> Result<(), SimulationError> {
        let mut active = self.active.lock().unwrap();
        match active.take() {
            Some(run) => {
                run.token.cancel();
                info!("Simulation stopped");
                Ok(())
            }
            None => Err(SimulationError::NotRunning),
        }
    }

    /// Stops the daemon if running, then empties both collections.
    ///
    /// The stop conflict is tolerated silently: restarting from the
    /// stopped state just clears the store. Does not start the daemon;
    /// the simulation is always stopped afterwards.
    pub fn restart(&self) {
        if self.stop().is_err() {
            debug!("Restart requested while stopped");
        }

        let mut store = self.store.lock().unwrap();
        store.clear();
        info!("Simulation restarted with empty collections");
    }

    /// Cancels the daemon, if running, and waits for it to exit.
    ///
    /// Used on process shutdown. Unlike [`stop`](Self::stop) this
    /// tolerates the stopped state and joins the background task.
    pub async fn shutdown(&self) {
        let run = self.active.lock().unwrap().take();
        if let Some(run) = run {
            run.token.cancel();
            match run.handle.await {
                Ok(()) => info!("Dispatch daemon shut down cleanly"),
                Err(e) => error!("Dispatch daemon task panicked: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::LatLng;
    use crate::fleet::{shared_store, Client, Taxi};

    fn seeded_store() -> SharedStore {
        let store = shared_store();
        {
            let mut guard = store.lock().unwrap();
            guard.add_taxi(Taxi {
                id: 1,
                name: "T1".to_string(),
                location: LatLng::new(0.0, 0.0),
                available: true,
                busy: false,
            });
            guard.add_client(Client {
                id: 1,
                name: "C1".to_string(),
                location: LatLng::new(0.0, 1.0),
                waiting: true,
                busy: false,
            });
        }
        store
    }

    #[tokio::test]
    async fn start_twice_reports_already_running() {
        let simulation = Simulation::new(shared_store());

        assert!(simulation.start().is_ok());
        assert_eq!(simulation.start(), Err(SimulationError::AlreadyRunning));
        // The conflict left the simulation running
        assert!(simulation.is_running());

        simulation.shutdown().await;
    }

    #[tokio::test]
    async fn stop_when_stopped_reports_not_running() {
        let simulation = Simulation::new(shared_store());

        assert_eq!(simulation.stop(), Err(SimulationError::NotRunning));
        assert!(!simulation.is_running());
    }

    #[tokio::test]
    async fn start_stop_round_trip() {
        let simulation = Simulation::new(shared_store());

        assert!(simulation.start().is_ok());
        assert!(simulation.is_running());
        assert!(simulation.stop().is_ok());
        assert!(!simulation.is_running());

        // A fresh start after a stop is accepted
        assert!(simulation.start().is_ok());
        simulation.shutdown().await;
    }

    #[tokio::test]
    async fn restart_clears_collections_when_stopped() {
        let store = seeded_store();
        let simulation = Simulation::new(store.clone());

        simulation.restart();

        assert!(!simulation.is_running());
        let guard = store.lock().unwrap();
        assert!(guard.taxis.is_empty());
        assert!(guard.clients.is_empty());
    }

    #[tokio::test]
    async fn restart_stops_a_running_simulation_and_clears() {
        let store = seeded_store();
        let simulation = Simulation::new(store.clone());

        simulation.start().unwrap();
        simulation.restart();

        assert!(!simulation.is_running());
        let guard = store.lock().unwrap();
        assert!(guard.taxis.is_empty());
        assert!(guard.clients.is_empty());
    }

    #[tokio::test]
    async fn shutdown_joins_within_a_bounded_time() {
        let simulation = Simulation::new(shared_store());
        simulation.start().unwrap();

        tokio::time::timeout(Duration::from_secs(5), simulation.shutdown())
            .await
            .expect("Shutdown should complete within 5 seconds");
        assert!(!simulation.is_running());
    }

    #[tokio::test]
    async fn error_messages_match_the_reported_conflicts() {
        assert_eq!(
            SimulationError::AlreadyRunning.to_string(),
            "Simulation is already running"
        );
        assert_eq!(
            SimulationError::NotRunning.to_string(),
            "Simulation is not running"
        );
    }
}
