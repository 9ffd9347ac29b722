//! TaxiSim - toy taxi dispatch simulation engine
//!
//! This library holds an in-memory fleet of taxis and a pool of waiting
//! clients, and pairs them greedily by geographic proximity on a periodic
//! dispatch tick. The [`runtime`] module owns the Stopped/Running state
//! machine and the background daemon that drives the tick; the [`fleet`]
//! store is the single shared mutable resource, serialized by one lock.
//!
//! # High-Level API
//!
//! ```ignore
//! use taxisim::fleet::shared_store;
//! use taxisim::runtime::Simulation;
//!
//! let store = shared_store();
//! let simulation = Simulation::new(store.clone());
//!
//! simulation.start()?;
//! // ... taxis and clients added through the store are matched each tick
//! simulation.stop()?;
//! ```

pub mod config;
pub mod coord;
pub mod dispatch;
pub mod fleet;
pub mod logging;
pub mod runtime;

/// Version of the TaxiSim library and server.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
