//! Simulation lifecycle and the background dispatch daemon.

mod daemon;
mod simulation;

pub use daemon::TickDaemon;
pub use simulation::{Simulation, SimulationError};
