//! Greedy proximity matching: the matcher and the dispatch tick.

mod matcher;
mod tick;

pub use matcher::closest_waiting_client;
pub use tick::run_tick;
