//! Taxi fleet and clientele: entities plus the shared store.

mod store;
mod types;

pub use store::{shared_store, DispatchStore, SharedStore};
pub use types::{Client, Taxi};
