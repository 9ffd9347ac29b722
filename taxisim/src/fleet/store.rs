//! Shared fleet/clientele store.
//!
//! The store is the only shared mutable state in the simulation. Every
//! access — HTTP handlers and the background tick alike — goes through
//! one `Mutex`, and the guard is never held across an await point, so a
//! concurrent observer sees each create or tick either entirely or not
//! at all. An entity created while a tick is in flight may or may not be
//! visible to that tick, but is always visible to the next one.

use std::sync::{Arc, Mutex};

use super::types::{Client, Taxi};

/// In-memory fleet and clientele collections.
///
/// Both collections keep insertion order; the matcher and the tick rely
/// on that order for their deterministic tie-break and greedy policy.
#[derive(Debug, Default)]
pub struct DispatchStore {
    pub taxis: Vec<Taxi>,
    pub clients: Vec<Client>,
}

impl DispatchStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a taxi, forcing `busy` off regardless of caller input.
    ///
    /// Returns the entity as stored, for echoing back to the caller.
    pub fn add_taxi(&mut self, mut taxi: Taxi) -> Taxi {
        taxi.busy = false;
        self.taxis.push(taxi.clone());
        taxi
    }

    /// Adds a client, forcing `waiting` on and `busy` off regardless of
    /// caller input.
    ///
    /// Returns the entity as stored, for echoing back to the caller.
    pub fn add_client(&mut self, mut client: Client) -> Client {
        client.waiting = true;
        client.busy = false;
        self.clients.push(client.clone());
        client
    }

    /// Empties both collections. Used by the restart transition.
    pub fn clear(&mut self) {
        self.taxis.clear();
        self.clients.clear();
    }
}

/// Handle shared by HTTP handlers and the tick daemon.
pub type SharedStore = Arc<Mutex<DispatchStore>>;

/// Creates an empty store behind its lock.
pub fn shared_store() -> SharedStore {
    Arc::new(Mutex::new(DispatchStore::new()))
}
