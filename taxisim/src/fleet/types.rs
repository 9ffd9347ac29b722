//! Fleet entity definitions.

use serde::{Deserialize, Serialize};

use crate::coord::LatLng;

/// A taxi in the simulated fleet.
///
/// `available` and `busy` are independent flags: a taxi is offered to
/// clients only while `available && !busy`. Once the dispatch tick
/// engages a taxi, both flags flip and never flip back; engagement is a
/// terminal state and only a restart clears the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxi {
    pub id: i64,
    pub name: String,
    pub location: LatLng,
    pub available: bool,
    pub busy: bool,
}

impl Taxi {
    /// Whether this taxi may be offered to a waiting client.
    #[inline]
    pub fn is_dispatchable(&self) -> bool {
        self.available && !self.busy
    }
}

/// A client waiting for, or engaged with, a taxi.
///
/// Mirrors [`Taxi`]: eligible as a match target only while
/// `waiting && !busy`, and engagement is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub location: LatLng,
    pub waiting: bool,
    pub busy: bool,
}

impl Client {
    /// Whether this client is a valid match target.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.waiting && !self.busy
    }
}
