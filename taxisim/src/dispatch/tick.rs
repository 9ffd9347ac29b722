//! One pass of the greedy dispatch algorithm.

use tracing::debug;

use super::matcher::closest_waiting_client;
use crate::fleet::DispatchStore;

/// Runs one dispatch tick over the store.
///
/// Call with the store lock held. Taxis are visited in insertion order;
/// each dispatchable taxi is paired with its closest waiting client, the
/// taxi relocates to the client, and both flip to engaged immediately —
/// so a client claimed early in a tick is invisible to later taxis in
/// the same tick. The result is greedy and dependent on taxi storage
/// order; it is not a minimum-total-distance assignment.
///
/// Never fails: empty or all-ineligible collections are a no-op.
/// Returns the number of pairs matched.
pub fn run_tick(store: &mut DispatchStore) -> usize {
    let mut matched = 0;

    for i in 0..store.taxis.len() {
        if !store.taxis[i].is_dispatchable() {
            continue;
        }

        let origin = store.taxis[i].location;
        if let Some(client) = closest_waiting_client(origin, &mut store.clients) {
            let destination = client.location;
            let client_id = client.id;
            client.waiting = false;
            client.busy = true;

            let taxi = &mut store.taxis[i];
            taxi.location = destination;
            taxi.available = false;
            taxi.busy = true;

            debug!(taxi_id = taxi.id, client_id, "Taxi dispatched to client");
            matched += 1;
        }
    }

    matched
}
