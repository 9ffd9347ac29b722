//! Nearest-client selection.

use crate::coord::{distance_km, LatLng};
use crate::fleet::Client;

/// Selects the waiting client closest to `origin`.
///
/// Clients are scanned in insertion order and the running best is
/// replaced only on a strictly smaller distance, so an exact distance
/// tie goes to the earliest-inserted client. Returns a live reference
/// into the collection; the caller flips the engagement flags through
/// it. `None` when no client is eligible.
pub fn closest_waiting_client(origin: LatLng, clients: &mut [Client]) -> Option<&mut Client> {
    let mut best_index = None;
    let mut best_distance = f64::INFINITY;

    for (index, client) in clients.iter().enumerate() {
        if !client.is_waiting() {
            continue;
        }
        let distance = distance_km(origin, client.location);
        if distance < best_distance {
            best_distance = distance;
            best_index = Some(index);
        }
    }

    best_index.map(move |index| &mut clients[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64, lat: f64, lng: f64) -> Client {
        Client {
            id,
            name: format!("C{}", id),
            location: LatLng::new(lat, lng),
            waiting: true,
            busy: false,
        }
    }

    #[test]
    fn picks_the_nearest_waiting_client() {
        let origin = LatLng::new(0.0, 0.0);
        let mut clients = vec![
            client(1, 0.0, 3.0),
            client(2, 0.0, 0.5),
            client(3, 0.0, 1.0),
        ];

        let chosen = closest_waiting_client(origin, &mut clients).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn exact_tie_goes_to_the_earliest_insertion() {
        let origin = LatLng::new(0.0, 0.0);
        // Same distance east and west of the origin
        let mut clients = vec![client(1, 0.0, 1.0), client(2, 0.0, -1.0)];

        let chosen = closest_waiting_client(origin, &mut clients).unwrap();
        assert_eq!(chosen.id, 1);
    }

    #[test]
    fn skips_ineligible_clients() {
        let origin = LatLng::new(0.0, 0.0);
        let mut near_but_busy = client(1, 0.0, 0.1);
        near_but_busy.busy = true;
        let mut near_but_served = client(2, 0.0, 0.2);
        near_but_served.waiting = false;
        let mut clients = vec![near_but_busy, near_but_served, client(3, 0.0, 5.0)];

        let chosen = closest_waiting_client(origin, &mut clients).unwrap();
        assert_eq!(chosen.id, 3);
    }

    #[test]
    fn no_eligible_client_yields_none() {
        let origin = LatLng::new(0.0, 0.0);

        let mut empty: Vec<Client> = Vec::new();
        assert!(closest_waiting_client(origin, &mut empty).is_none());

        let mut engaged = client(1, 0.0, 0.1);
        engaged.waiting = false;
        engaged.busy = true;
        let mut clients = vec![engaged];
        assert!(closest_waiting_client(origin, &mut clients).is_none());
    }

    #[test]
    fn returned_reference_mutates_the_collection() {
        let origin = LatLng::new(0.0, 0.0);
        let mut clients = vec![client(1, 0.0, 1.0)];

        {
            let chosen = closest_waiting_client(origin, &mut clients).unwrap();
            chosen.waiting = false;
            chosen.busy = true;
        }

        assert!(!clients[0].waiting);
        assert!(clients[0].busy);
    }
}
