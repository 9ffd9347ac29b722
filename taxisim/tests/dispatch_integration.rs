//! End-to-end tests driving the dispatch engine through the simulation
//! lifecycle, the way the HTTP layer does.

use std::time::Duration;

use taxisim::coord::LatLng;
use taxisim::fleet::{shared_store, Client, SharedStore, Taxi};
use taxisim::runtime::{Simulation, SimulationError};

fn taxi(id: i64, lat: f64, lng: f64) -> Taxi {
    Taxi {
        id,
        name: format!("T{}", id),
        location: LatLng::new(lat, lng),
        available: true,
        busy: false,
    }
}

fn client(id: i64, lat: f64, lng: f64) -> Client {
    Client {
        id,
        name: format!("C{}", id),
        location: LatLng::new(lat, lng),
        waiting: true,
        busy: false,
    }
}

async fn wait_for_match(store: &SharedStore, taxi_id: i64) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        {
            let guard = store.lock().unwrap();
            if guard.taxis.iter().any(|t| t.id == taxi_id && t.busy) {
                return;
            }
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "taxi {} was not matched within the deadline",
            taxi_id
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn one_taxi_two_clients_dispatches_to_the_nearer() {
    let store = shared_store();
    {
        let mut guard = store.lock().unwrap();
        guard.add_taxi(taxi(1, 0.0, 0.0));
        guard.add_client(client(1, 0.0, 1.0));
        guard.add_client(client(2, 0.0, 0.5));
    }

    let simulation =
        Simulation::new(store.clone()).with_tick_interval(Duration::from_millis(20));
    simulation.start().unwrap();
    wait_for_match(&store, 1).await;
    simulation.shutdown().await;

    let guard = store.lock().unwrap();
    let t1 = &guard.taxis[0];
    assert_eq!(t1.location, LatLng::new(0.0, 0.5));
    assert!(!t1.available);
    assert!(t1.busy);

    let c1 = &guard.clients[0];
    assert!(c1.waiting, "the farther client must be untouched");
    assert!(!c1.busy);

    let c2 = &guard.clients[1];
    assert!(!c2.waiting);
    assert!(c2.busy);
}

#[tokio::test]
async fn entities_created_while_running_are_matched_by_a_later_tick() {
    let store = shared_store();
    let simulation =
        Simulation::new(store.clone()).with_tick_interval(Duration::from_millis(20));
    simulation.start().unwrap();

    // Create both sides after the daemon is already looping
    {
        let mut guard = store.lock().unwrap();
        guard.add_taxi(taxi(7, 10.0, 10.0));
        guard.add_client(client(7, 10.0, 10.5));
    }

    wait_for_match(&store, 7).await;
    simulation.shutdown().await;

    let guard = store.lock().unwrap();
    assert_eq!(guard.taxis[0].location, LatLng::new(10.0, 10.5));
    assert!(guard.clients[0].busy);
}

#[tokio::test]
async fn lifecycle_conflicts_leave_state_unchanged() {
    let store = shared_store();
    let simulation =
        Simulation::new(store.clone()).with_tick_interval(Duration::from_millis(20));

    assert_eq!(simulation.stop(), Err(SimulationError::NotRunning));

    simulation.start().unwrap();
    assert_eq!(simulation.start(), Err(SimulationError::AlreadyRunning));
    assert!(simulation.is_running());

    simulation.stop().unwrap();
    assert!(!simulation.is_running());
    simulation.shutdown().await;
}

#[tokio::test]
async fn restart_from_running_stops_and_empties_the_store() {
    let store = shared_store();
    {
        let mut guard = store.lock().unwrap();
        guard.add_taxi(taxi(1, 0.0, 0.0));
        guard.add_client(client(1, 0.0, 1.0));
    }

    let simulation =
        Simulation::new(store.clone()).with_tick_interval(Duration::from_millis(20));
    simulation.start().unwrap();
    simulation.restart();

    assert!(!simulation.is_running());
    {
        let guard = store.lock().unwrap();
        assert!(guard.taxis.is_empty());
        assert!(guard.clients.is_empty());
    }

    // The cleared simulation accepts a fresh population and start
    {
        let mut guard = store.lock().unwrap();
        guard.add_taxi(taxi(2, 0.0, 0.0));
        guard.add_client(client(2, 0.0, 0.1));
    }
    simulation.start().unwrap();
    wait_for_match(&store, 2).await;
    simulation.shutdown().await;
}
