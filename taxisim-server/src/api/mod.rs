//! HTTP API surface.
//!
//! Thin axum handlers over the dispatch engine. All simulation behavior
//! lives in the `taxisim` library; handlers only translate requests
//! into store/lifecycle calls and map errors onto status codes.

mod error;
mod fleet;
mod settings;
mod simulation;


pub use error::ApiError;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use taxisim::fleet::SharedStore;
use taxisim::runtime::Simulation;

/// Shared state for all handlers.
pub struct AppState {
    /// Entity store, shared with the tick daemon.
    pub store: SharedStore,
    /// Lifecycle state machine.
    pub simulation: Simulation,
    /// Value reported by the settings endpoint; not applied to the timer.
    pub simulation_speed: f64,
    /// Value reported by the settings endpoint; not enforced.
    pub max_taxis: u32,
}

/// Builds the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/simulation/start", post(simulation::start))
        .route("/api/simulation/stop", post(simulation::stop))
        .route("/api/simulation/restart", post(simulation::restart))
        .route("/api/taxis", get(fleet::list_taxis).post(fleet::create_taxi))
        .route(
            "/api/clients",
            get(fleet::list_clients).post(fleet::create_client),
        )
        .route(
            "/api/settings",
            get(settings::get_settings).post(settings::update_settings),
        )
        .with_state(state)
}
