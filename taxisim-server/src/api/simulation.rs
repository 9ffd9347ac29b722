//! Simulation lifecycle handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::{ApiError, AppState};

/// POST /api/simulation/start
pub async fn start(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    state.simulation.start()?;
    Ok(Json(json!({ "status": "Simulation started" })))
}

/// POST /api/simulation/stop
pub async fn stop(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    state.simulation.stop()?;
    Ok(Json(json!({ "status": "Simulation stopped" })))
}

/// POST /api/simulation/restart
///
/// Never conflicts: a restart from the stopped state simply clears the
/// collections.
pub async fn restart(State(state): State<Arc<AppState>>) -> Json<Value> {
    state.simulation.restart();
    Json(json!({ "status": "Simulation restarted" }))
}
