//! Settings endpoint handlers.
//!
//! A stateless configuration surface: GET reports the configured
//! defaults, POST echoes whatever it is given. Neither feeds back into
//! the running simulation; in particular `simulationSpeed` does not
//! drive the tick timer.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::AppState;

/// Fixed settings reported by GET /api/settings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub simulation_speed: f64,
    pub max_taxis: u32,
}

/// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        simulation_speed: state.simulation_speed,
        max_taxis: state.max_taxis,
    })
}

/// POST /api/settings
///
/// Echoes the request body; a body that fails to parse as JSON is
/// echoed as null rather than rejected.
pub async fn update_settings(payload: Result<Json<Value>, JsonRejection>) -> Json<Value> {
    let body = payload.map(|Json(v)| v).unwrap_or(Value::Null);
    Json(body)
}
