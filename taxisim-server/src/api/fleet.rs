//! Taxi and client collection handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::debug;

use taxisim::fleet::{Client, Taxi};

use super::{ApiError, AppState};

/// GET /api/taxis
pub async fn list_taxis(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let taxis = {
        let store = state.store.lock().unwrap();
        store.taxis.clone()
    };

    let body = serde_json::to_value(&taxis)
        .map_err(|e| ApiError::Internal(format!("Failed to encode taxis: {}", e)))?;
    Ok(Json(body))
}

/// POST /api/taxis
///
/// The caller's `busy` flag is ignored; new taxis always start not busy.
pub async fn create_taxi(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Taxi>, JsonRejection>,
) -> Result<(StatusCode, Json<Taxi>), ApiError> {
    let Json(taxi) = payload.map_err(|e| {
        debug!(error = %e, "Rejected taxi payload");
        ApiError::BadRequest("Invalid request payload".to_string())
    })?;

    let created = {
        let mut store = state.store.lock().unwrap();
        store.add_taxi(taxi)
    };
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/clients
pub async fn list_clients(State(state): State<Arc<AppState>>) -> Json<Vec<Client>> {
    let clients = {
        let store = state.store.lock().unwrap();
        store.clients.clone()
    };
    Json(clients)
}

/// POST /api/clients
///
/// The caller's flags are ignored; new clients always start waiting and
/// not busy.
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Client>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let Json(client) = payload.map_err(|e| {
        debug!(error = %e, "Rejected client payload");
        ApiError::BadRequest("Invalid request payload".to_string())
    })?;

    let created = {
        let mut store = state.store.lock().unwrap();
        store.add_client(client)
    };
    Ok((StatusCode::CREATED, Json(created)))
}
