//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::instrument;

use crate::AppState;

/// Health check endpoint
#[instrument(skip(state))]
pub(crate) async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "games": state.games.len(),
        "players": state.players.len(),
    }))
}
