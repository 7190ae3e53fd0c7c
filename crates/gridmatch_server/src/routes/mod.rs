//! HTTP routing.

mod games;
mod health;
mod players;

pub use games::{
    CreateGameRequest, GameListResponse, GameResponse, JoinGameRequest, ListGamesQuery,
    MakeMoveRequest, MoveResponse,
};
pub use players::{CreatePlayerRequest, PlayerListResponse, PlayerResponse};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(games::routes())
        .merge(players::routes())
        .fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn endpoint_not_found(uri: axum::http::Uri) -> (StatusCode, Json<Value>) {
    debug!(%uri, "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
