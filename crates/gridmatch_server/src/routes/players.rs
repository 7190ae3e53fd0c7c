//! Player endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gridmatch_core::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{ApiError, AppState, Player};

/// Body of `POST /players`. Missing fields fail validation rather than
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email, unique across players.
    #[serde(default)]
    pub email: String,
}

/// A single player, with an optional status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResponse {
    /// Player snapshot.
    pub player: Player,
    /// What the request did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A list of players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    /// Players in registration order.
    pub players: Vec<Player>,
}

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/players", post(create_player).get(list_players))
        .route("/players/{id}", get(get_player))
}

#[instrument(skip(state, req))]
async fn create_player(
    State(state): State<AppState>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let player = state.players.create_player(&req.name, &req.email)?;
    Ok((
        StatusCode::CREATED,
        Json(PlayerResponse {
            player,
            message: Some("Player created successfully".to_string()),
        }),
    ))
}

#[instrument(skip(state))]
async fn list_players(State(state): State<AppState>) -> Json<PlayerListResponse> {
    Json(PlayerListResponse {
        players: state.players.list_players(),
    })
}

#[instrument(skip(state))]
async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = state.players.get_player(&player_id)?;
    Ok(Json(PlayerResponse {
        player,
        message: None,
    }))
}
