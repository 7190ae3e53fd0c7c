//! Game endpoints: create, list, look up, join and move.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gridmatch_core::{Game, GameId, GameStatus, MoveOutcome, PlayerId, WinResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{ApiError, AppState};

/// Body of `POST /games`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Query string of `GET /games`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListGamesQuery {
    /// Only list games in this status.
    pub status: Option<GameStatus>,
}

/// Body of `POST /games/{id}/join`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinGameRequest {
    /// Registered player to seat.
    pub player_id: PlayerId,
}

/// Body of `POST /games/{id}/moves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    /// Player making the move.
    pub player_id: PlayerId,
    /// Row, 0 at the top.
    pub row: i64,
    /// Column, 0 at the left.
    pub col: i64,
}

/// A single game, with an optional status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    /// Game snapshot.
    pub game: Game,
    /// What the request did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A list of games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameListResponse {
    /// Game snapshots, oldest first.
    pub games: Vec<Game>,
}

/// Result of a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Game snapshot after the move.
    pub game: Game,
    /// Whether the move completed a line.
    pub win_result: WinResult,
    /// Human-readable summary.
    pub message: String,
}

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(create_game).get(list_games))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/join", post(join_game))
        .route("/games/{id}/moves", post(make_move))
}

#[instrument(skip(state))]
async fn create_game(
    State(state): State<AppState>,
    Json(req): Json<CreateGameRequest>,
) -> (StatusCode, Json<GameResponse>) {
    let game = state.games.create_game(req.name);
    let response = GameResponse {
        game,
        message: Some("Game created successfully".to_string()),
    };
    (StatusCode::CREATED, Json(response))
}

#[instrument(skip(state))]
async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<ListGamesQuery>,
) -> Json<GameListResponse> {
    let games = state.games.list_games(query.status);
    debug!(count = games.len(), "Listing games");
    Json(GameListResponse { games })
}

#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.games.get_game(&game_id)?;
    Ok(Json(GameResponse { game, message: None }))
}

#[instrument(skip(state))]
async fn join_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Json(req): Json<JoinGameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    // Unknown game takes precedence over unknown player.
    state.games.get_game(&game_id)?;
    let player = state.players.get_player(&req.player_id)?;

    let game = state.games.join_game(&game_id, player.participant())?;
    let message = match game.status() {
        GameStatus::Active => format!("{} joined. Game started", player.name()),
        _ => format!("{} joined. Waiting for an opponent", player.name()),
    };
    info!(player_id = %req.player_id, status = %game.status(), "Join handled");
    Ok(Json(GameResponse {
        game,
        message: Some(message),
    }))
}

#[instrument(skip(state))]
async fn make_move(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Json(req): Json<MakeMoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let outcome = state
        .games
        .make_move(&game_id, &req.player_id, req.row, req.col)?;

    if outcome.game().is_terminal() {
        state.players.record_result(outcome.game());
    }

    let message = describe(&outcome);
    let (game, win_result) = outcome.dissolve();
    Ok(Json(MoveResponse {
        game,
        win_result,
        message,
    }))
}

/// Summarizes a move for display.
fn describe(outcome: &MoveOutcome) -> String {
    let game = outcome.game();
    let name_of = |id: &Option<PlayerId>| {
        id.as_ref()
            .and_then(|id| game.participant(id))
            .map_or_else(|| "Unknown player".to_string(), |p| p.name().clone())
    };

    match (game.status(), outcome.win_result().line()) {
        (GameStatus::Completed, Some(line)) => {
            format!("{} wins on {}!", name_of(game.winner_id()), line)
        }
        (GameStatus::Draw, _) => "Game ended in a draw".to_string(),
        _ => format!("Move accepted. {} to move", name_of(game.current_player_id())),
    }
}
