//! Identifiers and small domain types shared by the engine and the registry.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::Position;

/// Unique identifier for a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier for a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier for a recorded move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveId(String);

impl MoveId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Waiting for a second player.
    Waiting,
    /// Both players joined; moves are accepted.
    Active,
    /// A player completed a line.
    Completed,
    /// The board filled with no winning line.
    Draw,
}

impl GameStatus {
    /// Returns true for `completed` and `draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Draw)
    }
}

/// The registry's view of a player: identity plus display name.
///
/// Player records (email, statistics) live outside the registry; a game only
/// needs to know who is seated at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Participant {
    /// Player identifier.
    id: PlayerId,
    /// Display name.
    name: String,
}

/// A recorded move. Immutable once appended to a game's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Move {
    /// Move identifier.
    id: MoveId,
    /// Game the move belongs to.
    game_id: GameId,
    /// Player who made the move.
    player_id: PlayerId,
    /// Cell that was marked.
    #[serde(flatten)]
    position: Position,
    /// When the move was recorded.
    timestamp: DateTime<Utc>,
}

impl Move {
    pub(crate) fn record(game_id: GameId, player_id: PlayerId, position: Position) -> Self {
        Self {
            id: MoveId::generate(),
            game_id,
            player_id,
            position,
            timestamp: Utc::now(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player_id, self.position)
    }
}
