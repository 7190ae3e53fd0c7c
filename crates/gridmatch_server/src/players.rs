//! Player directory and per-player statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use derive_getters::Getters;
use gridmatch_core::{Game, GameStatus, MatchError, Participant, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Game outcome from a player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    /// Player won the game.
    Win,
    /// Player lost the game.
    Loss,
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished game for `player_id`, or `None` while the game
    /// is still running.
    #[instrument(skip(game), fields(game_id = %game.id(), status = %game.status()))]
    pub fn for_player(game: &Game, player_id: &PlayerId) -> Option<Self> {
        match game.status() {
            GameStatus::Draw => Some(Self::Draw),
            GameStatus::Completed if game.winner_id().as_ref() == Some(player_id) => Some(Self::Win),
            GameStatus::Completed => Some(Self::Loss),
            GameStatus::Waiting | GameStatus::Active => None,
        }
    }
}

/// Aggregated statistics for a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct PlayerStats {
    games_played: u32,
    games_won: u32,
    games_lost: u32,
    games_drawn: u32,
    total_moves: u32,
    /// Moves made across won games.
    winning_moves: u32,
    average_moves_per_win: f64,
    /// Fraction of played games won, `0.0..=1.0`.
    win_rate: f64,
    /// Wins per move made.
    efficiency: f64,
}

impl PlayerStats {
    /// Folds one finished game into the totals and recomputes the ratios.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome, moves: u32) {
        self.games_played += 1;
        self.total_moves += moves;
        match outcome {
            GameOutcome::Win => {
                self.games_won += 1;
                self.winning_moves += moves;
            }
            GameOutcome::Loss => self.games_lost += 1,
            GameOutcome::Draw => self.games_drawn += 1,
        }

        self.win_rate = ratio(self.games_won, self.games_played);
        self.average_moves_per_win = ratio(self.winning_moves, self.games_won);
        self.efficiency = ratio(self.games_won, self.total_moves);
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

/// A registered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Player {
    id: PlayerId,
    name: String,
    email: String,
    stats: PlayerStats,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Player {
    /// The registry's view of this player.
    pub fn participant(&self) -> Participant {
        Participant::new(self.id.clone(), self.name.clone())
    }
}

/// In-memory directory of players.
///
/// Emails are reserved in a second map so that uniqueness is decided
/// atomically even when two registrations race.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Arc<DashMap<PlayerId, Player>>,
    emails: Arc<DashMap<String, PlayerId>>,
}

impl PlayerDirectory {
    /// Creates an empty directory.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating player directory");
        Self::default()
    }

    /// Registers a new player.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank or the email is malformed.
    /// - `Conflict` if the email is already registered.
    #[instrument(skip(self))]
    pub fn create_player(&self, name: &str, email: &str) -> Result<Player, MatchError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MatchError::validation("Name is required"));
        }
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(MatchError::validation(format!(
                "Invalid email address: '{email}'"
            )));
        }

        let id = PlayerId::generate();
        match self.emails.entry(email.to_lowercase()) {
            Entry::Occupied(_) => {
                warn!(%email, "Email already registered");
                return Err(MatchError::conflict("Email is already registered"));
            }
            Entry::Vacant(slot) => {
                slot.insert(id.clone());
            }
        }

        let now = Utc::now();
        let player = Player {
            id: id.clone(),
            name: name.to_string(),
            email: email.to_string(),
            stats: PlayerStats::default(),
            created_at: now,
            updated_at: now,
        };
        self.players.insert(id, player.clone());
        info!(player_id = %player.id, name = %player.name, "Player created");
        Ok(player)
    }

    /// Returns a snapshot of the player.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no player has this id.
    #[instrument(skip(self))]
    pub fn get_player(&self, player_id: &PlayerId) -> Result<Player, MatchError> {
        self.players
            .get(player_id)
            .map(|p| p.value().clone())
            .ok_or_else(|| MatchError::not_found(format!("Player {player_id} not found")))
    }

    /// Lists players in registration order.
    #[instrument(skip(self))]
    pub fn list_players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.iter().map(|p| p.value().clone()).collect();
        players.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        debug!(count = players.len(), "Listed players");
        players
    }

    /// Records a finished game for every participant. Running games are
    /// ignored.
    #[instrument(skip(self, game), fields(game_id = %game.id(), status = %game.status()))]
    pub fn record_result(&self, game: &Game) {
        for participant in game.players() {
            let Some(outcome) = GameOutcome::for_player(game, participant.id()) else {
                debug!("Game still running, nothing to record");
                return;
            };
            let moves = u32::try_from(game.moves_by(participant.id())).unwrap_or(u32::MAX);

            match self.players.get_mut(participant.id()) {
                Some(mut player) => {
                    player.stats.record(outcome, moves);
                    player.updated_at = Utc::now();
                    info!(player_id = %participant.id(), ?outcome, moves, "Recorded game result");
                }
                None => {
                    warn!(player_id = %participant.id(), "Participant missing from directory");
                }
            }
        }
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no players are registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Accepts `local@domain.tld` shaped addresses without whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        let bad_emails = [
            "",
            "alice",
            "@example.com",
            "alice@",
            "alice@example",
            "a@b@c.com",
            "a b@c.com",
            "a@.com",
            "a@b.",
        ];
        for bad in bad_emails {
            assert!(!is_valid_email(bad), "{bad} accepted");
        }
    }

    #[test]
    fn test_stats_ratios() {
        let mut stats = PlayerStats::default();
        stats.record(GameOutcome::Win, 3);
        stats.record(GameOutcome::Loss, 4);
        stats.record(GameOutcome::Win, 5);
        stats.record(GameOutcome::Draw, 4);

        assert_eq!(*stats.games_played(), 4);
        assert_eq!(*stats.games_won(), 2);
        assert_eq!(*stats.games_lost(), 1);
        assert_eq!(*stats.games_drawn(), 1);
        assert_eq!(*stats.total_moves(), 16);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
        assert!((stats.average_moves_per_win() - 4.0).abs() < f64::EPSILON);
        assert!((stats.efficiency() - 0.125).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = PlayerStats::default();
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(*stats.win_rate(), 0.0);
    }

    #[test]
    fn test_duplicate_email_case_insensitive() {
        let directory = PlayerDirectory::new();
        directory
            .create_player("Alice", "alice@example.com")
            .expect("create");
        let err = directory
            .create_player("Alice Two", "ALICE@example.com")
            .expect_err("duplicate");
        assert_eq!(err.kind, gridmatch_core::MatchErrorKind::Conflict);
        assert_eq!(directory.len(), 1);
    }
}
