//! Match state: everything about one match that changes point to point.
//!
//! ## MatchState
//!
//! - Current roles (server, returner) and the fixed first server/returner
//! - Whether the current game is a tiebreak
//! - Set index, games played across the match
//! - Current set score, current game score, sets won
//! - Completed sets (append-only)
//! - Terminal flag
//!
//! States are values: the transition engine never mutates a caller's state,
//! it returns a new one. `past_sets` uses an `im` persistent vector so
//! keeping one snapshot per point stays cheap for long matches.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::player::{PlayerId, PlayerMap};

/// A finished set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSet {
    /// Games won by each player in this set.
    pub player_scores: PlayerMap<u32>,

    /// Points won by each player in the deciding tiebreak.
    /// Present only if the set ended in a tiebreak.
    pub tiebreak_score: Option<PlayerMap<u32>>,
}

impl CompletedSet {
    /// Points won by the loser of the deciding tiebreak, if there was one.
    #[must_use]
    pub fn tiebreak_loser_points(&self) -> Option<u32> {
        self.tiebreak_score
            .as_ref()
            .and_then(|score| score.values().copied().min())
    }

    /// Check whether the set was decided by a tiebreak.
    #[must_use]
    pub fn had_tiebreak(&self) -> bool {
        self.tiebreak_score.is_some()
    }
}

/// State of one match at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    // === Roles ===
    /// Player serving the current point.
    pub server: PlayerId,

    /// Player receiving the current point.
    pub returner: PlayerId,

    /// Server of the first game. Fixed for the whole match.
    pub first_server: PlayerId,

    /// Returner of the first game. Fixed for the whole match.
    pub first_returner: PlayerId,

    // === Progression ===
    /// Whether the current game is a tiebreak.
    pub is_tiebreak: bool,

    /// Zero-based index of the set in progress.
    /// Not advanced past the deciding set once the match is over.
    pub set_num: u32,

    /// Games completed in the whole match, tiebreaks included.
    pub total_games_played: u32,

    // === Scores ===
    /// Games won by each player in the set in progress.
    pub cur_set_score: PlayerMap<u32>,

    /// Points won by each player in the game (or tiebreak) in progress.
    pub cur_game_score: PlayerMap<u32>,

    /// Sets won by each player.
    pub sets_won: PlayerMap<u32>,

    /// Completed sets in the order they were played.
    pub past_sets: Vector<CompletedSet>,

    /// Terminal flag. No point may be applied once set.
    pub is_over: bool,
}

impl MatchState {
    /// Create the state before the first point of a match.
    ///
    /// ```
    /// use tennis_points::core::{MatchState, PlayerId};
    ///
    /// let state = MatchState::new("Roger Federer", "Rafael Nadal");
    ///
    /// assert_eq!(state.server, PlayerId::new("Roger Federer"));
    /// assert_eq!(state.total_games_played, 0);
    /// assert!(state.past_sets.is_empty());
    /// assert!(!state.is_over);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if both players are the same. Use `try_new` for identities
    /// read from untrusted data.
    #[must_use]
    pub fn new(first_server: impl Into<PlayerId>, first_returner: impl Into<PlayerId>) -> Self {
        let first_server = first_server.into();
        let first_returner = first_returner.into();

        let zeros = PlayerMap::with_value(first_server.clone(), first_returner.clone(), 0);

        Self {
            server: first_server.clone(),
            returner: first_returner.clone(),
            first_server,
            first_returner,
            is_tiebreak: false,
            set_num: 0,
            total_games_played: 0,
            cur_set_score: zeros.clone(),
            cur_game_score: zeros.clone(),
            sets_won: zeros,
            past_sets: Vector::new(),
            is_over: false,
        }
    }

    /// Create the starting state, rejecting identical players.
    pub fn try_new(first_server: impl Into<PlayerId>, first_returner: impl Into<PlayerId>) -> Result<Self> {
        let first_server = first_server.into();
        let first_returner = first_returner.into();

        if first_server == first_returner {
            return Err(Error::IdenticalPlayers {
                name: first_server.as_str().to_string(),
            });
        }

        Ok(Self::new(first_server, first_returner))
    }

    /// Start the match inside a tiebreak.
    #[must_use]
    pub fn with_tiebreak(mut self, is_tiebreak: bool) -> Self {
        self.is_tiebreak = is_tiebreak;
        self
    }

    /// Reset the game score to 0-0, keyed by the current roles.
    pub fn reset_game_score(&mut self) {
        self.cur_game_score = PlayerMap::with_value(self.server.clone(), self.returner.clone(), 0);
    }

    /// Reset the set score to 0-0, keyed by the current roles.
    pub fn reset_set_score(&mut self) {
        self.cur_set_score = PlayerMap::with_value(self.server.clone(), self.returner.clone(), 0);
    }

    /// Swap server and returner.
    pub fn switch_server_and_returner(&mut self) {
        std::mem::swap(&mut self.server, &mut self.returner);
    }

    /// Points played so far in the current game or tiebreak.
    #[must_use]
    pub fn points_in_game(&self) -> u32 {
        self.cur_game_score.values().sum()
    }

    /// Sets completed so far.
    #[must_use]
    pub fn sets_played(&self) -> usize {
        self.past_sets.len()
    }

    /// The match winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        if !self.is_over {
            return None;
        }

        let (a, b) = (&self.first_server, &self.first_returner);
        if self.sets_won[a] >= self.sets_won[b] {
            Some(a)
        } else {
            Some(b)
        }
    }
}
