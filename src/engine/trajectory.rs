//! Trajectory: the ordered snapshots produced by a point sequence.
//!
//! One `MatchState` per input point, in input order. Snapshots share their
//! completed-set history structurally, so holding every point of a five-set
//! match is cheap.

use serde::{Deserialize, Serialize};

use crate::core::MatchState;
use crate::error::Result;
use crate::format::match_summary;

/// Snapshots of a match, one per point played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    states: Vec<MatchState>,
}

impl Trajectory {
    /// Create a trajectory from snapshots.
    pub fn new(states: Vec<MatchState>) -> Self {
        Self { states }
    }

    /// Get the number of snapshots.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the trajectory is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All snapshots in point order.
    pub fn states(&self) -> &[MatchState] {
        &self.states
    }

    /// Iterate over snapshots in point order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchState> {
        self.states.iter()
    }

    /// The state after the last point, if any point was played.
    pub fn final_state(&self) -> Option<&MatchState> {
        self.states.last()
    }

    /// Snapshot at `index`; negative indices count back from the end.
    pub fn state_at(&self, index: isize) -> Option<&MatchState> {
        let position = if index < 0 {
            index.checked_add(self.states.len() as isize)?
        } else {
            index
        };

        usize::try_from(position)
            .ok()
            .and_then(|position| self.states.get(position))
    }

    /// Check whether the last snapshot ends the match.
    pub fn is_complete(&self) -> bool {
        self.final_state().is_some_and(|state| state.is_over)
    }

    /// Indices of the points that completed a game (tiebreaks included).
    pub fn game_ending_points(&self) -> Vec<usize> {
        let mut previous_games = None;

        self.states
            .iter()
            .enumerate()
            .filter_map(|(i, state)| {
                let games = state.total_games_played;
                let ended = match previous_games {
                    Some(prev) => games > prev,
                    None => games > 0,
                };
                previous_games = Some(games);
                ended.then_some(i)
            })
            .collect()
    }

    /// Render every snapshot as a score string.
    pub fn summaries(&self, score_only: bool) -> Vec<String> {
        self.states
            .iter()
            .map(|state| match_summary(state, score_only))
            .collect()
    }

    /// Take ownership of the snapshots.
    pub fn into_states(self) -> Vec<MatchState> {
        self.states
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl IntoIterator for Trajectory {
    type Item = MatchState;
    type IntoIter = std::vec::IntoIter<MatchState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a MatchState;
    type IntoIter = std::slice::Iter<'a, MatchState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
