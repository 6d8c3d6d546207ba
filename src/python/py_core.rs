//! State and trajectory bindings for Python.

use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use crate::core::{MatchState, PlayerMap};
use crate::engine::Trajectory;
use crate::format::match_summary;

use super::to_py_err;

fn score_pairs(scores: &PlayerMap<u32>) -> Vec<(String, u32)> {
    scores
        .iter()
        .map(|(player, score)| (player.as_str().to_string(), *score))
        .collect()
}

/// Python wrapper for MatchState.
#[pyclass(name = "MatchState")]
#[derive(Clone, Debug)]
pub struct PyMatchState(pub MatchState);

#[pymethods]
impl PyMatchState {
    /// Create the state before the first point.
    #[new]
    #[pyo3(signature = (first_server, first_returner, is_tiebreak=false))]
    fn new(first_server: &str, first_returner: &str, is_tiebreak: bool) -> PyResult<Self> {
        let state = MatchState::try_new(first_server, first_returner).map_err(to_py_err)?;
        Ok(Self(state.with_tiebreak(is_tiebreak)))
    }

    #[getter]
    fn server(&self) -> String {
        self.0.server.to_string()
    }

    #[getter]
    fn returner(&self) -> String {
        self.0.returner.to_string()
    }

    #[getter]
    fn is_tiebreak(&self) -> bool {
        self.0.is_tiebreak
    }

    #[getter]
    fn set_num(&self) -> u32 {
        self.0.set_num
    }

    #[getter]
    fn total_games_played(&self) -> u32 {
        self.0.total_games_played
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.0.is_over
    }

    /// Current game (or tiebreak) points per player.
    #[getter]
    fn cur_game_score(&self) -> Vec<(String, u32)> {
        score_pairs(&self.0.cur_game_score)
    }

    /// Games per player in the current set.
    #[getter]
    fn cur_set_score(&self) -> Vec<(String, u32)> {
        score_pairs(&self.0.cur_set_score)
    }

    #[getter]
    fn sets_won(&self) -> Vec<(String, u32)> {
        score_pairs(&self.0.sets_won)
    }

    /// Completed sets as (games, tiebreak points or None).
    #[getter]
    fn past_sets(&self) -> Vec<(Vec<(String, u32)>, Option<Vec<(String, u32)>>)> {
        self.0
            .past_sets
            .iter()
            .map(|set| {
                (
                    score_pairs(&set.player_scores),
                    set.tiebreak_score.as_ref().map(score_pairs),
                )
            })
            .collect()
    }

    /// Match winner, if the match is over.
    fn winner(&self) -> Option<String> {
        self.0.winner().map(|player| player.to_string())
    }

    /// Score string, with the "A - B:" header unless `score_only`.
    #[pyo3(signature = (score_only=false))]
    fn summary(&self, score_only: bool) -> String {
        match_summary(&self.0, score_only)
    }

    fn __repr__(&self) -> String {
        format!("MatchState({})", match_summary(&self.0, false))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Trajectory.
#[pyclass(name = "Trajectory")]
#[derive(Clone, Debug)]
pub struct PyTrajectory(pub Trajectory);

#[pymethods]
impl PyTrajectory {
    /// Get all states, one per point.
    #[getter]
    fn states(&self) -> Vec<PyMatchState> {
        self.0.iter().cloned().map(PyMatchState).collect()
    }

    /// State after the last point.
    fn final_state(&self) -> Option<PyMatchState> {
        self.0.final_state().cloned().map(PyMatchState)
    }

    fn is_complete(&self) -> bool {
        self.0.is_complete()
    }

    /// Indices of points that ended a game.
    fn game_ending_points(&self) -> Vec<usize> {
        self.0.game_ending_points()
    }

    #[pyo3(signature = (score_only=false))]
    fn summaries(&self, score_only: bool) -> Vec<String> {
        self.0.summaries(score_only)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Negative indices count from the end, as for a list.
    fn __getitem__(&self, index: isize) -> PyResult<PyMatchState> {
        self.0
            .state_at(index)
            .cloned()
            .map(PyMatchState)
            .ok_or_else(|| PyIndexError::new_err(format!("state index {} out of range", index)))
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(points={}, complete={})",
            self.0.len(),
            self.0.is_complete()
        )
    }
}
