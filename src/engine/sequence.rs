//! Sequence processor: drive the transition engine over a point sequence.
//!
//! `true` means the server of that point won it. Points are applied in
//! order, each to the state produced by the previous one. A loop rather
//! than recursion, so match length is bounded only by memory.

use crate::core::MatchState;
use crate::error::{Error, Result};
use crate::rules::MatchRules;

use super::trajectory::Trajectory;
use super::transition::advance_point;

/// Apply every point and return one snapshot per point.
///
/// Fails with `InvalidPointSequence` if a point arrives after the match
/// ended. An empty sequence gives an empty trajectory.
///
/// ```
/// use tennis_points::core::MatchState;
/// use tennis_points::engine::process_points;
/// use tennis_points::rules::RuleSet;
///
/// let start = MatchState::new("Roger Federer", "Rafael Nadal");
/// let trajectory = process_points(&[true], &start, &RuleSet::ClassicSlamMen).unwrap();
///
/// assert_eq!(trajectory.len(), 1);
/// assert_eq!(trajectory.final_state().unwrap().points_in_game(), 1);
/// ```
pub fn process_points<R: MatchRules + ?Sized>(
    points: &[bool],
    start: &MatchState,
    rules: &R,
) -> Result<Trajectory> {
    let mut states: Vec<MatchState> = Vec::with_capacity(points.len());

    for (point_index, &server_won) in points.iter().enumerate() {
        let basis = states.last().unwrap_or(start);

        if basis.is_over {
            return Err(points_after_end(point_index, points.len()));
        }

        let next = advance_point(server_won, basis, rules);
        states.push(next);
    }

    Ok(Trajectory::new(states))
}

/// Apply every point and return only the last state.
///
/// Same checks as `process_points`, without keeping the history. Returns a
/// copy of `start` for an empty sequence.
pub fn final_state<R: MatchRules + ?Sized>(
    points: &[bool],
    start: &MatchState,
    rules: &R,
) -> Result<MatchState> {
    let mut state = start.clone();

    for (point_index, &server_won) in points.iter().enumerate() {
        if state.is_over {
            return Err(points_after_end(point_index, points.len()));
        }
        state = advance_point(server_won, &state, rules);
    }

    Ok(state)
}

fn points_after_end(point_index: usize, total: usize) -> Error {
    log::debug!("match ended before point {} of {}", point_index, total);

    Error::InvalidPointSequence {
        point_index,
        remaining: total - point_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn test_empty_sequence() {
        let start = MatchState::new("A", "B");
        let trajectory = process_points(&[], &start, &RuleSet::StandardBestOfThree).unwrap();

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.final_state(), None);

        let last = final_state(&[], &start, &RuleSet::StandardBestOfThree).unwrap();
        assert_eq!(last, start);
    }

    #[test]
    fn test_one_snapshot_per_point() {
        let start = MatchState::new("A", "B");
        let points = [true, false, true, true, true, false];
        let trajectory = process_points(&points, &start, &RuleSet::StandardBestOfThree).unwrap();

        assert_eq!(trajectory.len(), points.len());
        assert_eq!(trajectory.states()[3].total_games_played, 0);
        assert_eq!(trajectory.states()[4].total_games_played, 1);
    }

    #[test]
    fn test_final_state_matches_trajectory() {
        let start = MatchState::new("A", "B");
        let points: Vec<bool> = (0..40).map(|i| i % 3 != 0).collect();
        let rules = RuleSet::UsOpenMen;

        let trajectory = process_points(&points, &start, &rules).unwrap();
        let last = final_state(&points, &start, &rules).unwrap();

        assert_eq!(trajectory.final_state(), Some(&last));
    }

    #[test]
    fn test_point_after_match_over() {
        let start = MatchState::new("A", "B");
        let mut over = start.clone();
        over.is_over = true;

        let err = process_points(&[true, true], &over, &RuleSet::StandardBestOfThree).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPointSequence { point_index: 0, remaining: 2 }
        ));

        let err = final_state(&[true], &over, &RuleSet::StandardBestOfThree).unwrap_err();
        assert!(matches!(err, Error::InvalidPointSequence { .. }));
    }
}
