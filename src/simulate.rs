//! Random match simulation.
//!
//! Each point is won by the server with a fixed probability. Useful for
//! exercising long matches (advantage final sets, many tiebreaks) and for
//! benchmarks.

use crate::core::{MatchState, PointRng};
use crate::engine::{advance_point, Trajectory};
use crate::rules::MatchRules;

/// Play points until the match is over or `max_points` is reached.
///
/// Never errors: drawing stops at the end of the match, so the output
/// is always a valid trajectory. With `p_server` at exactly 0 or 1 a
/// tiebreak never ends, hence the cap.
pub fn simulate_match<R: MatchRules + ?Sized>(
    start: &MatchState,
    rules: &R,
    p_server: f64,
    rng: &mut PointRng,
    max_points: usize,
) -> (Vec<bool>, Trajectory) {
    let mut points = Vec::new();
    let mut states: Vec<MatchState> = Vec::new();

    while points.len() < max_points {
        let basis = states.last().unwrap_or(start);
        if basis.is_over {
            break;
        }

        let server_won = rng.point(p_server);
        let next = advance_point(server_won, basis, rules);

        points.push(server_won);
        states.push(next);
    }

    log::trace!(
        "simulated {} points (seed {}), complete: {}",
        points.len(),
        rng.seed(),
        states.last().is_some_and(|state| state.is_over)
    );

    (points, Trajectory::new(states))
}
