//! Score strings for match states.

use crate::core::{CompletedSet, MatchState, PlayerId};

const NOTATION: [&str; 5] = ["0", "15", "30", "40", "AD"];

/// Render a service game score in tennis notation, e.g. `30:15`.
///
/// Past three points either side, only the difference matters: `40:40`,
/// `AD:40` or `40:AD`.
///
/// # Panics
///
/// Panics if either side has four or more points and the difference is
/// above one: such a game should already have ended.
///
/// ```
/// use tennis_points::format::points_to_tennis_notation;
///
/// assert_eq!(points_to_tennis_notation(1, 0), "15:0");
/// assert_eq!(points_to_tennis_notation(5, 6), "40:AD");
/// ```
#[must_use]
pub fn points_to_tennis_notation(p_win: u32, p_lose: u32) -> String {
    let (won, lost) = if p_win.max(p_lose) > 3 {
        let difference = i64::from(p_win) - i64::from(p_lose);
        assert!(
            difference.abs() <= 1,
            "Game score {}:{} should have ended the game",
            p_win,
            p_lose
        );

        match difference {
            1 => (4, 3),
            0 => (3, 3),
            _ => (3, 4),
        }
    } else {
        (p_win, p_lose)
    };

    format!("{}:{}", NOTATION[won as usize], NOTATION[lost as usize])
}

/// Render a match state as a score string.
///
/// A finished match shows only completed sets, from the winner's side, with
/// the tiebreak loser's points in parentheses: `6-4 6-7(5) 7-6(8)`. A match
/// in progress is shown from the server's side and adds the current set and
/// game (raw points in a tiebreak): `6-4 5-5 AD:40`. Unless `score_only`, a
/// `first - second:` header naming the players comes first.
#[must_use]
pub fn match_summary(state: &MatchState, score_only: bool) -> String {
    let (first, second) = if state.is_over {
        winner_and_loser(state)
    } else {
        (&state.server, &state.returner)
    };

    let mut parts: Vec<String> = Vec::with_capacity(state.past_sets.len() + 3);

    if !score_only {
        parts.push(format!("{} - {}:", first, second));
    }

    parts.extend(state.past_sets.iter().map(|set| set_score(set, first, second)));

    if !state.is_over {
        parts.push(format!(
            "{}-{}",
            state.cur_set_score[first], state.cur_set_score[second]
        ));

        let first_points = state.cur_game_score[first];
        let second_points = state.cur_game_score[second];

        if state.is_tiebreak {
            parts.push(format!("{}:{}", first_points, second_points));
        } else {
            parts.push(points_to_tennis_notation(first_points, second_points));
        }
    }

    parts.join(" ")
}

/// Leader and trailer in sets; ties go to the first entry.
fn winner_and_loser(state: &MatchState) -> (&PlayerId, &PlayerId) {
    let [(a, a_sets), (b, b_sets)] = state.sets_won.pair();

    let winner = if b_sets > a_sets { b } else { a };
    let loser = if b_sets < a_sets { b } else { a };

    (winner, loser)
}

fn set_score(set: &CompletedSet, first: &PlayerId, second: &PlayerId) -> String {
    let score = format!("{}-{}", set.player_scores[first], set.player_scores[second]);

    match set.tiebreak_loser_points() {
        Some(loser_points) => format!("{}({})", score, loser_points),
        None => score,
    }
}

impl std::fmt::Display for CompletedSet {
    /// Set score in entry order, e.g. `7-6(4)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [(first, _), (second, _)] = self.player_scores.pair();
        f.write_str(&set_score(self, first, second))
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&match_summary(self, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerMap;

    fn a() -> PlayerId {
        PlayerId::new("A")
    }

    fn b() -> PlayerId {
        PlayerId::new("B")
    }

    fn scores(a_value: u32, b_value: u32) -> PlayerMap<u32> {
        PlayerMap::new(a(), b(), |p| if *p == a() { a_value } else { b_value })
    }

    #[test]
    fn test_notation_regular_points() {
        assert_eq!(points_to_tennis_notation(0, 0), "0:0");
        assert_eq!(points_to_tennis_notation(1, 0), "15:0");
        assert_eq!(points_to_tennis_notation(2, 3), "30:40");
        assert_eq!(points_to_tennis_notation(3, 3), "40:40");
    }

    #[test]
    fn test_notation_deuce_and_advantage() {
        assert_eq!(points_to_tennis_notation(4, 3), "AD:40");
        assert_eq!(points_to_tennis_notation(3, 4), "40:AD");
        assert_eq!(points_to_tennis_notation(4, 4), "40:40");
        assert_eq!(points_to_tennis_notation(9, 8), "AD:40");
        assert_eq!(points_to_tennis_notation(10, 11), "40:AD");
    }

    #[test]
    #[should_panic(expected = "should have ended the game")]
    fn test_notation_finished_game_panics() {
        let _ = points_to_tennis_notation(6, 4);
    }

    #[test]
    fn test_summary_in_progress() {
        let mut state = MatchState::new("A", "B");
        state.past_sets.push_back(CompletedSet {
            player_scores: scores(6, 4),
            tiebreak_score: None,
        });
        state.cur_set_score = scores(2, 3);
        state.cur_game_score = scores(3, 1);

        assert_eq!(match_summary(&state, true), "6-4 2-3 40:15");
        assert_eq!(match_summary(&state, false), "A - B: 6-4 2-3 40:15");
        assert_eq!(format!("{}", state), "A - B: 6-4 2-3 40:15");
    }

    #[test]
    fn test_summary_single_spaced() {
        let state = MatchState::new("A", "B");

        assert_eq!(match_summary(&state, true), "0-0 0:0");
        assert_eq!(match_summary(&state, false), "A - B: 0-0 0:0");
    }

    #[test]
    fn test_summary_from_server_perspective() {
        let mut state = MatchState::new("A", "B");
        state.switch_server_and_returner();
        state.cur_set_score = scores(1, 0);
        state.cur_game_score = scores(0, 2);

        assert_eq!(match_summary(&state, false), "B - A: 0-1 30:0");
    }

    #[test]
    fn test_summary_in_tiebreak() {
        let mut state = MatchState::new("A", "B").with_tiebreak(true);
        state.cur_set_score = scores(6, 6);
        state.cur_game_score = scores(5, 4);

        assert_eq!(match_summary(&state, true), "6-6 5:4");
    }

    #[test]
    fn test_summary_finished_from_winner_perspective() {
        let mut state = MatchState::new("A", "B");
        state.past_sets.push_back(CompletedSet {
            player_scores: scores(6, 4),
            tiebreak_score: None,
        });
        state.past_sets.push_back(CompletedSet {
            player_scores: scores(6, 7),
            tiebreak_score: Some(scores(5, 7)),
        });
        state.past_sets.push_back(CompletedSet {
            player_scores: scores(3, 6),
            tiebreak_score: None,
        });
        state.past_sets.push_back(CompletedSet {
            player_scores: scores(4, 6),
            tiebreak_score: None,
        });
        state.sets_won = scores(1, 3);
        state.is_over = true;

        assert_eq!(match_summary(&state, true), "4-6 7-6(5) 6-3 6-4");
        assert_eq!(match_summary(&state, false), "B - A: 4-6 7-6(5) 6-3 6-4");
    }

    #[test]
    fn test_completed_set_display() {
        let set = CompletedSet {
            player_scores: scores(7, 6),
            tiebreak_score: Some(scores(10, 8)),
        };
        assert_eq!(format!("{}", set), "7-6(8)");
    }
}
