//! Standard scoring building blocks.
//!
//! Every match format in this crate is assembled from these functions.
//! All of them work on raw counts and are pure.

use crate::core::PlayerId;

/// Games needed to win a set outright.
pub const GAMES_PER_SET: u32 = 6;

/// Points needed to win a service game.
pub const POINTS_PER_GAME: u32 = 4;

/// Points needed to win a standard tiebreak.
pub const POINTS_PER_TIEBREAK: u32 = 7;

/// Games in a set that ended 7-6.
const TIEBREAK_SET_GAMES: u32 = 2 * GAMES_PER_SET + 1;

/// Set won at six or more games with a two-game margin.
#[must_use]
pub fn set_win_condition_ad_set(games_won: u32, games_lost: u32) -> bool {
    let enough_games = games_won.max(games_lost) >= GAMES_PER_SET;
    let enough_margin = games_won.abs_diff(games_lost) >= 2;

    enough_games && enough_margin
}

/// Set won as an advantage set, or 7-6 after a tiebreak.
#[must_use]
pub fn set_win_condition_tb_set(games_won: u32, games_lost: u32) -> bool {
    set_win_condition_ad_set(games_won, games_lost) || games_won + games_lost == TIEBREAK_SET_GAMES
}

/// Tiebreak sets, except an advantage set when `is_final_set`.
#[must_use]
pub fn set_win_condition_ad_final_set(games_won: u32, games_lost: u32, is_final_set: bool) -> bool {
    if is_final_set {
        set_win_condition_ad_set(games_won, games_lost)
    } else {
        set_win_condition_tb_set(games_won, games_lost)
    }
}

/// Tiebreak at six games all, in any set.
#[must_use]
pub fn is_tiebreak_every_set(games_won: u32, games_lost: u32) -> bool {
    games_won == GAMES_PER_SET && games_lost == GAMES_PER_SET
}

/// Tiebreak at six games all, except in the final set.
#[must_use]
pub fn is_tiebreak_no_final_set(games_won: u32, games_lost: u32, is_final_set: bool) -> bool {
    !is_final_set && is_tiebreak_every_set(games_won, games_lost)
}

/// First to seven points with a two-point margin.
#[must_use]
pub fn tiebreak_over_standard(points_won: u32, points_lost: u32) -> bool {
    let enough_points = points_won.max(points_lost) >= POINTS_PER_TIEBREAK;
    let enough_margin = points_won.abs_diff(points_lost) >= 2;

    enough_points && enough_margin
}

/// Match over once either player holds the majority of `best_of` sets.
#[must_use]
pub fn match_over_best_of(sets_won: u32, sets_lost: u32, best_of: u32) -> bool {
    sets_won.max(sets_lost) == best_of / 2 + 1
}

/// Service game over at four points, with a two-point margin if `has_ad`.
#[must_use]
pub fn standard_service_game_over(points_won: u32, points_lost: u32, has_ad: bool) -> bool {
    let enough_points = points_won.max(points_lost) >= POINTS_PER_GAME;
    let enough_margin = points_won.abs_diff(points_lost) >= 2;

    if has_ad {
        enough_points && enough_margin
    } else {
        enough_points
    }
}

/// Roles at the start of a game: the first server serves the even games.
///
/// Always derived from the number of games played, never toggled.
#[must_use]
pub fn roles_at_game_start(
    total_games_played: u32,
    first_server: &PlayerId,
    first_returner: &PlayerId,
) -> (PlayerId, PlayerId) {
    if total_games_played % 2 == 1 {
        (first_returner.clone(), first_server.clone())
    } else {
        (first_server.clone(), first_returner.clone())
    }
}

/// Roles inside a tiebreak after `total_points` points.
///
/// The starting server serves point 0, then serve changes after every
/// two points: points 1-2 go to the other player, 3-4 back, and so on.
#[must_use]
pub fn tiebreak_roles_standard(
    total_points: u32,
    start_server: &PlayerId,
    start_returner: &PlayerId,
) -> (PlayerId, PlayerId) {
    match total_points % 4 {
        1 | 2 => (start_returner.clone(), start_server.clone()),
        _ => (start_server.clone(), start_returner.clone()),
    }
}
