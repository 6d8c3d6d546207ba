//! Match rules trait for format implementations.
//!
//! A format is eight pure decisions:
//! - When a set, tiebreak, service game or match is over
//! - When the next game is a tiebreak, and which set is the final one
//! - Who serves at the start of a game and inside a tiebreak
//!
//! The transition engine calls into `MatchRules` but never interprets
//! format-specific concepts directly.

use crate::core::PlayerId;

use super::standard;

/// Match rules trait.
///
/// ## Implementation Notes
///
/// - Every method must be total and side-effect free: the engine calls them
///   freely and relies on identical answers for identical inputs.
/// - Counts are from the perspective of the first argument ("won") against
///   the second ("lost").
/// - The role methods have standard default implementations.
pub trait MatchRules {
    /// Whether a set at `games_won`-`games_lost` is over.
    fn set_win_condition(&self, games_won: u32, games_lost: u32, is_final_set: bool) -> bool;

    /// Whether the next game at `games_won`-`games_lost` is a tiebreak.
    fn is_tiebreak(&self, games_won: u32, games_lost: u32, is_final_set: bool) -> bool;

    /// Whether a tiebreak at `points_won`-`points_lost` is over.
    fn tiebreak_over(&self, points_won: u32, points_lost: u32, is_final_set: bool) -> bool;

    /// Whether a match at `sets_won`-`sets_lost` is over.
    fn match_over(&self, sets_won: u32, sets_lost: u32) -> bool;

    /// Whether a service game at `points_won`-`points_lost` is over.
    fn service_game_over(&self, points_won: u32, points_lost: u32) -> bool;

    /// Whether the set at zero-based `set_num` is the deciding set.
    fn is_final_set(&self, set_num: u32) -> bool;

    /// `(server, returner)` at the start of the game after `total_games_played` games.
    fn roles_at_game_start(
        &self,
        total_games_played: u32,
        first_server: &PlayerId,
        first_returner: &PlayerId,
    ) -> (PlayerId, PlayerId) {
        standard::roles_at_game_start(total_games_played, first_server, first_returner)
    }

    /// `(server, returner)` in a tiebreak after `total_points` points.
    fn tiebreak_roles(
        &self,
        total_points: u32,
        start_server: &PlayerId,
        start_returner: &PlayerId,
    ) -> (PlayerId, PlayerId) {
        standard::tiebreak_roles_standard(total_points, start_server, start_returner)
    }
}
