//! Match engine: point transitions and sequence processing.
//!
//! - `transition`: advance a `MatchState` by one point, cascading through
//!   game, set and match completion
//! - `sequence`: apply an ordered point sequence
//! - `trajectory`: the snapshots a sequence produces

pub mod sequence;
pub mod trajectory;
pub mod transition;

pub use sequence::{final_state, process_points};
pub use trajectory::Trajectory;
pub use transition::{
    advance_point, advance_service_game, advance_tiebreak, player_wins_game, player_wins_set,
    point_winner_loser,
};
