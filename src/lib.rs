//! # tennis-points
//!
//! A deterministic tennis match state engine driven by point outcomes.
//!
//! ## Design Principles
//!
//! 1. **Format-Agnostic Engine**: The engine knows points, games, sets and
//!    matches. When each of them ends, and who serves, is decided by a
//!    `MatchRules` implementation.
//!
//! 2. **Snapshots Are Values**: Every transition returns a new `MatchState`.
//!    A trajectory keeps one per point without aliasing.
//!
//! 3. **Configuration Over Globals**: Tournament formats are looked up in a
//!    `FormatTable` passed to whoever needs it.
//!
//! ## Architecture
//!
//! - **Two-symbol input**: the engine consumes `true` (server won the
//!   point) and `false` (returner won). Dataset codes are decoded first.
//!
//! - **Persistent Data Structures**: completed sets live in an `im-rs`
//!   vector, so cloning a snapshot is O(1) in match length.
//!
//! ## Modules
//!
//! - `core`: Players, match state, configuration, RNG
//! - `rules`: MatchRules trait, scoring building blocks, canonical formats
//! - `engine`: Point transitions, sequence processing, trajectories
//! - `format`: Score strings
//! - `dataset`: Point-code decoding, CSV loading, validation harness
//! - `simulate`: Random matches

pub mod core;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod format;
pub mod rules;
pub mod simulate;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CompletedSet, FormatTable, MatchState, PlayerId, PlayerMap, PointRng, ValidationConfig,
};

pub use crate::rules::{BestOf, FinalSetPolicy, FormatSpec, GameScoring, MatchRules, RuleSet};

pub use crate::engine::{
    advance_point, advance_service_game, advance_tiebreak, final_state, player_wins_game,
    player_wins_set, process_points, Trajectory,
};

pub use crate::format::{match_summary, points_to_tennis_notation};

pub use crate::dataset::{
    decode_point_code, load_records, process_match, validate_all, MatchRecord, ValidationReport,
};

pub use crate::error::{Error, Result};

pub use crate::simulate::simulate_match;
