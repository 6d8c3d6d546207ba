//! Score formatting.
//!
//! Renders match states in the score notation used by point-by-point
//! datasets, e.g. `6-4 3-6 7-6(5)` for a finished match or
//! `6-4 2-1 30:15` for one in progress.

pub mod score;

pub use score::{match_summary, points_to_tennis_notation};
