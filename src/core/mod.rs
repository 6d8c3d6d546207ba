//! Core types: players, match state, configuration, RNG.
//!
//! This module contains the data the engine works on. The rules that
//! decide how it changes live in `rules`, the transitions in `engine`.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{FormatTable, ValidationConfig};
pub use player::{PlayerId, PlayerMap};
pub use rng::PointRng;
pub use state::{CompletedSet, MatchState};
