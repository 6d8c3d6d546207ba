//! Error types.
//!
//! Only errors a caller can act on live here. Broken invariants (an unknown
//! player key, a post-deuce score difference above one) are bugs in the
//! engine or in a `MatchRules` implementation and panic instead.

use thiserror::Error;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A point was supplied after the match was already over.
    #[error("Point {point_index} supplied after the match ended ({remaining} points left over)")]
    InvalidPointSequence { point_index: usize, remaining: usize },

    /// A point code did not reduce to exactly the symbols `S` and `R`.
    #[error("Point code does not reduce to server/returner symbols: found {symbols:?}")]
    AmbiguousPointCode { symbols: String },

    /// Both sides of a match carry the same player identity.
    #[error("Server and returner are the same player: {name:?}")]
    IdenticalPlayers { name: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl Error {
    /// Whether a batch can carry on past this error.
    ///
    /// Bad point data spoils one match, not the whole batch.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidPointSequence { .. } => true,
            Error::AmbiguousPointCode { .. } => true,
            Error::IdenticalPlayers { .. } => true,
            Error::Csv(_) => false,
            Error::Io(_) => false,
            Error::Encoding(_) => false,
        }
    }
}
