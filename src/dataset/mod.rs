//! Point-by-point datasets: decoding, loading and validation.
//!
//! The engine only consumes "server won" booleans. This module turns
//! dataset rows into those, picks the match format per tournament through
//! a `FormatTable`, and checks replayed final scores against the recorded
//! ones.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tennis_points::core::{FormatTable, ValidationConfig};
//! use tennis_points::dataset::{load_records_from_path, validate_all};
//!
//! let records = load_records_from_path(path, &ValidationConfig::default())?;
//! let report = validate_all(&records, &FormatTable::slam_defaults());
//!
//! for mismatch in &report.mismatches {
//!     println!("{}: {:?}", mismatch.record.tournament, mismatch.reason);
//! }
//! ```

pub mod decode;
pub mod harness;
pub mod loader;

pub use decode::{decode_point_code, RETURNER_WON, SERVER_WON};
pub use harness::{
    process_match, validate_against_score, validate_all, validate_record, Mismatch,
    MismatchReason, ValidationReport,
};
pub use loader::{
    clean_tournament_name, is_unusual_event, load_records, load_records_from_path, MatchRecord,
    UNUSUAL_EVENTS,
};
