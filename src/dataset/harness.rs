//! Validation harness: recompute every match and compare final scores.
//!
//! Matches are independent, so a batch is processed in parallel, one match
//! per rayon task. Report order follows input order.

use rayon::prelude::*;

use crate::core::{FormatTable, MatchState};
use crate::engine::{process_points, Trajectory};
use crate::error::Result;
use crate::format::match_summary;
use crate::rules::MatchRules;

use super::decode::decode_point_code;
use super::loader::MatchRecord;

/// Decode a point code and run the whole match.
///
/// Fails on identical player names as well as on bad point codes.
pub fn process_match<R: MatchRules + ?Sized>(
    first_server: &str,
    first_returner: &str,
    point_code: &str,
    rules: &R,
) -> Result<Trajectory> {
    let start = MatchState::try_new(first_server, first_returner)?;
    let points = decode_point_code(point_code)?;

    process_points(&points, &start, rules)
}

/// Whether a computed final state renders to the recorded score.
pub fn validate_against_score(final_state: &MatchState, recorded_score: &str) -> bool {
    match_summary(final_state, true) == recorded_score
}

/// Why a match failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MismatchReason {
    /// The point code could not be decoded or replayed.
    Unparseable(String),
    /// The match replayed, but to a different score.
    ScoreMismatch { computed: String },
}

/// A match that failed validation.
#[derive(Clone, Debug)]
pub struct Mismatch {
    /// Position of the record in the input.
    pub index: usize,

    /// The record itself.
    pub record: MatchRecord,

    /// Final replayed state. `None` if the match could not be replayed.
    pub final_state: Option<MatchState>,

    pub reason: MismatchReason,
}

/// Outcome of validating a batch.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// Matches checked.
    pub total: usize,

    /// Matches that failed, in input order.
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    /// Matches whose replayed score equals the recorded one.
    pub fn matched(&self) -> usize {
        self.total - self.mismatches.len()
    }

    /// Matches that could not be replayed at all.
    pub fn unparseable(&self) -> usize {
        self.mismatches
            .iter()
            .filter(|m| matches!(m.reason, MismatchReason::Unparseable(_)))
            .count()
    }

    /// Matches that replayed to a different score.
    pub fn score_mismatches(&self) -> usize {
        self.mismatches.len() - self.unparseable()
    }

    /// Check whether every match validated.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

fn unparseable(index: usize, record: &MatchRecord, reason: String) -> Mismatch {
    log::debug!("{:<32}{:<32}", "unparseable match", format!("#{} {}", index, reason));

    Mismatch {
        index,
        record: record.clone(),
        final_state: None,
        reason: MismatchReason::Unparseable(reason),
    }
}

/// Validate one record, returning the mismatch if it fails.
pub fn validate_record(index: usize, record: &MatchRecord, table: &FormatTable) -> Option<Mismatch> {
    let rules = table.lookup(&record.tournament);

    let trajectory = match process_match(&record.server1, &record.server2, &record.point_code, &rules) {
        Ok(trajectory) => trajectory,
        Err(err) => return Some(unparseable(index, record, err.to_string())),
    };

    let Some(final_state) = trajectory.into_states().pop() else {
        return Some(unparseable(index, record, "no points".to_string()));
    };

    if validate_against_score(&final_state, &record.recorded_score) {
        return None;
    }

    let computed = match_summary(&final_state, true);
    log::debug!(
        "{:<32}{:<32}",
        "score mismatch",
        format!("#{} computed {:?}, recorded {:?}", index, computed, record.recorded_score)
    );

    Some(Mismatch {
        index,
        record: record.clone(),
        final_state: Some(final_state),
        reason: MismatchReason::ScoreMismatch { computed },
    })
}

/// Validate every record against its recorded score.
pub fn validate_all(records: &[MatchRecord], table: &FormatTable) -> ValidationReport {
    let mismatches: Vec<Mismatch> = records
        .par_iter()
        .enumerate()
        .filter_map(|(index, record)| validate_record(index, record, table))
        .collect();

    let report = ValidationReport {
        total: records.len(),
        mismatches,
    };

    log::info!(
        "{:<32}{:<32}",
        "validated matches",
        format!(
            "{} ok, {} mismatched, {} unparseable",
            report.matched(),
            report.score_mismatches(),
            report.unparseable()
        )
    );

    report
}
