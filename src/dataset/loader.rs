//! Dataset loader for point-by-point match CSVs.
//!
//! Expected columns (others are ignored):
//! - `tny_name`: tournament name
//! - `server1`, `server2`: first server and first returner
//! - `pbp`: point code string
//! - `score`: recorded final score
//! - `date` (optional)

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ValidationConfig;
use crate::error::Result;

/// Team and exhibition events, which do not follow tour formats.
pub const UNUSUAL_EVENTS: [&str; 5] = [
    "DavisCup",
    "Hopman",
    "WildcardPlayoff",
    "WildCardPlayoff",
    "FedCup",
];

/// One match row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Tournament name, cleaned on load.
    #[serde(rename = "tny_name")]
    pub tournament: String,

    /// Server of the first point.
    pub server1: String,

    /// Returner of the first point.
    pub server2: String,

    /// Point code string.
    #[serde(rename = "pbp")]
    pub point_code: String,

    /// Final score as recorded by the dataset.
    #[serde(rename = "score")]
    pub recorded_score: String,

    #[serde(default)]
    pub date: Option<String>,
}

/// Normalize a tournament name as found in dataset exports.
///
/// Drops an `.html` suffix, a trailing `.`, apostrophes and a stray `2013`.
///
/// ```
/// use tennis_points::dataset::clean_tournament_name;
///
/// assert_eq!(clean_tournament_name("Queen's.html"), "Queens");
/// assert_eq!(clean_tournament_name("MensUSOpen2013"), "MensUSOpen");
/// ```
pub fn clean_tournament_name(name: &str) -> String {
    let mut cleaned = name.replace(".html", "");
    if cleaned.ends_with('.') {
        cleaned.pop();
    }

    cleaned.replace('\'', "").replace("2013", "")
}

/// Whether a (cleaned) tournament name is a team or exhibition event.
pub fn is_unusual_event(tournament: &str) -> bool {
    UNUSUAL_EVENTS.iter().any(|event| tournament.contains(event))
}

/// Load match rows from CSV data.
pub fn load_records<R: Read>(reader: R, config: &ValidationConfig) -> Result<Vec<MatchRecord>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut records = Vec::new();
    let mut discarded = 0usize;

    for row in reader.deserialize::<MatchRecord>() {
        let mut record = row?;
        record.tournament = clean_tournament_name(&record.tournament);

        if config.discard_unusual_events && is_unusual_event(&record.tournament) {
            discarded += 1;
            continue;
        }

        records.push(record);
    }

    log::debug!("{:<32}{:<32}", "discarded unusual events", discarded);
    log::info!("{:<32}{:<32}", "loaded matches", records.len());

    Ok(records)
}

/// Load match rows from a CSV file.
pub fn load_records_from_path(path: &Path, config: &ValidationConfig) -> Result<Vec<MatchRecord>> {
    log::info!("{:<32}{:<32}", "loading matches", path.display());
    let file = File::open(path)?;
    load_records(file, config)
}
