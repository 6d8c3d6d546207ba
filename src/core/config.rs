//! Configuration types.
//!
//! - `FormatTable`: tournament name → `RuleSet`, with a fallback format
//! - `ValidationConfig`: options for loading and validating a dataset
//!
//! Both are plain values passed to whoever needs them; nothing is global.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;

/// Tournament name to match format lookup.
///
/// Names not in the table use the `default` format.
///
/// ## Example
///
/// ```
/// use tennis_points::core::FormatTable;
/// use tennis_points::rules::RuleSet;
///
/// let table = FormatTable::slam_defaults();
///
/// assert_eq!(table.lookup("MensUSOpen"), RuleSet::UsOpenMen);
/// assert_eq!(table.lookup("Rotterdam"), RuleSet::StandardBestOfThree);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTable {
    /// Exact tournament names and their formats.
    #[serde(default)]
    pub entries: FxHashMap<String, RuleSet>,

    /// Format for any tournament not in `entries`.
    #[serde(default)]
    pub default: RuleSet,
}

impl FormatTable {
    /// Create an empty table that maps everything to `default`.
    pub fn new(default: RuleSet) -> Self {
        Self {
            entries: FxHashMap::default(),
            default,
        }
    }

    /// Grand slam singles events by their dataset names.
    ///
    /// Wimbledon, Roland Garros and the Australian Open without a final set
    /// tiebreak; the US Open with one. Everything else is best of three.
    pub fn slam_defaults() -> Self {
        Self::new(RuleSet::StandardBestOfThree)
            .with_entry("GentlemensWimbledonSingles", RuleSet::ClassicSlamMen)
            .with_entry("MensFrenchOpen", RuleSet::ClassicSlamMen)
            .with_entry("MensAustralianOpen", RuleSet::ClassicSlamMen)
            .with_entry("MensUSOpen", RuleSet::UsOpenMen)
            .with_entry("LadiesWimbledonSingles", RuleSet::ClassicSlamLadies)
            .with_entry("WomensFrenchOpen", RuleSet::ClassicSlamLadies)
            .with_entry("WomensAustralianOpen", RuleSet::ClassicSlamLadies)
            .with_entry("WomensUSOpen", RuleSet::UsOpenLadies)
    }

    /// Add or replace a tournament entry.
    #[must_use]
    pub fn with_entry(mut self, tournament: impl Into<String>, rules: RuleSet) -> Self {
        self.entries.insert(tournament.into(), rules);
        self
    }

    /// Format for a tournament name.
    #[must_use]
    pub fn lookup(&self, tournament: &str) -> RuleSet {
        self.entries.get(tournament).copied().unwrap_or(self.default)
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Options for dataset loading and validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Drop team and exhibition events (Davis Cup, Fed Cup, Hopman Cup,
    /// wildcard playoffs) while loading.
    pub discard_unusual_events: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            discard_unusual_events: true,
        }
    }
}

impl ValidationConfig {
    /// Keep every event, unusual or not.
    #[must_use]
    pub fn keep_unusual_events(mut self) -> Self {
        self.discard_unusual_events = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slam_defaults() {
        let table = FormatTable::slam_defaults();

        assert_eq!(table.len(), 8);
        assert_eq!(table.lookup("GentlemensWimbledonSingles"), RuleSet::ClassicSlamMen);
        assert_eq!(table.lookup("MensFrenchOpen"), RuleSet::ClassicSlamMen);
        assert_eq!(table.lookup("MensAustralianOpen"), RuleSet::ClassicSlamMen);
        assert_eq!(table.lookup("MensUSOpen"), RuleSet::UsOpenMen);
        assert_eq!(table.lookup("LadiesWimbledonSingles"), RuleSet::ClassicSlamLadies);
        assert_eq!(table.lookup("WomensFrenchOpen"), RuleSet::ClassicSlamLadies);
        assert_eq!(table.lookup("WomensAustralianOpen"), RuleSet::ClassicSlamLadies);
        assert_eq!(table.lookup("WomensUSOpen"), RuleSet::UsOpenLadies);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let table = FormatTable::slam_defaults();
        assert_eq!(table.lookup("Doha"), RuleSet::StandardBestOfThree);
        assert_eq!(table.lookup("mensusopen"), RuleSet::StandardBestOfThree);

        let table = FormatTable::new(RuleSet::UsOpenMen);
        assert!(table.is_empty());
        assert_eq!(table.lookup("anything"), RuleSet::UsOpenMen);
    }

    #[test]
    fn test_with_entry_replaces() {
        let table = FormatTable::slam_defaults().with_entry("MensUSOpen", RuleSet::ClassicSlamMen);
        assert_eq!(table.lookup("MensUSOpen"), RuleSet::ClassicSlamMen);
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_format_table_from_json() {
        let json = r#"{
            "entries": { "DavisCupFinal": "classic_slam_men" },
            "default": "us_open_ladies"
        }"#;
        let table: FormatTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.lookup("DavisCupFinal"), RuleSet::ClassicSlamMen);
        assert_eq!(table.lookup("Stuttgart"), RuleSet::UsOpenLadies);

        let empty: FormatTable = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FormatTable::default());
    }

    #[test]
    fn test_validation_config() {
        assert!(ValidationConfig::default().discard_unusual_events);
        assert!(!ValidationConfig::default().keep_unusual_events().discard_unusual_events);
    }
}
