//! Match formats.
//!
//! - `FormatSpec`: a format assembled from three choices (best-of, final set
//!   policy, game scoring). Use it for formats outside the canonical five.
//! - `RuleSet`: the five canonical tournament formats. A closed enum, so
//!   adding a variant forces every match over it to be revisited.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::match_rules::MatchRules;
use super::standard;

/// Number of sets in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BestOf {
    Three,
    Five,
}

impl BestOf {
    /// Total number of sets that can be played.
    #[must_use]
    pub const fn sets(self) -> u32 {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
        }
    }

    /// Sets needed to win the match.
    #[must_use]
    pub const fn sets_to_win(self) -> u32 {
        self.sets() / 2 + 1
    }
}

/// How the deciding set is played at six games all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalSetPolicy {
    /// Tiebreak at 6-6, like every other set.
    Tiebreak,
    /// No tiebreak; play on until a two-game margin.
    Advantage,
}

/// How a service game is won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameScoring {
    /// Deuce and advantage: four points with a two-point margin.
    Advantage,
    /// Deciding point at deuce: first to four points.
    NoAdvantage,
}

/// A match format assembled from standard building blocks.
///
/// Sets before the deciding one always have a tiebreak at 6-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Number of sets.
    pub best_of: BestOf,

    /// Deciding set policy.
    pub final_set: FinalSetPolicy,

    /// Service game scoring.
    pub scoring: GameScoring,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            best_of: BestOf::Three,
            final_set: FinalSetPolicy::Tiebreak,
            scoring: GameScoring::Advantage,
        }
    }
}

impl FormatSpec {
    /// Create a format with tiebreaks in every set and advantage games.
    pub fn new(best_of: BestOf) -> Self {
        Self {
            best_of,
            ..Self::default()
        }
    }

    /// Set the deciding set policy.
    #[must_use]
    pub fn with_final_set(mut self, final_set: FinalSetPolicy) -> Self {
        self.final_set = final_set;
        self
    }

    /// Set the service game scoring.
    #[must_use]
    pub fn with_scoring(mut self, scoring: GameScoring) -> Self {
        self.scoring = scoring;
        self
    }
}

impl MatchRules for FormatSpec {
    fn set_win_condition(&self, games_won: u32, games_lost: u32, is_final_set: bool) -> bool {
        match self.final_set {
            FinalSetPolicy::Advantage => {
                standard::set_win_condition_ad_final_set(games_won, games_lost, is_final_set)
            }
            FinalSetPolicy::Tiebreak => standard::set_win_condition_tb_set(games_won, games_lost),
        }
    }

    fn is_tiebreak(&self, games_won: u32, games_lost: u32, is_final_set: bool) -> bool {
        match self.final_set {
            FinalSetPolicy::Advantage => {
                standard::is_tiebreak_no_final_set(games_won, games_lost, is_final_set)
            }
            FinalSetPolicy::Tiebreak => standard::is_tiebreak_every_set(games_won, games_lost),
        }
    }

    fn tiebreak_over(&self, points_won: u32, points_lost: u32, _is_final_set: bool) -> bool {
        standard::tiebreak_over_standard(points_won, points_lost)
    }

    fn match_over(&self, sets_won: u32, sets_lost: u32) -> bool {
        standard::match_over_best_of(sets_won, sets_lost, self.best_of.sets())
    }

    fn service_game_over(&self, points_won: u32, points_lost: u32) -> bool {
        let has_ad = self.scoring == GameScoring::Advantage;
        standard::standard_service_game_over(points_won, points_lost, has_ad)
    }

    fn is_final_set(&self, set_num: u32) -> bool {
        set_num + 1 == self.best_of.sets()
    }
}

/// The canonical tournament formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Best of five, no tiebreak in the fifth set.
    ClassicSlamMen,
    /// Best of five, tiebreak in every set.
    UsOpenMen,
    /// Best of three, no tiebreak in the third set.
    ClassicSlamLadies,
    /// Best of three, tiebreak in every set.
    UsOpenLadies,
    /// Best of three, tiebreak in every set. Most tour events.
    #[default]
    StandardBestOfThree,
}

impl RuleSet {
    /// All canonical formats.
    pub const ALL: [RuleSet; 5] = [
        RuleSet::ClassicSlamMen,
        RuleSet::UsOpenMen,
        RuleSet::ClassicSlamLadies,
        RuleSet::UsOpenLadies,
        RuleSet::StandardBestOfThree,
    ];

    /// The building blocks of this format.
    #[must_use]
    pub fn spec(self) -> FormatSpec {
        match self {
            RuleSet::ClassicSlamMen => {
                FormatSpec::new(BestOf::Five).with_final_set(FinalSetPolicy::Advantage)
            }
            RuleSet::UsOpenMen => FormatSpec::new(BestOf::Five),
            RuleSet::ClassicSlamLadies => {
                FormatSpec::new(BestOf::Three).with_final_set(FinalSetPolicy::Advantage)
            }
            RuleSet::UsOpenLadies => FormatSpec::new(BestOf::Three),
            RuleSet::StandardBestOfThree => FormatSpec::new(BestOf::Three),
        }
    }

    /// Snake-case name, as used in format tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleSet::ClassicSlamMen => "classic_slam_men",
            RuleSet::UsOpenMen => "us_open_men",
            RuleSet::ClassicSlamLadies => "classic_slam_ladies",
            RuleSet::UsOpenLadies => "us_open_ladies",
            RuleSet::StandardBestOfThree => "standard_best_of_three",
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown rule set name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown rule set: {0}")]
pub struct UnknownRuleSet(pub String);

impl FromStr for RuleSet {
    type Err = UnknownRuleSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleSet::ALL
            .into_iter()
            .find(|rules| rules.name() == s)
            .ok_or_else(|| UnknownRuleSet(s.to_string()))
    }
}

impl MatchRules for RuleSet {
    fn set_win_condition(&self, games_won: u32, games_lost: u32, is_final_set: bool) -> bool {
        self.spec().set_win_condition(games_won, games_lost, is_final_set)
    }

    fn is_tiebreak(&self, games_won: u32, games_lost: u32, is_final_set: bool) -> bool {
        self.spec().is_tiebreak(games_won, games_lost, is_final_set)
    }

    fn tiebreak_over(&self, points_won: u32, points_lost: u32, is_final_set: bool) -> bool {
        self.spec().tiebreak_over(points_won, points_lost, is_final_set)
    }

    fn match_over(&self, sets_won: u32, sets_lost: u32) -> bool {
        self.spec().match_over(sets_won, sets_lost)
    }

    fn service_game_over(&self, points_won: u32, points_lost: u32) -> bool {
        self.spec().service_game_over(points_won, points_lost)
    }

    fn is_final_set(&self, set_num: u32) -> bool {
        self.spec().is_final_set(set_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_of() {
        assert_eq!(BestOf::Three.sets(), 3);
        assert_eq!(BestOf::Three.sets_to_win(), 2);
        assert_eq!(BestOf::Five.sets(), 5);
        assert_eq!(BestOf::Five.sets_to_win(), 3);
    }

    #[test]
    fn test_classic_slam_men() {
        let rules = RuleSet::ClassicSlamMen;

        assert!(!rules.is_final_set(3));
        assert!(rules.is_final_set(4));

        assert!(rules.is_tiebreak(6, 6, false));
        assert!(!rules.is_tiebreak(6, 6, true));

        assert!(rules.set_win_condition(7, 6, false));
        assert!(!rules.set_win_condition(7, 6, true));
        assert!(rules.set_win_condition(10, 8, true));

        assert!(!rules.match_over(2, 2));
        assert!(rules.match_over(3, 1));
    }

    #[test]
    fn test_us_open_men() {
        let rules = RuleSet::UsOpenMen;

        assert!(rules.is_final_set(4));
        assert!(rules.is_tiebreak(6, 6, true));
        assert!(rules.set_win_condition(7, 6, true));
        assert!(!rules.match_over(2, 0));
        assert!(rules.match_over(3, 0));
    }

    #[test]
    fn test_ladies_formats() {
        assert!(RuleSet::ClassicSlamLadies.is_final_set(2));
        assert!(!RuleSet::ClassicSlamLadies.is_tiebreak(6, 6, true));
        assert!(RuleSet::UsOpenLadies.is_tiebreak(6, 6, true));
        assert!(RuleSet::ClassicSlamLadies.match_over(2, 1));
        assert!(RuleSet::UsOpenLadies.match_over(0, 2));
    }

    #[test]
    fn test_standard_best_of_three() {
        let rules = RuleSet::StandardBestOfThree;

        assert!(rules.is_final_set(2));
        assert!(rules.is_tiebreak(6, 6, true));
        assert!(rules.tiebreak_over(7, 5, true));
        assert!(!rules.tiebreak_over(7, 6, false));
        assert!(rules.service_game_over(4, 2));
        assert!(!rules.service_game_over(4, 3));
    }

    #[test]
    fn test_no_advantage_spec() {
        let rules = FormatSpec::new(BestOf::Three).with_scoring(GameScoring::NoAdvantage);

        assert!(rules.service_game_over(4, 3));
        assert!(rules.service_game_over(3, 4));
        assert!(!rules.service_game_over(3, 3));
    }

    #[test]
    fn test_rule_set_names() {
        for rules in RuleSet::ALL {
            assert_eq!(rules.name().parse::<RuleSet>(), Ok(rules));
            assert_eq!(format!("{}", rules), rules.name());
        }

        assert_eq!(
            "wimbledon".parse::<RuleSet>(),
            Err(UnknownRuleSet("wimbledon".to_string()))
        );
        assert_eq!(RuleSet::default(), RuleSet::StandardBestOfThree);
    }

    #[test]
    fn test_rule_set_serde_name() {
        let json = serde_json::to_string(&RuleSet::UsOpenLadies).unwrap();
        assert_eq!(json, "\"us_open_ladies\"");

        let parsed: RuleSet = serde_json::from_str("\"classic_slam_men\"").unwrap();
        assert_eq!(parsed, RuleSet::ClassicSlamMen);
    }
}
