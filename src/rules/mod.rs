//! Match rules: the decisions that differ between tournament formats.
//!
//! - `MatchRules`: the trait the transition engine calls into
//! - `standard`: scoring building blocks shared by every format
//! - `FormatSpec`: a format assembled from those blocks
//! - `RuleSet`: the five canonical tournament formats

pub mod match_rules;
pub mod standard;
pub mod variants;

pub use match_rules::MatchRules;
pub use variants::{BestOf, FinalSetPolicy, FormatSpec, GameScoring, RuleSet, UnknownRuleSet};
