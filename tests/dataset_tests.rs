//! Dataset pipeline integration tests: CSV rows through to validation.

use tennis_points::core::{FormatTable, ValidationConfig};
use tennis_points::dataset::{load_records, process_match, validate_all, MismatchReason};
use tennis_points::format::match_summary;
use tennis_points::rules::RuleSet;

const HEADER: &str = "pbp_id,date,tny_name,tour,draw,server1,server2,winner,pbp,score,adf_flag,wh_minutes";

/// First server wins the set 6-0, with aces and double faults mixed in.
fn bagel_set() -> String {
    vec!["SASA;DRRR"; 3].join(";")
        + ";"
        + &vec!["SSSS;RRRR"; 3].join(";")
}

/// Holds to 6-6, first server takes the tiebreak 7-0, then breaks and
/// holds through a 6-0 second set.
fn tiebreak_match() -> String {
    let first_set = vec!["SSSS"; 12].join(";") + ";S/RR/SS/RR";
    let second_set = vec!["RRRR;SSSS"; 6].join(";");
    format!("{}.{}", first_set, second_set)
}

fn row(id: usize, tournament: &str, point_code: &str, score: &str) -> String {
    format!("{},01 Jan 12,{},ATP,Main,Federer,Nadal,1,{},{},0,90", id, tournament, point_code, score)
}

fn dataset() -> String {
    let bagels = |sets: usize| vec![bagel_set(); sets].join(".");

    [
        HEADER.to_string(),
        row(1, "Doha.html", &bagels(2), "6-0 6-0"),
        row(2, "Queen's", &tiebreak_match(), "7-6(0) 6-0"),
        row(3, "MensUSOpen2013", &bagels(3), "6-0 6-0 6-0"),
        row(4, "DavisCupWorldGroup", &bagels(2), "6-0 6-0"),
        row(5, "Halle.", &bagels(2), "6-1 6-0"),
        row(6, "Rotterdam", "SSSS;SSSS", "0-2"),
    ]
    .join("\n")
}

#[test]
fn test_tiebreak_match_code() {
    let trajectory = process_match("Federer", "Nadal", &tiebreak_match(), &RuleSet::StandardBestOfThree).unwrap();

    let end = trajectory.final_state().unwrap();
    assert!(end.is_over);
    assert_eq!(match_summary(end, false), "Federer - Nadal: 7-6(0) 6-0");
    assert_eq!(trajectory.game_ending_points().len(), 25);
}

#[test]
fn test_dataset_validation() {
    let records = load_records(dataset().as_bytes(), &ValidationConfig::default()).unwrap();
    assert_eq!(records.len(), 5);

    let tournaments: Vec<_> = records.iter().map(|r| r.tournament.as_str()).collect();
    assert_eq!(tournaments, vec!["Doha", "Queens", "MensUSOpen", "Halle", "Rotterdam"]);

    let report = validate_all(&records, &FormatTable::slam_defaults());

    assert_eq!(report.total, 5);
    assert_eq!(report.matched(), 3);
    assert_eq!(report.score_mismatches(), 1);
    assert_eq!(report.unparseable(), 1);

    assert_eq!(report.mismatches[0].index, 3);
    assert_eq!(
        report.mismatches[0].reason,
        MismatchReason::ScoreMismatch { computed: "6-0 6-0".to_string() }
    );

    assert_eq!(report.mismatches[1].index, 4);
    assert!(matches!(report.mismatches[1].reason, MismatchReason::Unparseable(_)));
}

#[test]
fn test_format_table_decides_best_of() {
    let records = load_records(dataset().as_bytes(), &ValidationConfig::default()).unwrap();

    // Treating every event as best of three ends the US Open match early.
    let table = FormatTable::new(RuleSet::StandardBestOfThree);
    let report = validate_all(&records, &table);

    let us_open = report
        .mismatches
        .iter()
        .find(|m| m.record.tournament == "MensUSOpen")
        .unwrap();
    assert!(matches!(us_open.reason, MismatchReason::Unparseable(_)));
    assert!(us_open.final_state.is_none());
}

#[test]
fn test_format_table_from_json() {
    let json = r#"{ "entries": { "MensUSOpen": "us_open_men" } }"#;
    let table: FormatTable = serde_json::from_str(json).unwrap();

    let records = load_records(dataset().as_bytes(), &ValidationConfig::default()).unwrap();
    let report = validate_all(&records, &table);

    assert_eq!(report.matched(), 3);
}

#[test]
fn test_keep_unusual_events() {
    let config = ValidationConfig::default().keep_unusual_events();
    let records = load_records(dataset().as_bytes(), &config).unwrap();

    assert_eq!(records.len(), 6);

    let report = validate_all(&records, &FormatTable::slam_defaults());
    assert_eq!(report.matched(), 4);
}
