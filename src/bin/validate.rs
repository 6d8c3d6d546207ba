//! Validation CLI
//!
//! Replays every match in one or more point-by-point CSV files and compares
//! the computed final score with the recorded one.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tennis_points::core::{FormatTable, ValidationConfig};
use tennis_points::dataset::{load_records_from_path, validate_all, MismatchReason};
use tennis_points::format::match_summary;

#[derive(Parser)]
#[command(name = "validate")]
#[command(about = "Replay point-by-point matches and check recorded scores", long_about = None)]
struct Cli {
    /// Point-by-point CSV files
    #[arg(required = true)]
    csv: Vec<PathBuf>,

    /// JSON format table (tournament name to rule set); slam defaults if omitted
    #[arg(long)]
    formats: Option<PathBuf>,

    /// Keep team and exhibition events
    #[arg(long, default_value = "false")]
    keep_unusual: bool,

    /// Number of mismatches the data is known to contain
    #[arg(long)]
    expect_wrong: Option<usize>,

    /// Print the full state of every mismatched match
    #[arg(long, default_value = "false")]
    verbose: bool,
}

fn load_format_table(path: Option<&PathBuf>) -> Result<FormatTable> {
    let Some(path) = path else {
        return Ok(FormatTable::slam_defaults());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("reading format table {}", path.display()))?;
    let table: FormatTable = serde_json::from_str(&text)
        .with_context(|| format!("parsing format table {}", path.display()))?;

    log::info!("{:<32}{:<32}", "format table entries", table.len());
    Ok(table)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let table = load_format_table(cli.formats.as_ref())?;

    let mut config = ValidationConfig::default();
    if cli.keep_unusual {
        config = config.keep_unusual_events();
    }

    let mut total = 0usize;
    let mut wrong = 0usize;

    for path in &cli.csv {
        let records = load_records_from_path(path, &config)
            .with_context(|| format!("loading {}", path.display()))?;
        let report = validate_all(&records, &table);

        for mismatch in &report.mismatches {
            let record = &mismatch.record;
            match &mismatch.reason {
                MismatchReason::Unparseable(reason) => {
                    println!(
                        "{}:{} {} vs {} ({}): unparseable: {}",
                        path.display(),
                        mismatch.index,
                        record.server1,
                        record.server2,
                        record.tournament,
                        reason
                    );
                }
                MismatchReason::ScoreMismatch { computed } => {
                    println!(
                        "{}:{} {} vs {} ({}): computed {:?}, recorded {:?}",
                        path.display(),
                        mismatch.index,
                        record.server1,
                        record.server2,
                        record.tournament,
                        computed,
                        record.recorded_score
                    );
                }
            }

            if cli.verbose {
                if let Some(state) = &mismatch.final_state {
                    println!("    {}", match_summary(state, false));
                    println!("    {:?}", state);
                }
            }
        }

        total += report.total;
        wrong += report.mismatches.len();
    }

    println!("{} matches, {} wrong", total, wrong);

    if let Some(expected) = cli.expect_wrong {
        if wrong != expected {
            bail!("expected {} wrong matches, found {}", expected, wrong);
        }
    }

    Ok(())
}
