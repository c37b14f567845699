use std::process::ExitCode;

use clap::Parser;
use prism_stats::{Discipline, SolveId, StatsSummary};
use serde::Serialize;

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::error::AppError;
use crate::history::{History, NewSolve};
use crate::query::{PuzzleFilter, SolveQuery};

mod cli;
mod config;
mod error;
mod history;
mod logging;
mod query;

/// Statistics as printed by `prism stats`
#[derive(Debug, Serialize)]
struct StatsReport {
    puzzle: Discipline,
    #[serde(flatten)]
    summary: StatsSummary,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::get(args.config)?;
    logging::init(&config.settings.log_filter)?;

    let path = args
        .history
        .unwrap_or_else(|| config.history_file().to_path_buf());
    let history = History::new(path);
    tracing::debug!(path = %history.path().display(), "using solve history");

    let discipline = |puzzle: Option<String>| {
        Discipline::from(puzzle.unwrap_or_else(|| config.settings.default_puzzle.clone()))
    };

    match args.command {
        Command::Stats { puzzle } => {
            let puzzle = discipline(puzzle);
            let solves = query::chronological(history.load()?, &puzzle);
            let summary = StatsSummary::try_calculate(&solves)?;

            print_json(&StatsReport { puzzle, summary })
        }
        Command::List {
            puzzle,
            penalty,
            sort_by,
            order,
        } => {
            let query = SolveQuery {
                puzzle: PuzzleFilter::from(puzzle.as_str()),
                penalty,
                sort_by,
                order,
            };
            print_json(&query.apply(history.load()?))
        }
        Command::Add {
            time,
            scramble,
            puzzle,
            penalty,
        } => {
            let solve = history.add(NewSolve {
                discipline: discipline(puzzle),
                raw_time: time,
                penalty,
                scramble,
            })?;
            print_json(&solve)
        }
        Command::Penalty { id, penalty } => {
            print_json(&history.set_penalty(&SolveId::from(id), penalty)?)
        }
        Command::Delete { id } => print_json(&history.delete(&SolveId::from(id))?),
        Command::Config => {
            println!("{}", config.render()?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use prism_stats::{EffectiveTime, Penalty, SolveAttempt};
    use web_time::{Duration, SystemTime};

    use super::*;

    #[test]
    fn test_stats_report_json() {
        let solves: Vec<SolveAttempt> = [10_000, 11_000, 9_000, 12_000, 10_500]
            .into_iter()
            .enumerate()
            .map(|(i, raw_time)| SolveAttempt {
                id: format!("solve-{i}").into(),
                discipline: "3x3".into(),
                raw_time,
                penalty: Penalty::None,
                recorded_at: SystemTime::UNIX_EPOCH + Duration::from_secs(i as u64),
                scramble: None,
            })
            .collect();

        let report = StatsReport {
            puzzle: "3x3".into(),
            summary: StatsSummary::calculate(&solves),
        };
        assert_eq!(report.summary.average5, Some(EffectiveTime::Time(10_500)));

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "puzzle": "3x3",
                "count": 5,
                "best": 9000,
                "average5": { "kind": "time", "millis": 10500 },
                "average12": null,
                "average100": null,
            })
        );
    }

    #[test]
    fn test_empty_stats_report_json() {
        let report = StatsReport {
            puzzle: "4x4".into(),
            summary: StatsSummary::default(),
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "puzzle": "4x4",
                "count": 0,
                "best": null,
                "average5": null,
                "average12": null,
                "average100": null,
            })
        );
    }
}
