//! Command line front end.
//!
//! Collects a query from flags or interactive prompts, runs it against the
//! loaded data file and renders the result.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::config::FinderConfig;
use crate::domain::Train;
use crate::finder::{FindError, Query, TrainFinder};
use crate::loader::{LoadError, TrainRecord, load_trains};

/// Find the three best trains between two stations.
#[derive(Debug, Parser)]
#[command(name = "train-finder", version)]
pub struct Args {
    /// Train data file [default: $TRAIN_FINDER_DATA or data.json]
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Departure station id (prompted for when missing)
    #[arg(long, value_name = "ID")]
    pub from: Option<String>,

    /// Arrival station id (prompted for when missing)
    #[arg(long, value_name = "ID")]
    pub to: Option<String>,

    /// Ranking criteria: price, arrival-time or departure-time (prompted for when missing)
    #[arg(long, value_name = "NAME")]
    pub criteria: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Errors surfaced to the user by the command line tool.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The data file could not be loaded
    #[error("failed to read trains data: {0}")]
    Load(#[from] LoadError),

    /// The search failed
    #[error(transparent)]
    Find(#[from] FindError),

    /// Reading a prompt answer failed
    #[error("failed to read input: {0}")]
    Prompt(#[source] io::Error),

    /// Writing the result failed
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// Encoding the result as JSON failed
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Build the query from flags, asking on `input` for anything missing.
pub fn resolve_query<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> Result<Query, AppError> {
    let departure = answer(args.from.as_deref(), "Departure station: ", input, output)?;
    let arrival = answer(args.to.as_deref(), "Arrival station: ", input, output)?;
    let criteria = answer(
        args.criteria.as_deref(),
        "Criteria (price, arrival-time, departure-time): ",
        input,
        output,
    )?;

    Ok(Query::new(departure, arrival, criteria))
}

fn answer<R: BufRead, W: Write>(
    given: Option<&str>,
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String, AppError> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    write!(output, "{prompt}").map_err(AppError::Prompt)?;
    output.flush().map_err(AppError::Prompt)?;

    // End of input reads as an empty answer, which validation rejects.
    let mut line = String::new();
    input.read_line(&mut line).map_err(AppError::Prompt)?;
    Ok(line.trim().to_string())
}

/// Write trains one per line.
pub fn render_text<W: Write>(trains: &[Train], output: &mut W) -> Result<(), AppError> {
    for train in trains {
        writeln!(output, "{train}").map_err(AppError::Output)?;
    }
    Ok(())
}

/// Write trains as a JSON array using the data file's field names.
pub fn render_json<W: Write>(trains: &[Train], output: &mut W) -> Result<(), AppError> {
    let records: Vec<TrainRecord> = trains.iter().map(TrainRecord::from).collect();
    serde_json::to_writer_pretty(&mut *output, &records)?;
    writeln!(output).map_err(AppError::Output)
}

/// Run one search end to end.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    config: &FinderConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<Train>, AppError> {
    let query = resolve_query(args, input, output)?;
    debug!(?query, "Resolved query");

    let trains = load_trains(&config.data_path)?;
    info!(
        path = %config.data_path.display(),
        trains = trains.len(),
        "Searching trains"
    );

    let best = TrainFinder::new(&trains).find(&query)?;

    if args.json {
        render_json(&best, output)?;
    } else {
        render_text(&best, output)?;
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    const DATA: &str = r#"[
        {"TrainID": 1, "DepartureStationID": 1902, "ArrivalStationID": 1929,
         "Price": 10.0, "ArrivalTime": "08:00:00", "DepartureTime": "07:00:00"},
        {"TrainID": 2, "DepartureStationID": 1902, "ArrivalStationID": 1929,
         "Price": 5.0, "ArrivalTime": "09:00:00", "DepartureTime": "07:30:00"},
        {"TrainID": 3, "DepartureStationID": 1902, "ArrivalStationID": 1929,
         "Price": 7.0, "ArrivalTime": "07:30:00", "DepartureTime": "06:45:00"},
        {"TrainID": 4, "DepartureStationID": 1929, "ArrivalStationID": 1902,
         "Price": 1.0, "ArrivalTime": "05:00:00", "DepartureTime": "04:00:00"}
    ]"#;

    fn args(list: &[&str]) -> Args {
        Args::parse_from(std::iter::once("train-finder").chain(list.iter().copied()))
    }

    fn ids(trains: &[Train]) -> Vec<i64> {
        trains.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn parse_flags() {
        let a = args(&[
            "--data", "x.json", "--from", "1902", "--to", "1929", "--criteria", "price", "--json",
        ]);
        assert_eq!(a.data, Some(PathBuf::from("x.json")));
        assert_eq!(a.from.as_deref(), Some("1902"));
        assert_eq!(a.to.as_deref(), Some("1929"));
        assert_eq!(a.criteria.as_deref(), Some("price"));
        assert!(a.json);
    }

    #[test]
    fn flags_skip_prompts() {
        let a = args(&["--from", "1902", "--to", "1929", "--criteria", "price"]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let query = resolve_query(&a, &mut input, &mut output).unwrap();
        assert_eq!(query, Query::new("1902", "1929", "price"));
        assert!(output.is_empty());
    }

    #[test]
    fn prompts_for_missing_values() {
        let a = args(&["--to", "1929"]);
        let mut input = Cursor::new(" 1902 \narrival-time\r\n");
        let mut output = Vec::new();

        let query = resolve_query(&a, &mut input, &mut output).unwrap();
        assert_eq!(query, Query::new("1902", "1929", "arrival-time"));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Departure station: "));
        assert!(shown.contains("Criteria"));
        assert!(!shown.contains("Arrival station"));
    }

    #[test]
    fn end_of_input_is_empty_answer() {
        let a = args(&[]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let query = resolve_query(&a, &mut input, &mut output).unwrap();
        assert_eq!(query, Query::new("", "", ""));
    }

    #[test]
    fn run_prints_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let a = args(&["--from", "1902", "--to", "1929", "--criteria", "price"]);
        let config = FinderConfig::default().with_data_path(&path);
        let mut output = Vec::new();

        let best = run(&a, &config, &mut Cursor::new(""), &mut output).unwrap();
        assert_eq!(ids(&best), [2, 3, 1]);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("train 2:"));
        assert!(lines[2].starts_with("train 1:"));
    }

    #[test]
    fn run_prints_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let a = args(&[
            "--from", "1902", "--to", "1929", "--criteria", "departure-time", "--json",
        ]);
        let config = FinderConfig::default().with_data_path(&path);
        let mut output = Vec::new();

        run(&a, &config, &mut Cursor::new(""), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let ids: Vec<i64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["TrainID"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(value[0]["DepartureTime"], "06:45:00");
    }

    #[test]
    fn run_propagates_load_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let a = args(&["--from", "1902", "--to", "1929", "--criteria", "price"]);
        let config = FinderConfig::default().with_data_path(&path);
        let mut output = Vec::new();

        let err = run(&a, &config, &mut Cursor::new(""), &mut output).unwrap_err();
        assert!(matches!(err, AppError::Load(LoadError::Io { .. })));
        assert!(err.to_string().starts_with("failed to read trains data"));
        assert!(output.is_empty());
    }

    #[test]
    fn run_reports_find_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let a = args(&["--from", "1929", "--to", "1902", "--criteria", "price"]);
        let config = FinderConfig::default().with_data_path(&path);
        let mut output = Vec::new();

        let err = run(&a, &config, &mut Cursor::new(""), &mut output).unwrap_err();
        assert!(matches!(
            err,
            AppError::Find(FindError::InsufficientResults { found: 1 })
        ));
        assert_eq!(err.to_string(), "not enough best trains: found 1, need 3");
    }
}
