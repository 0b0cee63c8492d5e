use serde::*;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::StandingsError;
use crate::season::REGULATION_INNINGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    // Recorded tie, e.g. a suspended game that was never resumed. Counts as a no-decision.
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub innings: u32,
}

impl GameRecord {
    pub fn new(outcome: Outcome, innings: u32) -> Self {
        Self { outcome, innings }
    }
}

// Anything that can hand over the game log of one team-season.
// Fetches run on a thread pool, hence Sync.
pub trait GameLogProvider: Sync {
    fn game_log(&self, team: &str, year: u16) -> Result<Vec<GameRecord>, StandingsError>;
}

// One row of a schedule-and-record export. Only the two columns we care about are kept,
// everything else in the file (date, opponent, runs, attendance...) is ignored.
#[derive(Deserialize, Debug)]
struct RawGameRow {
    #[serde(rename = "W/L", default)]
    outcome: Option<String>,
    // Blank for regulation games in most exports. Float because dataframe dumps write "12.0".
    #[serde(rename = "Inn", default, deserialize_with = "deserialize_option_number_from_string")]
    innings: Option<f64>,
}

impl RawGameRow {
    fn into_game(self, team: &str, year: u16, row: usize) -> Result<GameRecord, StandingsError> {
        let format_error = |reason: String| StandingsError::DataFormat { team: team.to_string(), year, row, reason };

        let outcome = match self.outcome.as_deref().map(str::trim) {
            None | Some("") => return Err(format_error("missing W/L".to_string())),
            // Walk-offs show up as "W-wo" / "L-wo"
            Some(s) if s.starts_with('W') => Outcome::Win,
            Some(s) if s.starts_with('L') => Outcome::Loss,
            Some(s) if s.starts_with('T') => Outcome::Tie,
            Some(s) => return Err(format_error(format!("unrecognised W/L value {s:?}"))),
        };

        let innings = match self.innings {
            None => REGULATION_INNINGS,
            Some(inn) if inn.is_finite() && inn >= 0.0 && inn.fract() == 0.0 && inn <= u32::MAX as f64 => inn as u32,
            Some(inn) => return Err(format_error(format!("innings {inn} is not a whole number"))),
        };

        Ok(GameRecord::new(outcome, innings))
    }
}

// Reads game logs laid out as <data_dir>/<year>/<team>.csv, falling back to <team>.json
#[derive(Debug)]
pub struct FileGameLogProvider {
    pub data_dir: PathBuf,
}

impl FileGameLogProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    fn season_path(&self, team: &str, year: u16, extension: &str) -> PathBuf {
        self.data_dir.join(year.to_string()).join(format!("{team}.{extension}"))
    }
}

impl GameLogProvider for FileGameLogProvider {
    fn game_log(&self, team: &str, year: u16) -> Result<Vec<GameRecord>, StandingsError> {
        let csv_path  = self.season_path(team, year, "csv");
        let json_path = self.season_path(team, year, "json");

        let rows = if csv_path.is_file() {
            debug!(path = %csv_path.display(), "loading game log");
            let file = fs::File::open(&csv_path).map_err(|source| StandingsError::Io { path: csv_path.clone(), source })?;
            rows_from_csv(file, &csv_path, team, year)?
        } else if json_path.is_file() {
            debug!(path = %json_path.display(), "loading game log");
            let data = fs::read_to_string(&json_path).map_err(|source| StandingsError::Io { path: json_path.clone(), source })?;
            rows_from_json(&data, &json_path, team, year)?
        } else {
            return Err(StandingsError::ProviderFetch {
                team: team.to_string(),
                year,
                reason: format!("neither {} nor {} exists", csv_path.display(), json_path.display()),
            });
        };

        rows.into_iter()
            .enumerate()
            .map(|(idx, row)| row.into_game(team, year, idx + 1))
            .collect()
    }
}

fn rows_from_csv<R: Read>(rdr: R, path: &Path, team: &str, year: u16) -> Result<Vec<RawGameRow>, StandingsError> {
    let mut reader = csv::Reader::from_reader(rdr);

    // Without a W/L column every row would fail the same way, so say it once
    let headers = reader.headers().map_err(|source| StandingsError::Csv { path: path.to_path_buf(), source })?;
    if !headers.iter().any(|h| h == "W/L") {
        return Err(StandingsError::DataFormat { team: team.to_string(), year, row: 0, reason: "no W/L column".to_string() });
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let row: RawGameRow = result.map_err(|e| StandingsError::DataFormat {
            team: team.to_string(),
            year,
            row: idx + 1,
            reason: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

// Parsed in two steps so a bad row reports its row number instead of failing the whole document
fn rows_from_json(data: &str, path: &Path, team: &str, year: u16) -> Result<Vec<RawGameRow>, StandingsError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(data)
        .map_err(|source| StandingsError::Json { path: path.to_path_buf(), source })?;

    values.into_iter()
        .enumerate()
        .map(|(idx, value)| {
            serde_json::from_value(value).map_err(|e| StandingsError::DataFormat {
                team: team.to_string(),
                year,
                row: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}
