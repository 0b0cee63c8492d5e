use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("no game log for {team} {year}: {reason}")]
    ProviderFetch { team: String, year: u16, reason: String },

    #[error("bad game record for {team} {year}, row {row}: {reason}")]
    DataFormat { team: String, year: u16, row: usize, reason: String },

    // Never returned, only logged. Rows for the team get blank league/division.
    #[error("team {0} has no league/division entry")]
    UnknownTeam(String),

    #[error("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("CSV error in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("JSON error in {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
}
