use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StandingsError;
use crate::standings::{AdjustedStanding, AnalysisRow, OriginalStanding};

pub const ORIGINAL_STANDINGS_FILE: &str = "Original_Standings.csv";
pub const NEW_STANDINGS_FILE: &str = "New_Standings.csv";
pub const ANALYSIS_FILE: &str = "No_ExtraInn_Analysis.csv";

const ORIGINAL_HEADER: [&str; 7] = ["Year", "League", "Division", "Team", "Wins", "Losses", "Pct"];
const NEW_HEADER: [&str; 8] = ["Year", "League", "Division", "Team", "Wins", "Losses", "Ties", "Pct"];
const ANALYSIS_HEADER: [&str; 6] = ["Year", "Team", "orig_pct", "new_pct", "delta_pct", "inn_elim"];

// Writes the three tables into `dir`, replacing any previous run. Returns the paths written.
pub fn export_tables(
    dir: &Path,
    original: &[OriginalStanding],
    adjusted: &[AdjustedStanding],
    analysis: &[AnalysisRow],
) -> Result<Vec<PathBuf>, StandingsError> {
    fs::create_dir_all(dir).map_err(|source| StandingsError::Io { path: dir.to_path_buf(), source })?;

    let paths = vec![
        dir.join(ORIGINAL_STANDINGS_FILE),
        dir.join(NEW_STANDINGS_FILE),
        dir.join(ANALYSIS_FILE),
    ];

    write_table(&paths[0], &ORIGINAL_HEADER, original)?;
    write_table(&paths[1], &NEW_HEADER, adjusted)?;
    write_table(&paths[2], &ANALYSIS_HEADER, analysis)?;

    for path in &paths {
        info!(path = %path.display(), "exported");
    }
    Ok(paths)
}

// The header goes out on its own so even an empty table gets one
fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), StandingsError> {
    let csv_error = |source| StandingsError::Csv { path: path.to_path_buf(), source };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;

    writer.write_record(header).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| StandingsError::Io { path: path.to_path_buf(), source })
}
