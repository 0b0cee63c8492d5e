mod analysis;
mod data_loader;
mod error;
mod export;
mod ranking;
mod report;
mod season;
mod standings;
mod standings_context;

use std::path::PathBuf;

use tracing::info;

use analysis::*;
use data_loader::*;
use error::StandingsError;
use export::*;
use ranking::*;
use report::*;
use standings::*;
use standings_context::*;

/*
    Game logs are expected under data/<year>/<team>.csv (or .json), one row per game, with at least
    the W/L and Inn columns of a schedule-and-record export. Adjust the run with StandingsContext.
*/

fn main() -> Result<(), StandingsError> {
    init_logging();

    let standings_context = StandingsContext::default();
    let provider = FileGameLogProvider::new(&standings_context.data_dir);

    let output = run(&standings_context, &provider)?;

    output_report(&output.ranked, &output.summary, &output.tables.failures);
    for path in &output.exported {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();
}

pub struct RunOutput {
    pub tables: StandingsTables,
    pub ranked: RankedStandings,
    pub summary: AnalysisSummary,
    pub exported: Vec<PathBuf>,
}

// Nothing is written unless every team-season made it through (or was skipped by policy)
pub fn run<P: GameLogProvider>(standings_context: &StandingsContext, provider: &P) -> Result<RunOutput, StandingsError> {
    let tables = compute_adjusted_standings(standings_context, provider)?;
    let ranked = RankedStandings::new(&tables, standings_context.playoff_spots);

    // Standings go out in full league order, the analysis table in enumeration order
    let exported = export_tables(
        &standings_context.output_dir,
        &ranked.original_league,
        &ranked.adjusted_league,
        &tables.analysis,
    )?;

    let summary = summarize(&tables.analysis, &ranked, standings_context.summary_size);
    info!(
        team_seasons = tables.analysis.len(),
        skipped = tables.failures.len(),
        ties = summary.ties_by_year.values().sum::<u32>(),
        innings_eliminated = summary.innings_by_year.values().sum::<u32>(),
        "done"
    );

    Ok(RunOutput { tables, ranked, summary, exported })
}
