use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::data_loader::GameLogProvider;
use crate::error::StandingsError;
use crate::ranking::Standing;
use crate::season::SeasonTally;
use crate::standings_context::{FailurePolicy, StandingsContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginalStanding {
    pub year: u16,
    pub league: String,
    pub division: String,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedStanding {
    pub year: u16,
    pub league: String,
    pub division: String,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    pub year: u16,
    pub team: String,
    pub orig_pct: f64,
    pub new_pct: f64,
    pub delta_pct: f64,
    pub inn_elim: u32,
    #[serde(skip)]
    pub ties: u32,
}

// The three result tables, rows in enumeration order (team-major, year-minor)
#[derive(Debug, Default)]
pub struct StandingsTables {
    pub original: Vec<OriginalStanding>,
    pub adjusted: Vec<AdjustedStanding>,
    pub analysis: Vec<AnalysisRow>,
    // Only filled under FailurePolicy::Skip
    pub failures: Vec<StandingsError>,
}

#[derive(Debug)]
struct TeamSeason {
    team: String,
    year: u16,
    tally: SeasonTally,
}

/// Fetches and classifies every team-season named by the context, then builds the original,
/// adjusted and analysis tables in one go.
///
/// Fetches run in parallel but rows always come out in the context's enumeration order. Under
/// `FailurePolicy::Abort` the first failing team-season (in that order) is returned as the error.
pub fn compute_adjusted_standings<P: GameLogProvider>(
    context: &StandingsContext,
    provider: &P,
) -> Result<StandingsTables, StandingsError> {
    let pairs = context.team_seasons();
    info!(team_seasons = pairs.len(), "fetching game logs");

    let results: Vec<Result<TeamSeason, StandingsError>> = pairs
        .par_iter()
        .map(|&(team, year)| -> Result<TeamSeason, StandingsError> {
            let games = provider.game_log(team, year)?;
            let tally = SeasonTally::classify(&games);
            debug!(team, year, games = games.len(), ties = tally.adjusted_ties, inn_elim = tally.innings_eliminated, "classified");
            Ok(TeamSeason { team: team.to_string(), year, tally })
        })
        .collect();

    let mut seasons = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(season) => seasons.push(season),
            Err(err) => match context.failure_policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => {
                    warn!(error = %err, "skipping team-season");
                    failures.push(err);
                }
            },
        }
    }

    let mut tables = build_tables(&seasons, context);
    tables.failures = failures;
    Ok(tables)
}

fn build_tables(seasons: &[TeamSeason], context: &StandingsContext) -> StandingsTables {
    let mut original = Vec::with_capacity(seasons.len());
    let mut adjusted = Vec::with_capacity(seasons.len());
    let mut analysis = Vec::with_capacity(seasons.len());
    let mut reported_unknown: HashSet<&str> = HashSet::new();

    for s in seasons {
        let (league, division) = match context.lookup(&s.team) {
            Some(info) => (info.league.code().to_string(), info.division.code().to_string()),
            None => {
                if reported_unknown.insert(&s.team) {
                    warn!("{}", StandingsError::UnknownTeam(s.team.clone()));
                }
                (String::new(), String::new())
            }
        };

        if s.tally.no_decisions > 0 {
            warn!(team = %s.team, year = s.year, games = s.tally.no_decisions, "recorded ties left out of both standings");
        }

        let denominator  = context.denominator_for(s.tally.games_played());
        let original_pct = s.tally.original_pct(denominator);
        let adjusted_pct = s.tally.adjusted_pct(denominator);

        original.push(OriginalStanding {
            year: s.year,
            league: league.clone(),
            division: division.clone(),
            team: s.team.clone(),
            wins: s.tally.original_wins,
            losses: s.tally.original_losses,
            pct: original_pct,
        });

        adjusted.push(AdjustedStanding {
            year: s.year,
            league,
            division,
            team: s.team.clone(),
            wins: s.tally.adjusted_wins,
            losses: s.tally.adjusted_losses,
            ties: s.tally.adjusted_ties,
            pct: adjusted_pct,
        });

        analysis.push(AnalysisRow {
            year: s.year,
            team: s.team.clone(),
            orig_pct: original_pct,
            new_pct: adjusted_pct,
            delta_pct: adjusted_pct - original_pct,
            inn_elim: s.tally.innings_eliminated,
            ties: s.tally.adjusted_ties,
        });
    }

    StandingsTables { original, adjusted, analysis, failures: Vec::new() }
}

impl Standing for OriginalStanding {
    fn year(&self) -> u16 { self.year }
    fn league(&self) -> &str { &self.league }
    fn division(&self) -> &str { &self.division }
    fn team(&self) -> &str { &self.team }
    fn pct(&self) -> f64 { self.pct }
}

impl Standing for AdjustedStanding {
    fn year(&self) -> u16 { self.year }
    fn league(&self) -> &str { &self.league }
    fn division(&self) -> &str { &self.division }
    fn team(&self) -> &str { &self.team }
    fn pct(&self) -> f64 { self.pct }
}
