use std::collections::{BTreeMap, HashSet};

use crate::ranking::{groups, RankedStandings, Standing};
use crate::standings::AnalysisRow;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderChange {
    pub year: u16,
    pub league: String,
    pub division: String,
    pub original: String,
    pub adjusted: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayoffChange {
    pub year: u16,
    pub league: String,
    pub team: String,
    pub gained: bool,   // false: in the original picture, out of the adjusted one
}

#[derive(Debug, Default)]
pub struct AnalysisSummary {
    pub ties_by_year: BTreeMap<u16, u32>,
    pub innings_by_year: BTreeMap<u16, u32>,
    pub most_hurt: Vec<AnalysisRow>,
    pub most_helped: Vec<AnalysisRow>,
    pub leader_changes: Vec<LeaderChange>,
    pub playoff_changes: Vec<PlayoffChange>,
}

pub fn summarize(analysis: &[AnalysisRow], ranked: &RankedStandings, size: usize) -> AnalysisSummary {
    let mut summary = AnalysisSummary::default();

    for row in analysis {
        *summary.ties_by_year.entry(row.year).or_insert(0) += row.ties;
        *summary.innings_by_year.entry(row.year).or_insert(0) += row.inn_elim;
    }

    let (most_hurt, most_helped) = most_affected(analysis, size);
    summary.most_hurt = most_hurt;
    summary.most_helped = most_helped;
    summary.leader_changes = leader_changes(&ranked.original_divisional, &ranked.adjusted_divisional);
    summary.playoff_changes = playoff_changes(&ranked.original_playoffs, &ranked.adjusted_playoffs);

    summary
}

// Smallest deltas first for the hurt list, largest first for the helped list.
// Stable sorts over the full table, so equal deltas stay in table order.
pub fn most_affected(analysis: &[AnalysisRow], size: usize) -> (Vec<AnalysisRow>, Vec<AnalysisRow>) {
    let mut hurt = analysis.to_vec();
    hurt.sort_by(|a, b| a.delta_pct.total_cmp(&b.delta_pct));
    hurt.truncate(size);

    let mut helped = analysis.to_vec();
    helped.sort_by(|a, b| b.delta_pct.total_cmp(&a.delta_pct));
    helped.truncate(size);

    (hurt, helped)
}

// Both tables must be in divisional order. Leaders are the first row of each group.
fn leader_changes<O: Standing, A: Standing>(original: &[O], adjusted: &[A]) -> Vec<LeaderChange> {
    let key_o = |r: &O| (r.year(), r.league().to_string(), r.division().to_string());
    let key_a = |r: &A| (r.year(), r.league().to_string(), r.division().to_string());

    let adjusted_leaders: BTreeMap<_, &str> = groups(adjusted, key_a)
        .into_iter()
        .map(|g| (key_a(&g[0]), g[0].team()))
        .collect();

    let mut changes = Vec::new();
    for group in groups(original, key_o) {
        let key = key_o(&group[0]);
        let Some(&new_leader) = adjusted_leaders.get(&key) else { continue };
        if new_leader != group[0].team() {
            changes.push(LeaderChange {
                year: key.0,
                league: key.1,
                division: key.2,
                original: group[0].team().to_string(),
                adjusted: new_leader.to_string(),
            });
        }
    }
    changes
}

fn playoff_changes<O: Standing, A: Standing>(original: &[O], adjusted: &[A]) -> Vec<PlayoffChange> {
    let in_original: HashSet<(u16, &str, &str)> = original.iter().map(|r| (r.year(), r.league(), r.team())).collect();
    let in_adjusted: HashSet<(u16, &str, &str)> = adjusted.iter().map(|r| (r.year(), r.league(), r.team())).collect();

    let mut changes = Vec::new();
    for r in adjusted {
        if !in_original.contains(&(r.year(), r.league(), r.team())) {
            changes.push(PlayoffChange { year: r.year(), league: r.league().to_string(), team: r.team().to_string(), gained: true });
        }
    }
    for r in original {
        if !in_adjusted.contains(&(r.year(), r.league(), r.team())) {
            changes.push(PlayoffChange { year: r.year(), league: r.league().to_string(), team: r.team().to_string(), gained: false });
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::Outcome;
    use crate::standings::compute_adjusted_standings;
    use crate::standings::tests::{context, season, StaticProvider};

    fn analysis_row(year: u16, team: &str, delta: f64, ties: u32, inn_elim: u32) -> AnalysisRow {
        AnalysisRow { year, team: team.into(), orig_pct: 0.5, new_pct: 0.5 + delta, delta_pct: delta, inn_elim, ties }
    }

    #[test]
    fn most_affected_both_ends() {
        let rows = vec![
            analysis_row(2019, "NYY", -0.0031, 1, 3),
            analysis_row(2019, "BOS", 0.0062, 2, 4),
            analysis_row(2018, "NYY", 0.0, 0, 0),
            analysis_row(2018, "BOS", -0.0093, 3, 7),
            analysis_row(2017, "NYY", 0.0, 0, 0),
        ];

        let (hurt, helped) = most_affected(&rows, 3);
        let hurt: Vec<(u16, &str)> = hurt.iter().map(|r| (r.year, r.team.as_str())).collect();
        let helped: Vec<(u16, &str)> = helped.iter().map(|r| (r.year, r.team.as_str())).collect();

        assert_eq!(hurt, vec![(2018, "BOS"), (2019, "NYY"), (2018, "NYY")]);
        assert_eq!(helped, vec![(2019, "BOS"), (2018, "NYY"), (2017, "NYY")]);
    }

    #[test]
    fn most_affected_short_table() {
        let rows = vec![analysis_row(2019, "NYY", -0.0031, 1, 3)];
        let (hurt, helped) = most_affected(&rows, 5);
        assert_eq!(hurt.len(), 1);
        assert_eq!(helped.len(), 1);
    }

    #[test]
    fn per_year_totals_and_changes() {
        // NYY only stays ahead of BOS because of its extra-inning wins
        let ctx = context(&["NYY", "BOS", "TBR"], &[2019, 2018]);
        let provider = StaticProvider::default()
            .with_season("NYY", 2019, season(88, 71, &[(Outcome::Win, 12), (Outcome::Win, 10), (Outcome::Win, 11)]))
            .with_season("BOS", 2019, season(90, 72, &[]))
            .with_season("TBR", 2019, season(60, 101, &[(Outcome::Loss, 11)]))
            .with_season("NYY", 2018, season(100, 62, &[]))
            .with_season("BOS", 2018, season(90, 72, &[]))
            .with_season("TBR", 2018, season(80, 81, &[(Outcome::Win, 13)]));

        let tables = compute_adjusted_standings(&ctx, &provider).unwrap();
        let ranked = RankedStandings::new(&tables, 2);
        let summary = summarize(&tables.analysis, &ranked, 5);

        assert_eq!(summary.ties_by_year, BTreeMap::from([(2018, 1), (2019, 4)]));
        assert_eq!(summary.innings_by_year, BTreeMap::from([(2018, 4), (2019, 3 + 1 + 2 + 2)]));

        assert_eq!(summary.leader_changes, vec![LeaderChange {
            year: 2019,
            league: "AL".into(),
            division: "E".into(),
            original: "NYY".into(),
            adjusted: "BOS".into(),
        }]);
        assert!(summary.playoff_changes.is_empty());

        assert_eq!(summary.most_hurt[0].team, "NYY");
        assert_eq!(summary.most_hurt[0].year, 2019);
        assert_eq!(summary.most_helped[0].team, "TBR");
    }

    #[test]
    fn playoff_changes_both_directions() {
        // Original: OAK 94, HOU 90, SEA 88. Adjusted: SEA 93, HOU 90, OAK 89.
        let ctx = context(&["HOU", "OAK", "SEA"], &[2018]);
        let provider = StaticProvider::default()
            .with_season("HOU", 2018, season(90, 72, &[]))
            .with_season("OAK", 2018, season(84, 68, &[(Outcome::Win, 10); 10]))
            .with_season("SEA", 2018, season(88, 64, &[(Outcome::Loss, 10); 10]));

        let tables = compute_adjusted_standings(&ctx, &provider).unwrap();
        let ranked = RankedStandings::new(&tables, 2);
        let summary = summarize(&tables.analysis, &ranked, 5);

        assert_eq!(summary.playoff_changes, vec![
            PlayoffChange { year: 2018, league: "AL".into(), team: "SEA".into(), gained: true },
            PlayoffChange { year: 2018, league: "AL".into(), team: "OAK".into(), gained: false },
        ]);
        assert_eq!(summary.leader_changes.len(), 1);
        assert_eq!(summary.leader_changes[0].original, "OAK");
        assert_eq!(summary.leader_changes[0].adjusted, "SEA");
    }
}
