use crate::analysis::AnalysisSummary;
use crate::error::StandingsError;
use crate::ranking::{groups, RankedStandings, Standing};
use crate::standings::{AdjustedStanding, AnalysisRow, OriginalStanding};

pub fn output_report(ranked: &RankedStandings, summary: &AnalysisSummary, failures: &[StandingsError]) {
    println!("=== Divisional standings, as played ===");
    print_original(&ranked.original_divisional, true);

    println!("\n=== Divisional standings, extra innings as ties ===");
    print_adjusted(&ranked.adjusted_divisional, true);

    println!("\n=== Playoff picture, as played ===");
    print_original(&ranked.original_playoffs, false);

    println!("\n=== Playoff picture, extra innings as ties ===");
    print_adjusted(&ranked.adjusted_playoffs, false);

    println!("\n=== Per season ===");
    println!("| Year | Ties | Innings eliminated |");
    for (year, ties) in &summary.ties_by_year {
        let innings = summary.innings_by_year.get(year).copied().unwrap_or(0);
        println!("| {0:4} | {1:4} | {2:18} |", year, ties, innings);
    }

    println!("\n=== Most hurt ===");
    print_affected(&summary.most_hurt);
    println!("\n=== Most helped ===");
    print_affected(&summary.most_helped);

    if !summary.leader_changes.is_empty() {
        println!("\n=== Division winners that change ===");
        for c in &summary.leader_changes {
            println!("{0} {1}-{2}: {3} -> {4}", c.year, c.league, c.division, c.original, c.adjusted);
        }
    }

    if !summary.playoff_changes.is_empty() {
        println!("\n=== Playoff picture changes ===");
        for c in &summary.playoff_changes {
            println!("{0} {1}: {2} {3}", c.year, c.league, c.team, if c.gained { "gets in" } else { "drops out" });
        }
    }

    if !failures.is_empty() {
        println!("\n=== Skipped team-seasons ===");
        for f in failures {
            println!("{f}");
        }
    }
}

// Rows grouped by (year, league, division), or by (year, league) when `by_division` is off
fn group_heading<T: Standing>(row: &T, by_division: bool) -> String {
    if by_division {
        format!("-- {0} {1}-{2}", row.year(), row.league(), row.division())
    } else {
        format!("-- {0} {1}", row.year(), row.league())
    }
}

fn print_original(rows: &[OriginalStanding], by_division: bool) {
    for group in groups(rows, |r| group_heading(r, by_division)) {
        println!("{}", group_heading(&group[0], by_division));
        for (i, r) in group.iter().enumerate() {
            println!("|{0:3}. | {1:4} | {2:3} | {3:3} | {4:5.3} |", i + 1, r.team, r.wins, r.losses, r.pct);
        }
    }
}

fn print_adjusted(rows: &[AdjustedStanding], by_division: bool) {
    for group in groups(rows, |r| group_heading(r, by_division)) {
        println!("{}", group_heading(&group[0], by_division));
        for (i, r) in group.iter().enumerate() {
            println!("|{0:3}. | {1:4} | {2:3} | {3:3} | {4:3} | {5:5.3} |", i + 1, r.team, r.wins, r.losses, r.ties, r.pct);
        }
    }
}

fn print_affected(rows: &[AnalysisRow]) {
    for r in rows {
        println!("| {0:4} | {1:4} | {2:5.3} -> {3:5.3} | {4:+7.4} | {5:3} inn |",
            r.year,
            r.team,
            r.orig_pct,
            r.new_pct,
            r.delta_pct,
            r.inn_elim,
        );
    }
}
