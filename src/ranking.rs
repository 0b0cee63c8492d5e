use std::cmp::Ordering;

use crate::standings::{AdjustedStanding, OriginalStanding, StandingsTables};

// What the sorts need to know about a standings row, for either rule.
pub trait Standing: Clone {
    fn year(&self) -> u16;
    fn league(&self) -> &str;
    fn division(&self) -> &str;
    fn team(&self) -> &str;
    fn pct(&self) -> f64;
}

// Every key descending: latest year first, NL before AL, W/E/C within a league, best record first.
fn by_division<T: Standing>(a: &T, b: &T) -> Ordering {
    b.year().cmp(&a.year())
        .then_with(|| b.league().cmp(a.league()))
        .then_with(|| b.division().cmp(a.division()))
        .then_with(|| b.pct().total_cmp(&a.pct()))
}

fn by_league<T: Standing>(a: &T, b: &T) -> Ordering {
    b.year().cmp(&a.year())
        .then_with(|| b.league().cmp(a.league()))
        .then_with(|| b.pct().total_cmp(&a.pct()))
}

// The sorts are stable, so equal percentages keep whatever order they came in with.
pub fn divisional_order<T: Standing>(rows: &[T]) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(by_division);
    sorted
}

pub fn league_order<T: Standing>(rows: &[T]) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(by_league);
    sorted
}

// Top `spots` teams of every (year, league), in league order
pub fn playoff_picture<T: Standing>(rows: &[T], spots: usize) -> Vec<T> {
    let sorted = league_order(rows);
    let mut picture = Vec::new();
    let mut current: Option<(u16, &str)> = None;
    let mut taken = 0;

    for row in &sorted {
        let key = (row.year(), row.league());
        if current != Some(key) {
            current = Some(key);
            taken = 0;
        }
        if taken < spots {
            picture.push(row.clone());
            taken += 1;
        }
    }

    picture
}

// Splits an ordered table into runs of rows sharing the same key
pub fn groups<'a, T, K, F>(rows: &'a [T], key: F) -> Vec<&'a [T]>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut out = Vec::new();
    let mut start = 0;
    for idx in 1..=rows.len() {
        if idx == rows.len() || key(&rows[idx]) != key(&rows[start]) {
            if idx > start { out.push(&rows[start..idx]); }
            start = idx;
        }
    }
    out
}

#[derive(Debug)]
pub struct RankedStandings {
    pub original_divisional: Vec<OriginalStanding>,
    pub original_league: Vec<OriginalStanding>,
    pub original_playoffs: Vec<OriginalStanding>,

    pub adjusted_divisional: Vec<AdjustedStanding>,
    pub adjusted_league: Vec<AdjustedStanding>,
    pub adjusted_playoffs: Vec<AdjustedStanding>,
}

impl RankedStandings {
    // League order is taken from the divisional order, so ties in a league fall back to
    // division order rather than enumeration order.
    pub fn new(tables: &StandingsTables, playoff_spots: usize) -> Self {
        let original_divisional = divisional_order(&tables.original);
        let adjusted_divisional = divisional_order(&tables.adjusted);

        Self {
            original_league: league_order(&original_divisional),
            original_playoffs: playoff_picture(&original_divisional, playoff_spots),
            original_divisional,

            adjusted_league: league_order(&adjusted_divisional),
            adjusted_playoffs: playoff_picture(&adjusted_divisional, playoff_spots),
            adjusted_divisional,
        }
    }
}
