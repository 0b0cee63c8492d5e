use crate::data_loader::{GameRecord, Outcome};

pub const REGULATION_INNINGS: u32 = 9;

// Both readings of one team-season. Under the adjusted rule any game that needed extra
// innings is a tie, whatever its final result was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonTally {
    pub original_wins: u32,
    pub original_losses: u32,

    pub adjusted_wins: u32,
    pub adjusted_losses: u32,
    pub adjusted_ties: u32,

    pub innings_eliminated: u32,
    pub no_decisions: u32,
}

impl SeasonTally {
    pub fn classify(games: &[GameRecord]) -> Self {
        let mut tally = Self::default();

        for game in games {
            let won = match game.outcome {
                Outcome::Win  => true,
                Outcome::Loss => false,
                Outcome::Tie  => { tally.no_decisions += 1; continue; }
            };

            if won { tally.original_wins += 1; } else { tally.original_losses += 1; }

            if game.innings > REGULATION_INNINGS {
                tally.adjusted_ties += 1;
                tally.innings_eliminated += game.innings - REGULATION_INNINGS;
            } else if won {
                tally.adjusted_wins += 1;
            } else {
                tally.adjusted_losses += 1;
            }
        }

        tally
    }

    pub fn games_played(&self) -> u32 {
        self.original_wins + self.original_losses
    }

    pub fn original_pct(&self, denominator: u32) -> f64 {
        pct(self.original_wins as f64, denominator)
    }

    // Each tie is worth half a win
    pub fn adjusted_pct(&self, denominator: u32) -> f64 {
        pct(self.adjusted_wins as f64 + 0.5 * self.adjusted_ties as f64, denominator)
    }
}

fn pct(credit: f64, denominator: u32) -> f64 {
    if denominator == 0 { return 0.0; }
    credit / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn season(wins_in_nine: u32, losses_in_nine: u32, extra: &[(Outcome, u32)]) -> Vec<GameRecord> {
        let mut games = Vec::new();
        games.extend((0..wins_in_nine).map(|_| GameRecord::new(Outcome::Win, 9)));
        games.extend((0..losses_in_nine).map(|_| GameRecord::new(Outcome::Loss, 9)));
        games.extend(extra.iter().map(|&(outcome, innings)| GameRecord::new(outcome, innings)));
        games
    }

    fn random_season(rng: &mut StdRng) -> Vec<GameRecord> {
        (0..162)
            .map(|_| {
                let outcome = match rng.random_range(0..100) {
                    0 => Outcome::Tie,
                    n if n % 2 == 0 => Outcome::Win,
                    _ => Outcome::Loss,
                };
                let innings = if rng.random_bool(0.1) { rng.random_range(10..=19) } else { rng.random_range(5..=9) };
                GameRecord::new(outcome, innings)
            })
            .collect()
    }

    #[test]
    fn yankees_2019_single_extra_inning_win() {
        let games = season(99, 62, &[(Outcome::Win, 12)]);
        let tally = SeasonTally::classify(&games);

        assert_eq!((tally.original_wins, tally.original_losses), (100, 62));
        assert_eq!((tally.adjusted_wins, tally.adjusted_losses, tally.adjusted_ties), (99, 62, 1));
        assert_eq!(tally.innings_eliminated, 3);

        let original = tally.original_pct(162);
        let adjusted = tally.adjusted_pct(162);
        assert_eq!(original, 100.0 / 162.0);
        assert_eq!(adjusted, 99.5 / 162.0);
        assert!((original - 0.6173).abs() < 1e-4);
        assert!((adjusted - 0.6142).abs() < 1e-4);
        assert!((adjusted - original + 0.0031).abs() < 1e-4);
    }

    #[test]
    fn extra_inning_losses_become_ties_too() {
        let tally = SeasonTally::classify(&season(80, 80, &[(Outcome::Loss, 10), (Outcome::Loss, 15)]));
        assert_eq!((tally.adjusted_wins, tally.adjusted_losses, tally.adjusted_ties), (80, 80, 2));
        assert_eq!(tally.innings_eliminated, 1 + 6);
        assert!(tally.adjusted_pct(162) > tally.original_pct(162));
    }

    #[test]
    fn no_extra_innings_means_no_change() {
        let tally = SeasonTally::classify(&season(90, 72, &[]));
        assert_eq!(tally.adjusted_ties, 0);
        assert_eq!(tally.innings_eliminated, 0);
        assert_eq!(tally.original_pct(162), tally.adjusted_pct(162));
    }

    #[test]
    fn shortened_games_stay_decided() {
        let tally = SeasonTally::classify(&season(0, 0, &[(Outcome::Win, 5), (Outcome::Loss, 7)]));
        assert_eq!((tally.adjusted_wins, tally.adjusted_losses, tally.adjusted_ties), (1, 1, 0));
    }

    #[test]
    fn recorded_ties_are_no_decisions() {
        let tally = SeasonTally::classify(&season(1, 1, &[(Outcome::Tie, 6), (Outcome::Tie, 11)]));
        assert_eq!(tally.no_decisions, 2);
        assert_eq!(tally.games_played(), 2);
        assert_eq!(tally.adjusted_ties, 0);
        assert_eq!(tally.innings_eliminated, 0);
    }

    // A tie past nine innings is still a no-decision: no adjusted tie, no innings eliminated
    #[test]
    fn recorded_tie_in_extra_innings_contributes_nothing() {
        let tally = SeasonTally::classify(&[GameRecord::new(Outcome::Tie, 12)]);
        assert_eq!(tally, SeasonTally { no_decisions: 1, ..SeasonTally::default() });
        assert_eq!(tally.games_played(), 0);
    }

    #[test]
    fn zero_denominator() {
        let tally = SeasonTally::classify(&[]);
        assert_eq!(tally.original_pct(0), 0.0);
        assert_eq!(tally.adjusted_pct(0), 0.0);
    }

    #[test]
    fn random_seasons_reconcile() {
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..200 {
            let games = random_season(&mut rng);
            let tally = SeasonTally::classify(&games);

            let decided: Vec<&GameRecord> = games.iter().filter(|g| g.outcome != Outcome::Tie).collect();
            let extra = decided.iter().filter(|g| g.innings > 9).count() as u32;
            let eliminated: u32 = decided.iter().filter(|g| g.innings > 9).map(|g| g.innings - 9).sum();

            assert_eq!(tally.adjusted_wins + tally.adjusted_losses + tally.adjusted_ties,
                       tally.original_wins + tally.original_losses);
            assert_eq!(tally.adjusted_ties, extra);
            assert_eq!(tally.innings_eliminated, eliminated);
            assert_eq!(tally.adjusted_pct(162),
                       (tally.adjusted_wins as f64 + 0.5 * tally.adjusted_ties as f64) / 162.0);
            if extra == 0 {
                assert_eq!(tally.adjusted_pct(162), tally.original_pct(162));
            }
        }
    }
}
