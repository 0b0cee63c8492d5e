use std::path::PathBuf;

pub const SEASON_GAMES: u32 = 162;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum League {
    AL,
    NL,
}

impl League {
    pub fn code(&self) -> &'static str {
        match self {
            League::AL => "AL",
            League::NL => "NL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    C,
    E,
    W,
}

impl Division {
    pub fn code(&self) -> &'static str {
        match self {
            Division::C => "C",
            Division::E => "E",
            Division::W => "W",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamInfo {
    pub code: String,
    pub league: League,
    pub division: Division,
}

impl TeamInfo {
    pub fn new(code: &str, league: League, division: Division) -> Self {
        Self { code: code.to_string(), league, division }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Denominator {
    // Fixed schedule length, regardless of how many games were actually logged
    Scheduled(u32),
    // Decided games found in the team-season's log
    GamesPlayed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailurePolicy {
    Abort,
    Skip,
}

#[derive(Debug)]
pub struct StandingsContext {
    pub teams: Vec<String>,
    pub years: Vec<u16>,
    pub directory: Vec<TeamInfo>,   // League and division of every known club

    pub denominator: Denominator,

    pub playoff_spots: usize,   // Per (year, league)
    pub summary_size: usize,    // Length of the most hurt / most helped lists

    pub failure_policy: FailurePolicy,

    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for StandingsContext {
    fn default() -> Self {
        use Division::*;
        use League::*;

        let directory = vec![
            TeamInfo::new("NYY", AL, E), TeamInfo::new("BOS", AL, E), TeamInfo::new("TBR", AL, E),
            TeamInfo::new("TOR", AL, E), TeamInfo::new("BAL", AL, E),
            TeamInfo::new("MIN", AL, C), TeamInfo::new("DET", AL, C), TeamInfo::new("KCR", AL, C),
            TeamInfo::new("CHW", AL, C), TeamInfo::new("CLE", AL, C),
            TeamInfo::new("HOU", AL, W), TeamInfo::new("SEA", AL, W), TeamInfo::new("OAK", AL, W),
            TeamInfo::new("LAA", AL, W), TeamInfo::new("TEX", AL, W),
            TeamInfo::new("PHI", NL, E), TeamInfo::new("NYM", NL, E), TeamInfo::new("WSN", NL, E),
            TeamInfo::new("ATL", NL, E), TeamInfo::new("MIA", NL, E),
            TeamInfo::new("CHC", NL, C), TeamInfo::new("MIL", NL, C), TeamInfo::new("CIN", NL, C),
            TeamInfo::new("STL", NL, C), TeamInfo::new("PIT", NL, C),
            TeamInfo::new("LAD", NL, W), TeamInfo::new("ARI", NL, W), TeamInfo::new("SDP", NL, W),
            TeamInfo::new("COL", NL, W), TeamInfo::new("SFG", NL, W),
        ];

        Self {
            teams: directory.iter().map(|t| t.code.clone()).collect(),
            years: vec![2019, 2018, 2017, 2016, 2015],

            denominator: Denominator::Scheduled(SEASON_GAMES),

            playoff_spots: 5,
            summary_size: 5,

            failure_policy: FailurePolicy::Abort,
            directory,

            data_dir: PathBuf::from("./data"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl StandingsContext {
    // Every (team, year) pair in enumeration order: team-major, year-minor.
    pub fn team_seasons(&self) -> Vec<(&str, u16)> {
        let mut pairs = Vec::with_capacity(self.teams.len() * self.years.len());
        for team in &self.teams {
            for &year in &self.years {
                pairs.push((team.as_str(), year));
            }
        }
        pairs
    }

    pub fn lookup(&self, code: &str) -> Option<&TeamInfo> {
        self.directory.iter().find(|t| t.code == code)
    }

    pub fn denominator_for(&self, games_played: u32) -> u32 {
        match self.denominator {
            Denominator::Scheduled(games) => games,
            Denominator::GamesPlayed => games_played,
        }
    }
}
