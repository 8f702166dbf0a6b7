//! Static NBA team directory

use serde::Serialize;

/// An NBA franchise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    /// stats.nba.com team id
    pub id: u32,
    /// Three-letter abbreviation
    pub abbreviation: &'static str,
    /// Full name, e.g. "Boston Celtics"
    pub full_name: &'static str,
}

const fn team(id: u32, abbreviation: &'static str, full_name: &'static str) -> Team {
    Team {
        id,
        abbreviation,
        full_name,
    }
}

/// All current franchises, ordered by team id
pub const TEAMS: [Team; 30] = [
    team(1610612737, "ATL", "Atlanta Hawks"),
    team(1610612738, "BOS", "Boston Celtics"),
    team(1610612739, "CLE", "Cleveland Cavaliers"),
    team(1610612740, "NOP", "New Orleans Pelicans"),
    team(1610612741, "CHI", "Chicago Bulls"),
    team(1610612742, "DAL", "Dallas Mavericks"),
    team(1610612743, "DEN", "Denver Nuggets"),
    team(1610612744, "GSW", "Golden State Warriors"),
    team(1610612745, "HOU", "Houston Rockets"),
    team(1610612746, "LAC", "Los Angeles Clippers"),
    team(1610612747, "LAL", "Los Angeles Lakers"),
    team(1610612748, "MIA", "Miami Heat"),
    team(1610612749, "MIL", "Milwaukee Bucks"),
    team(1610612750, "MIN", "Minnesota Timberwolves"),
    team(1610612751, "BKN", "Brooklyn Nets"),
    team(1610612752, "NYK", "New York Knicks"),
    team(1610612753, "ORL", "Orlando Magic"),
    team(1610612754, "IND", "Indiana Pacers"),
    team(1610612755, "PHI", "Philadelphia 76ers"),
    team(1610612756, "PHX", "Phoenix Suns"),
    team(1610612757, "POR", "Portland Trail Blazers"),
    team(1610612758, "SAC", "Sacramento Kings"),
    team(1610612759, "SAS", "San Antonio Spurs"),
    team(1610612760, "OKC", "Oklahoma City Thunder"),
    team(1610612761, "TOR", "Toronto Raptors"),
    team(1610612762, "UTA", "Utah Jazz"),
    team(1610612763, "MEM", "Memphis Grizzlies"),
    team(1610612764, "WAS", "Washington Wizards"),
    team(1610612765, "DET", "Detroit Pistons"),
    team(1610612766, "CHA", "Charlotte Hornets"),
];

fn matches(team: &Team, query: &str) -> bool {
    team.full_name.to_lowercase().contains(query) || team.abbreviation.to_lowercase() == query
}

/// First team whose full name contains the query or whose abbreviation
/// equals it, case-insensitively. Blank queries match nothing.
pub fn find_team(query: &str) -> Option<Team> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    TEAMS.iter().find(|t| matches(t, &query)).copied()
}

/// Every team matching the query, in directory order.
///
/// A blank query lists the whole directory.
pub fn search_teams(query: &str) -> Vec<Team> {
    let query = query.trim().to_lowercase();
    TEAMS
        .iter()
        .filter(|t| query.is_empty() || matches(t, &query))
        .copied()
        .collect()
}
