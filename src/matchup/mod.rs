//! Matchup module
//!
//! Fetches two teams' season signals, compares them and renders the result

mod analyzer;
mod report;

pub use analyzer::{MatchupAnalyzer, MatchupError};
pub use report::{render_form_text, render_text, stat_explanations};

use crate::compare::{ComparisonResult, TeamSignals};
use crate::form::FormScore;
use crate::provider::{EfficiencyMetrics, Team};
use crate::season::Season;
use serde::Serialize;

/// One side of a matchup
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub team: Team,
    pub efficiency: EfficiencyMetrics,
    /// Weighted recent plus/minus, `None` when unavailable
    pub form: Option<FormScore>,
    /// Games in the fetched log, `None` when the log could not be fetched
    pub games_played: Option<usize>,
    /// Why the game log was unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_unavailable: Option<String>,
}

impl TeamReport {
    /// Signals handed to the comparator
    pub fn signals(&self) -> TeamSignals {
        TeamSignals::new(self.efficiency.net_rating, self.form)
    }
}

/// Full matchup comparison
#[derive(Debug, Clone, Serialize)]
pub struct MatchupReport {
    pub season: Season,
    pub team_a: TeamReport,
    pub team_b: TeamReport,
    pub comparison: ComparisonResult,
}
