//! Stats provider module
//!
//! Team directory and per-season game log / efficiency retrieval

mod nba;
mod teams;
mod types;

pub use nba::{NbaStatsClient, NbaStatsConfig, NBA_STATS_URL};
pub use teams::{find_team, search_teams, Team, TEAMS};
pub use types::{EfficiencyMetrics, ProviderError};

use crate::form::GameLog;
use crate::season::Season;
use async_trait::async_trait;

/// Source of per-team season statistics
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// All games the team has played in the season
    async fn game_log(&self, team: &Team, season: Season) -> Result<GameLog, ProviderError>;
    /// Season efficiency metrics
    async fn efficiency(
        &self,
        team: &Team,
        season: Season,
    ) -> Result<EfficiencyMetrics, ProviderError>;
}
