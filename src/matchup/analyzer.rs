//! Matchup orchestration

use super::{MatchupReport, TeamReport};
use crate::compare::compare;
use crate::form::{FormAggregator, FormBreakdown};
use crate::provider::{ProviderError, StatsProvider, Team};
use crate::season::Season;
use thiserror::Error;

/// Matchup analysis errors
#[derive(Debug, Error)]
pub enum MatchupError {
    /// Season efficiency could not be fetched; the comparison cannot run
    #[error("Could not fetch advanced stats for {team}: {source}")]
    Efficiency {
        team: &'static str,
        #[source]
        source: ProviderError,
    },
}

/// Fetches both teams' signals and compares them
pub struct MatchupAnalyzer<P: StatsProvider> {
    provider: P,
    aggregator: FormAggregator,
}

impl<P: StatsProvider> MatchupAnalyzer<P> {
    pub fn new(provider: P, aggregator: FormAggregator) -> Self {
        Self {
            provider,
            aggregator,
        }
    }

    /// Compare two teams for a season.
    ///
    /// Both teams are fetched concurrently. A missing game log only removes
    /// the recent-form signal; missing efficiency stats fail the analysis.
    pub async fn analyze(
        &self,
        team_a: Team,
        team_b: Team,
        season: Season,
    ) -> Result<MatchupReport, MatchupError> {
        tracing::info!(
            team_a = team_a.abbreviation,
            team_b = team_b.abbreviation,
            season = %season,
            "Analyzing matchup"
        );

        let (a, b) = tokio::join!(
            self.team_report(team_a, season),
            self.team_report(team_b, season)
        );
        let (a, b) = (a?, b?);

        let comparison = compare(&a.signals(), &b.signals());

        Ok(MatchupReport {
            season,
            team_a: a,
            team_b: b,
            comparison,
        })
    }

    /// Segment-level form breakdown for one team
    pub async fn form(&self, team: Team, season: Season) -> Result<FormBreakdown, ProviderError> {
        let log = self.provider.game_log(&team, season).await?;
        Ok(self.aggregator.breakdown(&log))
    }

    async fn team_report(&self, team: Team, season: Season) -> Result<TeamReport, MatchupError> {
        let (efficiency, log) = tokio::join!(
            self.provider.efficiency(&team, season),
            self.provider.game_log(&team, season)
        );

        let efficiency = efficiency.map_err(|source| MatchupError::Efficiency {
            team: team.full_name,
            source,
        })?;

        let (form, games_played, form_unavailable) = match log {
            Ok(log) => {
                let form = self.aggregator.compute(&log);
                if form.is_none() {
                    tracing::info!(
                        team = team.abbreviation,
                        "No games played, recent form unavailable"
                    );
                }
                (form, Some(log.len()), None)
            }
            Err(e) => {
                tracing::warn!(
                    team = team.abbreviation,
                    error = %e,
                    "Game log unavailable, skipping recent form"
                );
                (None, None, Some(e.to_string()))
            }
        };

        Ok(TeamReport {
            team,
            efficiency,
            form,
            games_played,
            form_unavailable,
        })
    }
}
