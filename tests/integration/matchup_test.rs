//! Matchup integration tests against an in-memory stats provider

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use nba_matchup::compare::{Award, Signal, Verdict};
use nba_matchup::form::{FormAggregator, GameLog, GameResult};
use nba_matchup::matchup::{render_text, MatchupAnalyzer, MatchupError};
use nba_matchup::provider::{find_team, EfficiencyMetrics, ProviderError, StatsProvider, Team};
use nba_matchup::season::Season;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

#[derive(Default)]
struct FakeProvider {
    logs: HashMap<u32, Vec<i32>>,
    ratings: HashMap<u32, Decimal>,
}

impl FakeProvider {
    fn with_team(mut self, abbr: &str, rating: Option<Decimal>, diffs: Option<Vec<i32>>) -> Self {
        let id = team(abbr).id;
        if let Some(rating) = rating {
            self.ratings.insert(id, rating);
        }
        if let Some(diffs) = diffs {
            self.logs.insert(id, diffs);
        }
        self
    }
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn game_log(&self, team: &Team, _season: Season) -> Result<GameLog, ProviderError> {
        let diffs = self
            .logs
            .get(&team.id)
            .ok_or_else(|| ProviderError::MissingResultSet("TeamGameLog".to_string()))?;

        let latest = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
        Ok(diffs
            .iter()
            .enumerate()
            .map(|(i, d)| GameResult::new(latest - Duration::days(i as i64 * 2), *d))
            .collect())
    }

    async fn efficiency(
        &self,
        team: &Team,
        _season: Season,
    ) -> Result<EfficiencyMetrics, ProviderError> {
        let net_rating = *self
            .ratings
            .get(&team.id)
            .ok_or_else(|| ProviderError::NoRows("OverallTeamDashboard".to_string()))?;

        Ok(EfficiencyMetrics {
            net_rating,
            effective_fg_pct: dec!(0.540),
        })
    }
}

fn team(abbr: &str) -> Team {
    find_team(abbr).unwrap()
}

fn analyzer(provider: FakeProvider) -> MatchupAnalyzer<FakeProvider> {
    MatchupAnalyzer::new(provider, FormAggregator::default())
}

fn season() -> Season {
    "2024-25".parse().unwrap()
}

#[tokio::test]
async fn test_split_signals_even() {
    let provider = FakeProvider::default()
        .with_team("BOS", Some(dec!(5.0)), Some(vec![2; 5]))
        .with_team("NYK", Some(dec!(3.0)), Some(vec![4; 5]));

    let report = analyzer(provider)
        .analyze(team("BOS"), team("NYK"), season())
        .await
        .unwrap();

    assert_eq!(report.team_a.form.unwrap().value(), dec!(2));
    assert_eq!(report.team_b.form.unwrap().value(), dec!(4));
    assert_eq!(report.comparison.score_a(), 1);
    assert_eq!(report.comparison.score_b(), 1);
    assert_eq!(report.comparison.verdict(), Verdict::Even);
}

#[tokio::test]
async fn test_missing_game_log_skips_form() {
    let provider = FakeProvider::default()
        .with_team("BOS", Some(dec!(5.0)), None)
        .with_team("NYK", Some(dec!(3.0)), Some(vec![4; 12]));

    let report = analyzer(provider)
        .analyze(team("BOS"), team("NYK"), season())
        .await
        .unwrap();

    assert!(report.team_a.form.is_none());
    assert!(report.team_a.games_played.is_none());
    assert!(report.team_a.form_unavailable.is_some());
    assert_eq!(report.team_b.games_played, Some(12));
    let form_award = report.comparison.award(Signal::RecentForm);
    assert_eq!(form_award, Some(Award::Skipped));
    assert_eq!(report.comparison.score_a(), 1);
    assert_eq!(report.comparison.score_b(), 0);
    assert_eq!(report.comparison.verdict(), Verdict::TeamA);

    let text = render_text(&report, None);
    assert!(text.contains("Could not compute weighted recent plus/minus"));
    assert!(text.contains("Prediction: Boston Celtics is more likely to win"));
}

#[tokio::test]
async fn test_no_games_is_unavailable_not_zero() {
    let provider = FakeProvider::default()
        .with_team("DEN", Some(dec!(1.0)), Some(vec![]))
        .with_team("UTA", Some(dec!(1.0)), Some(vec![-3; 8]));

    let report = analyzer(provider)
        .analyze(team("DEN"), team("UTA"), season())
        .await
        .unwrap();

    assert!(report.team_a.form.is_none());
    assert_eq!(report.team_a.games_played, Some(0));
    assert!(report.team_a.form_unavailable.is_none());
    // A zero score would have beaten UTA's -3 on form
    assert_eq!(report.comparison.verdict(), Verdict::Even);
}

#[tokio::test]
async fn test_missing_efficiency_fails() {
    let provider = FakeProvider::default()
        .with_team("BOS", Some(dec!(5.0)), Some(vec![1; 10]))
        .with_team("NYK", None, Some(vec![1; 10]));

    let err = analyzer(provider)
        .analyze(team("BOS"), team("NYK"), season())
        .await
        .unwrap_err();

    match err {
        MatchupError::Efficiency { team, .. } => assert_eq!(team, "New York Knicks"),
    }
}

#[tokio::test]
async fn test_swapping_teams_flips_result() {
    let mut diffs_a = vec![8; 10];
    diffs_a.extend([-6; 15]);
    let provider = FakeProvider::default()
        .with_team("MIL", Some(dec!(-1.2)), Some(diffs_a))
        .with_team("PHX", Some(dec!(2.4)), Some(vec![1; 30]));
    let analyzer = analyzer(provider);

    let ab = analyzer
        .analyze(team("MIL"), team("PHX"), season())
        .await
        .unwrap();
    let ba = analyzer
        .analyze(team("PHX"), team("MIL"), season())
        .await
        .unwrap();

    assert_eq!(ab.comparison.score_a(), ba.comparison.score_b());
    assert_eq!(ab.comparison.score_b(), ba.comparison.score_a());
    assert_eq!(ab.comparison.verdict(), ba.comparison.verdict().flip());
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let provider = FakeProvider::default()
        .with_team("LAL", Some(dec!(2.5)), Some(vec![3; 10]))
        .with_team("LAC", Some(dec!(1.5)), Some(vec![1; 10]));

    let report = analyzer(provider)
        .analyze(team("LAL"), team("LAC"), season())
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["season"], "2024-25");
    assert_eq!(json["team_a"]["team"]["abbreviation"], "LAL");
    assert_eq!(json["comparison"]["verdict"], "team_a");
    assert_eq!(json["comparison"]["score_a"], 2);
    assert!(json["team_a"].get("form_unavailable").is_none());
}

#[test]
fn test_form_breakdown_through_analyzer() {
    let mut diffs = vec![10; 10];
    diffs.extend([0; 10]);
    diffs.extend([-10; 10]);
    diffs.extend([20; 10]);
    let provider = FakeProvider::default().with_team("CHI", Some(dec!(0)), Some(diffs));

    let breakdown = tokio_test::block_on(analyzer(provider).form(team("CHI"), season())).unwrap();

    assert_eq!(breakdown.segments.len(), 4);
    assert_eq!(breakdown.total_weight, dec!(0.95));
    // (6 + 0 - 1 + 1) / 0.95
    assert_eq!(breakdown.score.unwrap().value(), dec!(6) / dec!(0.95));
}

#[test]
fn test_form_breakdown_missing_log_is_error() {
    let provider = FakeProvider::default();
    let result = tokio_test::block_on(analyzer(provider).form(team("CHI"), season()));
    assert!(result.is_err());
}
