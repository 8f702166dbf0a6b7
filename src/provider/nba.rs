//! stats.nba.com client
//!
//! Fetches team game logs and advanced dashboard splits. Responses arrive as
//! tabular `resultSets` (a header row plus positional rows); they are parsed
//! into typed values here and nowhere else.

use super::{EfficiencyMetrics, ProviderError, StatsProvider, Team};
use crate::form::{GameLog, GameResult};
use crate::season::Season;
use crate::telemetry::{record_latency, record_provider_error, LatencyMetric};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// stats.nba.com base URL
pub const NBA_STATS_URL: &str = "https://stats.nba.com/stats";

const GAME_LOG_SET: &str = "TeamGameLog";
const DASHBOARD_SET: &str = "OverallTeamDashboard";

/// Configuration for the stats client
#[derive(Debug, Clone)]
pub struct NbaStatsConfig {
    /// Base URL for the stats API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// "Regular Season", "Playoffs", ...
    pub season_type: String,
    /// User agent; the API drops requests without a browser-like one
    pub user_agent: String,
}

impl Default for NbaStatsConfig {
    fn default() -> Self {
        Self {
            base_url: NBA_STATS_URL.to_string(),
            timeout: Duration::from_secs(30),
            season_type: "Regular Season".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
        }
    }
}

/// Client for the stats.nba.com team endpoints
pub struct NbaStatsClient {
    config: NbaStatsConfig,
    client: Client,
}

impl NbaStatsClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(NbaStatsConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: NbaStatsConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert("Origin", HeaderValue::from_static("https://www.nba.com"));
        if let Ok(agent) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, agent);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { config, client })
    }

    /// GET an endpoint and decode the stats envelope
    async fn fetch(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        metric: LatencyMetric,
    ) -> Result<StatsResponse, ProviderError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        tracing::debug!(url = %url, "Fetching from stats API");

        let started = Instant::now();
        let result = self.send(&url, query).await;
        record_latency(metric, started.elapsed());

        if let Err(ref e) = result {
            record_provider_error(endpoint);
            tracing::warn!(endpoint, error = %e, "Stats API request failed");
        }
        result
    }

    async fn send(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<StatsResponse, ProviderError> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn game_log(&self, team: &Team, season: Season) -> Result<GameLog, ProviderError> {
        let query = [
            ("TeamID", team.id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", self.config.season_type.clone()),
            ("LeagueID", "00".to_string()),
            ("DateFrom", String::new()),
            ("DateTo", String::new()),
        ];

        let response = self
            .fetch("teamgamelog", &query, LatencyMetric::GameLog)
            .await?;
        let log = parse_game_log(&response)?;

        tracing::info!(
            team = team.abbreviation,
            season = %season,
            games = log.len(),
            "Fetched game log"
        );
        Ok(log)
    }

    async fn efficiency(
        &self,
        team: &Team,
        season: Season,
    ) -> Result<EfficiencyMetrics, ProviderError> {
        let query = dashboard_query(team, season, &self.config.season_type);

        let response = self
            .fetch(
                "teamdashboardbygeneralsplits",
                &query,
                LatencyMetric::Dashboard,
            )
            .await?;
        let metrics = parse_efficiency(&response)?;

        tracing::info!(
            team = team.abbreviation,
            season = %season,
            net_rating = %metrics.net_rating,
            "Fetched advanced dashboard"
        );
        Ok(metrics)
    }
}

fn dashboard_query(team: &Team, season: Season, season_type: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("TeamID", team.id.to_string()),
        ("Season", season.to_string()),
        ("SeasonType", season_type.to_string()),
        ("MeasureType", "Advanced".to_string()),
        ("PerMode", "Totals".to_string()),
        ("PlusMinus", "N".to_string()),
        ("PaceAdjust", "N".to_string()),
        ("Rank", "N".to_string()),
        ("LeagueID", "00".to_string()),
    ];
    for key in ["LastNGames", "Month", "OpponentTeamID", "Period", "PORound"] {
        query.push((key, "0".to_string()));
    }
    for key in [
        "DateFrom",
        "DateTo",
        "GameSegment",
        "Location",
        "Outcome",
        "SeasonSegment",
        "ShotClockRange",
        "VsConference",
        "VsDivision",
    ] {
        query.push((key, String::new()));
    }
    query
}

/// Raw stats API envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    fn result_set(&self, name: &str) -> Result<&ResultSet, ProviderError> {
        self.result_sets
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ProviderError::MissingResultSet(name.to_string()))
    }
}

/// One table in the envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultSet {
    name: String,
    headers: Vec<String>,
    row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Header names differ in case between endpoints (`Game_ID`, `GAME_DATE`)
    fn column(&self, column: &str) -> Result<usize, ProviderError> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| ProviderError::MissingColumn {
                result_set: self.name.clone(),
                column: column.to_string(),
            })
    }
}

fn cell<'a>(row: &'a [Value], index: usize, column: &str) -> Result<&'a Value, ProviderError> {
    row.get(index).ok_or_else(|| invalid(column, "missing cell"))
}

fn invalid(column: &str, value: impl ToString) -> ProviderError {
    ProviderError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn parse_game_log(response: &StatsResponse) -> Result<GameLog, ProviderError> {
    let set = response.result_set(GAME_LOG_SET)?;
    let id_col = set.column("Game_ID")?;
    let date_col = set.column("GAME_DATE")?;
    let matchup_col = set.column("MATCHUP")?;
    let diff_col = set.column("PLUS_MINUS")?;

    let games = set
        .row_set
        .iter()
        .map(|row| -> Result<GameResult, ProviderError> {
            Ok(GameResult {
                game_id: text(cell(row, id_col, "Game_ID")?),
                date: parse_game_date(cell(row, date_col, "GAME_DATE")?)?,
                matchup: text(cell(row, matchup_col, "MATCHUP")?),
                point_differential: parse_differential(cell(row, diff_col, "PLUS_MINUS")?)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameLog::from_games(games))
}

fn parse_efficiency(response: &StatsResponse) -> Result<EfficiencyMetrics, ProviderError> {
    let set = response.result_set(DASHBOARD_SET)?;
    let net_col = set.column("NET_RATING")?;
    let efg_col = set.column("EFG_PCT")?;

    let row = set
        .row_set
        .first()
        .ok_or_else(|| ProviderError::NoRows(set.name.clone()))?;

    Ok(EfficiencyMetrics {
        net_rating: parse_decimal(cell(row, net_col, "NET_RATING")?, "NET_RATING")?,
        effective_fg_pct: parse_decimal(cell(row, efg_col, "EFG_PCT")?, "EFG_PCT")?,
    })
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Game dates arrive as "APR 13, 2025"; ISO dates are accepted too
fn parse_game_date(value: &Value) -> Result<NaiveDate, ProviderError> {
    let raw = value
        .as_str()
        .ok_or_else(|| invalid("GAME_DATE", value))?
        .trim();

    NaiveDate::parse_from_str(raw, "%b %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| invalid("GAME_DATE", raw))
}

fn parse_differential(value: &Value) -> Result<i32, ProviderError> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).map_err(|_| invalid("PLUS_MINUS", n));
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Ok(f as i32),
        _ => Err(invalid("PLUS_MINUS", value)),
    }
}

/// Parse from the JSON literal so values like 5.3 stay exact
fn parse_decimal(value: &Value, column: &str) -> Result<Decimal, ProviderError> {
    let literal = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(invalid(column, other)),
    };
    Decimal::from_str(&literal)
        .or_else(|_| Decimal::from_scientific(&literal))
        .map_err(|_| invalid(column, literal))
}
