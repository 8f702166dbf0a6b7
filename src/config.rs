//! Configuration types for nba-matchup

use crate::form::SegmentWeights;
use crate::provider::{NbaStatsConfig, NBA_STATS_URL};
use crate::season::Season;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub matchup: MatchupConfig,
    #[serde(default)]
    pub form: SegmentWeights,
    pub telemetry: TelemetryConfig,
}

/// Stats API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the stats API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Season type filter, e.g. "Regular Season" or "Playoffs"
    #[serde(default = "default_season_type")]
    pub season_type: String,

    /// Override for the browser-like user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    NBA_STATS_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_season_type() -> String {
    "Regular Season".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            season_type: default_season_type(),
            user_agent: None,
        }
    }
}

impl From<&ProviderConfig> for NbaStatsConfig {
    fn from(config: &ProviderConfig) -> Self {
        let defaults = NbaStatsConfig::default();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            season_type: config.season_type.clone(),
            user_agent: config.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

/// Matchup defaults
#[derive(Debug, Clone, Deserialize)]
pub struct MatchupConfig {
    /// Season used when none is given on the command line
    #[serde(default = "default_season")]
    pub season: Season,
}

fn default_season() -> Season {
    Season::starting(2024)
}

impl Default for MatchupConfig {
    fn default() -> Self {
        Self {
            season: default_season(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.form.validate()?;
        Ok(config)
    }
}
