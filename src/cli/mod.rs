//! CLI interface for nba-matchup
//!
//! Provides subcommands for:
//! - `compare`: Compare two teams for a season
//! - `form`: Show one team's weighted recent form by segment
//! - `teams`: List or search the team directory
//! - `config`: Show configuration

mod compare;
mod form;
mod teams;

pub use compare::{CompareArgs, OutputFormat};
pub use form::FormArgs;
pub use teams::TeamsArgs;

use crate::config::Config;
use crate::provider::{find_team, NbaStatsClient, Team};
use crate::season::Season;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nba-matchup")]
#[command(about = "Compare two NBA teams on net rating and weighted recent form")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two teams
    Compare(CompareArgs),
    /// Show a team's weighted recent form
    Form(FormArgs),
    /// List or search teams
    Teams(TeamsArgs),
    /// Show configuration
    Config,
}

/// Resolve a team query or fail with a readable message
fn resolve_team(query: &str) -> anyhow::Result<Team> {
    find_team(query).ok_or_else(|| anyhow::anyhow!("Team not found: '{}'", query))
}

/// Season from the command line, else the configured default
fn season_or_default(season: Option<Season>, config: &Config) -> Season {
    season.unwrap_or(config.matchup.season)
}

fn stats_client(config: &Config) -> anyhow::Result<NbaStatsClient> {
    Ok(NbaStatsClient::with_config((&config.provider).into())?)
}
