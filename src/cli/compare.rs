//! Compare command implementation

use super::{resolve_team, season_or_default, stats_client};
use crate::config::Config;
use crate::form::FormAggregator;
use crate::matchup::{render_text, MatchupAnalyzer};
use crate::season::Season;
use clap::{Args, ValueEnum};
use std::io::{self, BufRead, Write};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First team (name fragment or abbreviation); prompted for if omitted
    pub team_a: Option<String>,

    /// Second team (name fragment or abbreviation); prompted for if omitted
    pub team_b: Option<String>,

    /// Season as YYYY-YY, defaults to the configured season
    #[arg(short, long)]
    pub season: Option<Season>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Append explanations of each statistic
    #[arg(long)]
    pub explain: bool,
}

impl CompareArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let query_a = match &self.team_a {
            Some(q) => q.clone(),
            None => prompt("Enter team name or abbreviation for team 1: ")?,
        };
        let query_b = match &self.team_b {
            Some(q) => q.clone(),
            None => prompt("Enter team name or abbreviation for team 2: ")?,
        };

        let team_a = resolve_team(&query_a)?;
        let team_b = resolve_team(&query_b)?;
        let season = season_or_default(self.season, config);

        let aggregator = FormAggregator::new(config.form.clone())?;
        let analyzer = MatchupAnalyzer::new(stats_client(config)?, aggregator);
        let report = analyzer.analyze(team_a, team_b, season).await?;

        match self.format {
            OutputFormat::Text => {
                let explain = self.explain.then_some(&config.form);
                print!("{}", render_text(&report, explain));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("No team entered");
    }
    Ok(line.trim().to_string())
}
