//! Form command implementation

use super::{resolve_team, season_or_default, stats_client};
use crate::config::Config;
use crate::form::FormAggregator;
use crate::matchup::{render_form_text, MatchupAnalyzer};
use crate::season::Season;
use clap::Args;

#[derive(Args, Debug)]
pub struct FormArgs {
    /// Team name fragment or abbreviation
    pub team: String,

    /// Season as YYYY-YY, defaults to the configured season
    #[arg(short, long)]
    pub season: Option<Season>,
}

impl FormArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let team = resolve_team(&self.team)?;
        let season = season_or_default(self.season, config);

        let aggregator = FormAggregator::new(config.form.clone())?;
        let analyzer = MatchupAnalyzer::new(stats_client(config)?, aggregator);
        let breakdown = analyzer.form(team, season).await?;

        print!("{}", render_form_text(&team, season, &breakdown));
        Ok(())
    }
}
