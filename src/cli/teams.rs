//! Teams command implementation

use crate::provider::search_teams;
use clap::Args;

#[derive(Args, Debug)]
pub struct TeamsArgs {
    /// Name fragment or abbreviation to filter by
    pub query: Option<String>,
}

impl TeamsArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let query = self.query.as_deref().unwrap_or("");
        let teams = search_teams(query);
        if teams.is_empty() {
            anyhow::bail!("No teams match '{}'", query);
        }

        for team in teams {
            let (abbr, name) = (team.abbreviation, team.full_name);
            println!("{:<4} {:<24} {}", abbr, name, team.id);
        }
        Ok(())
    }
}
