use clap::Parser;
use nba_matchup::cli::{Cli, Commands};
use nba_matchup::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    nba_matchup::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Compare(args) => {
            tracing::debug!("Running matchup comparison");
            args.execute(&config).await?;
        }
        Commands::Form(args) => {
            tracing::debug!("Computing recent form");
            args.execute(&config).await?;
        }
        Commands::Teams(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Provider: {} ({}, timeout {}s)",
                config.provider.base_url, config.provider.season_type, config.provider.timeout_secs
            );
            println!("  Season: {}", config.matchup.season);
            println!(
                "  Form: segments of {} games, weights {:?}",
                config.form.segment_size,
                config
                    .form
                    .weights
                    .iter()
                    .map(|w| w.to_string())
                    .collect::<Vec<_>>()
            );
            println!("  Lookback: {} games", config.form.lookback());
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
