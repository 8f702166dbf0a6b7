//! Configuration integration tests

use nba_matchup::config::Config;
use nba_matchup::form::{FormAggregator, GameLog, GameResult};
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_config_drives_form_weights() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [matchup]
        season = "2022-23"

        [form]
        segment_size = 2
        weights = [0.5, 0.25]

        [telemetry]
        log_level = "info"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.matchup.season.to_string(), "2022-23");

    let aggregator = FormAggregator::new(config.form).unwrap();
    let latest = chrono::NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
    let log: GameLog = [6, 2, -4]
        .iter()
        .enumerate()
        .map(|(i, d)| GameResult::new(latest - chrono::Duration::days(i as i64), *d))
        .collect();

    // (4 * 0.5 + -4 * 0.25) / 0.75
    let score = aggregator.compute(&log).unwrap();
    assert_eq!(score.value(), dec!(1.00) / dec!(0.75));
}
