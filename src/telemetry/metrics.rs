//! Provider metrics
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding application installs a recorder.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Team game log request
    GameLog,
    /// Advanced dashboard request
    Dashboard,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::GameLog => "nba_matchup_game_log_latency_ms",
            LatencyMetric::Dashboard => "nba_matchup_dashboard_latency_ms",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = metric.name();
    let value_ms = duration.as_secs_f64() * 1000.0;

    ::metrics::histogram!(metric_name).record(value_ms);
    tracing::debug!(metric = metric_name, value_ms, "Recording latency");
}

/// Count a failed provider request
pub fn record_provider_error(endpoint: &str) {
    ::metrics::counter!("nba_matchup_provider_errors_total", "endpoint" => endpoint.to_string())
        .increment(1);
}
