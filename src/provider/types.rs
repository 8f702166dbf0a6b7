//! Provider types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Season-level efficiency numbers for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    /// Offensive minus defensive rating per 100 possessions
    pub net_rating: Decimal,
    /// Effective field goal percentage (display only)
    pub effective_fg_pct: Decimal,
}

/// Stats provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// API answered with a non-success status
    #[error("Stats API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Named result set absent from the response
    #[error("Result set '{0}' not found")]
    MissingResultSet(String),
    /// Column absent from a result set
    #[error("Column '{column}' not found in result set '{result_set}'")]
    MissingColumn { result_set: String, column: String },
    /// Cell value could not be interpreted
    #[error("Invalid value for '{column}': {value}")]
    InvalidValue { column: String, value: String },
    /// Result set had no rows
    #[error("Result set '{0}' has no rows")]
    NoRows(String),
}
