//! Recent form module
//!
//! Turns a team's game log into a decay-weighted point differential

mod aggregator;
mod types;

pub use aggregator::{compute_form_score, FormAggregator};
pub use types::{
    FormBreakdown, FormError, FormScore, GameLog, GameResult, SegmentSummary, SegmentWeights,
};
