//! Composite comparison module
//!
//! Votes net rating and recent form into a coarse lean between two teams

mod comparator;
mod types;

pub use comparator::compare;
pub use types::{Award, ComparisonResult, Signal, SignalOutcome, TeamSignals, Verdict};
