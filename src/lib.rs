//! nba-matchup: Recent-form weighted NBA matchup comparison
//!
//! This library provides the core components for:
//! - Decay-weighted recent form from a team's game log
//! - Majority-of-signals comparison of two teams
//! - Team directory and stats.nba.com retrieval
//! - Matchup orchestration and text/JSON reporting
//! - Structured logging and provider metrics

pub mod cli;
pub mod compare;
pub mod config;
pub mod form;
pub mod matchup;
pub mod provider;
pub mod season;
pub mod telemetry;
