//! Integration tests

mod config_test;
mod matchup_test;
