//! Comparison types

use crate::form::FormScore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Season signals for one side of a matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSignals {
    /// Season net efficiency rating
    pub efficiency: Decimal,
    /// Weighted recent form, `None` when unavailable
    pub form: Option<FormScore>,
}

impl TeamSignals {
    pub fn new(efficiency: Decimal, form: Option<FormScore>) -> Self {
        Self { efficiency, form }
    }
}

/// Signals the comparator votes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Season net rating
    NetRating,
    /// Weighted recent plus/minus
    RecentForm,
}

/// Outcome of a single signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Award {
    /// Point to team A
    TeamA,
    /// Point to team B
    TeamB,
    /// Signal was equal, no point
    Neither,
    /// Signal unavailable for at least one team
    Skipped,
}

impl Award {
    /// Same outcome with the teams swapped
    pub fn flip(self) -> Self {
        match self {
            Award::TeamA => Award::TeamB,
            Award::TeamB => Award::TeamA,
            other => other,
        }
    }
}

/// Per-signal outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalOutcome {
    pub signal: Signal,
    pub award: Award,
}

/// Overall lean of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    TeamA,
    TeamB,
    Even,
}

impl Verdict {
    /// Same verdict with the teams swapped
    pub fn flip(self) -> Self {
        match self {
            Verdict::TeamA => Verdict::TeamB,
            Verdict::TeamB => Verdict::TeamA,
            Verdict::Even => Verdict::Even,
        }
    }
}

/// Result of comparing two teams.
///
/// Scores are always the count of signals awarded to each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    score_a: u8,
    score_b: u8,
    verdict: Verdict,
    outcomes: Vec<SignalOutcome>,
}

impl ComparisonResult {
    pub(crate) fn from_outcomes(outcomes: Vec<SignalOutcome>) -> Self {
        let count = |award: Award| outcomes.iter().filter(|o| o.award == award).count() as u8;
        let score_a = count(Award::TeamA);
        let score_b = count(Award::TeamB);

        let verdict = if score_a > score_b {
            Verdict::TeamA
        } else if score_b > score_a {
            Verdict::TeamB
        } else {
            Verdict::Even
        };

        Self {
            score_a,
            score_b,
            verdict,
            outcomes,
        }
    }

    pub fn score_a(&self) -> u8 {
        self.score_a
    }

    pub fn score_b(&self) -> u8 {
        self.score_b
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn outcomes(&self) -> &[SignalOutcome] {
        &self.outcomes
    }

    /// Award for a given signal
    pub fn award(&self, signal: Signal) -> Option<Award> {
        self.outcomes
            .iter()
            .find(|o| o.signal == signal)
            .map(|o| o.award)
    }
}
