//! Recent-form types

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single played game from one team's point of view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Provider game identifier
    pub game_id: String,
    /// Date the game was played
    pub date: NaiveDate,
    /// Matchup label, e.g. "BOS vs. NYK"
    pub matchup: String,
    /// Team score minus opponent score
    pub point_differential: i32,
}

impl GameResult {
    /// Create a game result with only the fields aggregation needs
    pub fn new(date: NaiveDate, point_differential: i32) -> Self {
        Self {
            game_id: String::new(),
            date,
            matchup: String::new(),
            point_differential,
        }
    }
}

/// A team's game log, always ordered most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameLog {
    games: Vec<GameResult>,
}

impl GameLog {
    /// Build a log from games in any order.
    ///
    /// Sorting is stable, so games sharing a date keep their provider order.
    pub fn from_games(mut games: Vec<GameResult>) -> Self {
        games.sort_by_key(|g| std::cmp::Reverse(g.date));
        Self { games }
    }

    /// Games, most recent first
    pub fn games(&self) -> &[GameResult] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl FromIterator<GameResult> for GameLog {
    fn from_iter<I: IntoIterator<Item = GameResult>>(iter: I) -> Self {
        Self::from_games(iter.into_iter().collect())
    }
}

/// Decay-weighted recent point differential for one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormScore(Decimal);

impl FormScore {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for FormScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

/// Recency weighting policy: segment length and per-segment weights.
///
/// Segment `i` covers games `[i * segment_size, (i + 1) * segment_size)` of the
/// most-recent-first log and carries `weights[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentWeights {
    /// Games per segment
    #[serde(default = "default_segment_size")]
    pub segment_size: usize,
    /// Weight per segment, most recent segment first
    #[serde(default = "default_weights")]
    pub weights: Vec<Decimal>,
}

fn default_segment_size() -> usize {
    10
}
fn default_weights() -> Vec<Decimal> {
    vec![dec!(0.60), dec!(0.20), dec!(0.10), dec!(0.05)]
}

impl Default for SegmentWeights {
    fn default() -> Self {
        Self {
            segment_size: default_segment_size(),
            weights: default_weights(),
        }
    }
}

impl SegmentWeights {
    /// Total games the table can look back over
    pub fn lookback(&self) -> usize {
        self.segment_size * self.weights.len()
    }

    /// Reject tables that could yield an undefined score for a non-empty log
    pub fn validate(&self) -> Result<(), FormError> {
        if self.segment_size == 0 {
            return Err(FormError::InvalidWeights("segment_size must be at least 1".into()));
        }
        if self.weights.is_empty() {
            return Err(FormError::InvalidWeights(
                "at least one segment weight is required".to_string(),
            ));
        }
        if let Some((i, w)) = self
            .weights
            .iter()
            .enumerate()
            .find(|(_, w)| **w <= Decimal::ZERO)
        {
            return Err(FormError::InvalidWeights(format!(
                "weight for segment {} must be positive, got {}",
                i, w
            )));
        }
        Ok(())
    }
}

/// One segment's contribution to a form score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    /// Segment index, 0 = most recent
    pub index: usize,
    /// Games present in the segment
    pub games: usize,
    /// Mean point differential over those games
    pub mean: Decimal,
    /// Policy weight applied to the mean
    pub weight: Decimal,
}

/// Form score together with the segments that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormBreakdown {
    /// Segments that contributed, most recent first
    pub segments: Vec<SegmentSummary>,
    /// Sum of the weights actually used
    pub total_weight: Decimal,
    /// Resulting score, `None` when no games were available
    pub score: Option<FormScore>,
}

/// Form aggregation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Weight table cannot be used
    #[error("Invalid segment weights: {0}")]
    InvalidWeights(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_game_log_sorts_most_recent_first() {
        let log = GameLog::from_games(vec![
            GameResult::new(date(2024, 11, 1), 3),
            GameResult::new(date(2025, 1, 15), -7),
            GameResult::new(date(2024, 12, 20), 12),
        ]);

        let diffs: Vec<i32> = log.games().iter().map(|g| g.point_differential).collect();
        assert_eq!(diffs, vec![-7, 12, 3]);
        assert_eq!(log.games()[0].date, date(2025, 1, 15));
    }

    #[test]
    fn test_game_log_same_date_keeps_order() {
        let log: GameLog = vec![
            GameResult::new(date(2025, 1, 1), 1),
            GameResult::new(date(2025, 1, 1), 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(log.games()[0].point_differential, 1);
        assert_eq!(log.games()[1].point_differential, 2);
    }

    #[test]
    fn test_game_log_same_date_stays_stable_among_older_games() {
        let log = GameLog::from_games(vec![
            GameResult::new(date(2024, 12, 1), 9),
            GameResult::new(date(2025, 1, 1), 1),
            GameResult::new(date(2024, 12, 1), 8),
            GameResult::new(date(2025, 1, 1), 2),
        ]);

        let diffs: Vec<i32> = log.games().iter().map(|g| g.point_differential).collect();
        assert_eq!(diffs, vec![1, 2, 9, 8]);
    }

    #[test]
    fn test_empty_game_log() {
        let log = GameLog::default();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.games().is_empty());
    }

    #[test]
    fn test_form_score_display() {
        assert_eq!(FormScore::new(dec!(3.14159)).to_string(), "3.14");
        assert_eq!(FormScore::new(dec!(-2)).to_string(), "-2.00");
        assert_eq!(FormScore::new(dec!(1.005)).to_string(), "1.01");
        assert_eq!(FormScore::new(dec!(7) / dec!(0.95)).to_string(), "7.37");
    }

    #[test]
    fn test_default_weights() {
        let weights = SegmentWeights::default();
        assert_eq!(weights.segment_size, 10);
        assert_eq!(
            weights.weights,
            vec![dec!(0.60), dec!(0.20), dec!(0.10), dec!(0.05)]
        );
        assert_eq!(weights.lookback(), 40);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_segment_size() {
        let weights = SegmentWeights {
            segment_size: 0,
            weights: vec![dec!(1)],
        };
        let result = weights.validate();
        assert!(matches!(result, Err(FormError::InvalidWeights(_))));
    }

    #[test]
    fn test_validate_rejects_empty_weights() {
        let weights = SegmentWeights {
            segment_size: 10,
            weights: vec![],
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_weight() {
        let weights = SegmentWeights {
            segment_size: 10,
            weights: vec![dec!(0.6), dec!(0)],
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("segment 1"));
    }

    #[test]
    fn test_weights_deserialize_partial() {
        let weights: SegmentWeights = toml::from_str("segment_size = 5").unwrap();
        assert_eq!(weights.segment_size, 5);
        assert_eq!(weights.weights.len(), 4);
    }
}
