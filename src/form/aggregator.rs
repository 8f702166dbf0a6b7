//! Decay-weighted recent form aggregation

use super::{
    FormBreakdown, FormError, FormScore, GameLog, GameResult, SegmentSummary, SegmentWeights,
};
use rust_decimal::Decimal;

/// Computes form scores from a game log using a segment weight table
#[derive(Debug, Clone, Default)]
pub struct FormAggregator {
    weights: SegmentWeights,
}

impl FormAggregator {
    /// Create an aggregator, rejecting unusable weight tables
    pub fn new(weights: SegmentWeights) -> Result<Self, FormError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Weighted recent point differential, `None` for an empty log
    pub fn compute(&self, log: &GameLog) -> Option<FormScore> {
        self.breakdown(log).score
    }

    /// Form score plus the segments it was built from.
    ///
    /// Segments are consumed in order and processing stops at the first empty
    /// one. The result is divided by the weight mass actually used, which is
    /// not renormalized to 1 (a full 40-game log divides by 0.95).
    pub fn breakdown(&self, log: &GameLog) -> FormBreakdown {
        let games = log.games();
        let size = self.weights.segment_size;

        let mut segments = Vec::new();
        let mut weighted_sum = Decimal::ZERO;
        let mut total_weight = Decimal::ZERO;

        for (index, weight) in self.weights.weights.iter().copied().enumerate() {
            let start = index * size;
            if start >= games.len() {
                break;
            }
            let end = (start + size).min(games.len());
            let segment = &games[start..end];

            let mean = segment_mean(segment);
            weighted_sum += mean * weight;
            total_weight += weight;

            segments.push(SegmentSummary {
                index,
                games: segment.len(),
                mean,
                weight,
            });
        }

        let score = if total_weight > Decimal::ZERO {
            Some(FormScore::new(weighted_sum / total_weight))
        } else {
            None
        };

        tracing::trace!(
            games = games.len(),
            segments = segments.len(),
            total_weight = %total_weight,
            "Computed form breakdown"
        );

        FormBreakdown {
            segments,
            total_weight,
            score,
        }
    }
}

/// Form score with the default 10-game, 60/20/10/5 weighting
pub fn compute_form_score(log: &GameLog) -> Option<FormScore> {
    FormAggregator::default().compute(log)
}

fn segment_mean(segment: &[GameResult]) -> Decimal {
    let sum: i64 = segment.iter().map(|g| g.point_differential as i64).sum();
    Decimal::from(sum) / Decimal::from(segment.len())
}
