//! Majority-of-signals matchup comparison

use super::{Award, ComparisonResult, Signal, SignalOutcome, TeamSignals};
use std::cmp::Ordering;

/// Compare two teams, one point per signal on strict inequality.
///
/// Recent form only votes when both teams have a form score; otherwise it is
/// recorded as skipped and awards nothing.
pub fn compare(team_a: &TeamSignals, team_b: &TeamSignals) -> ComparisonResult {
    let net_rating = SignalOutcome {
        signal: Signal::NetRating,
        award: award_for(team_a.efficiency.cmp(&team_b.efficiency)),
    };

    let recent_form = SignalOutcome {
        signal: Signal::RecentForm,
        award: match (team_a.form, team_b.form) {
            (Some(a), Some(b)) => award_for(a.cmp(&b)),
            _ => Award::Skipped,
        },
    };

    let result = ComparisonResult::from_outcomes(vec![net_rating, recent_form]);

    tracing::debug!(
        score_a = result.score_a(),
        score_b = result.score_b(),
        verdict = ?result.verdict(),
        "Compared team signals"
    );

    result
}

fn award_for(ordering: Ordering) -> Award {
    match ordering {
        Ordering::Greater => Award::TeamA,
        Ordering::Less => Award::TeamB,
        Ordering::Equal => Award::Neither,
    }
}
