//! Text rendering for matchup and form reports

use super::MatchupReport;
use crate::compare::Verdict;
use crate::form::{FormBreakdown, SegmentWeights};
use crate::provider::Team;
use crate::season::Season;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

const FORM_UNAVAILABLE: &str =
    "Could not compute weighted recent plus/minus for one or both teams.";
const TOO_CLOSE: &str =
    "Prediction: The matchup appears very close based on the available metrics.";

/// Render a matchup report the way the command line prints it
pub fn render_text(report: &MatchupReport, explain: Option<&SegmentWeights>) -> String {
    MatchupText { report, explain }.to_string()
}

struct MatchupText<'a> {
    report: &'a MatchupReport,
    explain: Option<&'a SegmentWeights>,
}

impl fmt::Display for MatchupText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let comparison = &report.comparison;
        let (a, b) = (&report.team_a, &report.team_b);
        let (name_a, name_b) = (a.team.full_name, b.team.full_name);

        writeln!(f, "{} vs {} ({})", name_a, name_b, report.season)?;

        writeln!(f)?;
        for side in [a, b] {
            let (name, net) = (side.team.full_name, side.efficiency.net_rating);
            writeln!(f, "{} Advanced NET_RATING: {}", name, net)?;
        }

        writeln!(f)?;
        for side in [a, b] {
            let (name, efg) = (side.team.full_name, side.efficiency.effective_fg_pct);
            writeln!(f, "{} Effective FG% (EFG_PCT): {}", name, efg)?;
        }

        writeln!(f)?;
        match (a.form, b.form) {
            (Some(form_a), Some(form_b)) => {
                writeln!(f, "{} Weighted Recent Plus/Minus: {}", name_a, form_a)?;
                writeln!(f, "{} Weighted Recent Plus/Minus: {}", name_b, form_b)?;
            }
            _ => writeln!(f, "{}", FORM_UNAVAILABLE)?,
        }

        writeln!(f)?;
        writeln!(f, "Composite Comparison:")?;
        writeln!(f, "{} composite score: {}", name_a, comparison.score_a())?;
        writeln!(f, "{} composite score: {}", name_b, comparison.score_b())?;

        writeln!(f)?;
        let prediction = match comparison.verdict() {
            Verdict::TeamA => favored(name_a),
            Verdict::TeamB => favored(name_b),
            Verdict::Even => TOO_CLOSE.to_string(),
        };
        writeln!(f, "{}", prediction)?;

        if let Some(weights) = self.explain {
            writeln!(f)?;
            f.write_str(&stat_explanations(weights))?;
        }
        Ok(())
    }
}

fn favored(name: &str) -> String {
    format!(
        "Prediction: {} is more likely to win based on advanced stats and recent performance.",
        name
    )
}

/// Short explanation of each statistic in the report
pub fn stat_explanations(weights: &SegmentWeights) -> String {
    let weighting = weights
        .weights
        .iter()
        .map(|w| format!("{}%", (*w * Decimal::ONE_HUNDRED).normalize()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from("Stat Explanations:\n");
    out.push_str(
        "NET_RATING: Net Rating: Offensive rating minus defensive rating \
         (points per 100 possessions). Higher is better.\n",
    );
    out.push_str(
        "EFG_PCT: Effective FG%: Adjusts for the extra value of 3-pointers, \
         a key measure of shooting efficiency.\n",
    );
    out.push_str(&format!(
        "Weighted_PM: Weighted Recent Plus/Minus: A composite of recent game point \
         differentials in blocks of {} games, most recent first, ",
        weights.segment_size
    ));
    out.push_str(&format!("weighted {}.\n", weighting));
    out
}

fn two_dp(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Render one team's segment-by-segment form
pub fn render_form_text(team: &Team, season: Season, breakdown: &FormBreakdown) -> String {
    FormText {
        team,
        season,
        breakdown,
    }
    .to_string()
}

struct FormText<'a> {
    team: &'a Team,
    season: Season,
    breakdown: &'a FormBreakdown,
}

impl fmt::Display for FormText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team = self.team;
        let breakdown = self.breakdown;
        let games: usize = breakdown.segments.iter().map(|s| s.games).sum();

        let (name, abbr) = (team.full_name, team.abbreviation);
        write!(f, "{} ({}) recent form, ", name, abbr)?;
        writeln!(f, "{}: {} games used", self.season, games)?;

        if !breakdown.segments.is_empty() {
            writeln!(f, " Segment  Games     Mean  Weight")?;
            for segment in &breakdown.segments {
                let number = segment.index + 1;
                let count = segment.games;
                let mean = two_dp(segment.mean);
                let weight = two_dp(segment.weight);
                writeln!(f, "{:>8} {:>6} {:>8} {:>7}", number, count, mean, weight)?;
            }
        }

        match breakdown.score {
            Some(score) => {
                let used = two_dp(breakdown.total_weight);
                write!(f, "Weighted Recent Plus/Minus: {}", score)?;
                writeln!(f, " (weight used {})", used)
            }
            None => f.write_str("Weighted Recent Plus/Minus: unavailable, no games played\n"),
        }
    }
}
