//! Composite score and status rules.

use serde::Serialize;

use screen_model::{
    Dimension, REJECT_THRESHOLD, Record, SHORTLIST_THRESHOLD, ScoreColumns, Status, Weights,
};

/// Raw value of one dimension's score cell; missing or unparsable reads as 0.
pub fn dimension_value(record: &Record, scores: &ScoreColumns, dimension: Dimension) -> f64 {
    record.number(scores.get(dimension))
}

/// Weighted mean of the four dimension values, scaled by 10 and rounded.
///
/// Returns 0 when every weight is 0. Dimension values are used as found,
/// so the result is not clamped to 0..=100.
pub fn composite_score(record: &Record, scores: &ScoreColumns, weights: &Weights) -> i64 {
    let total_weight = weights.total();
    if total_weight == 0 {
        return 0;
    }
    let weighted_sum: f64 = weights
        .iter()
        .map(|(dimension, weight)| {
            dimension_value(record, scores, dimension) * f64::from(weight.get())
        })
        .sum();
    let relative = weighted_sum / f64::from(total_weight);
    (relative * 10.0).round() as i64
}

/// Status for a score, unless the user forced one.
pub fn derive_status(score: i64, override_status: Option<Status>) -> Status {
    override_status.unwrap_or_else(|| Status::from_score(score))
}

/// Presentation band of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

pub fn score_band(score: i64) -> ScoreBand {
    if score >= SHORTLIST_THRESHOLD {
        ScoreBand::High
    } else if score < REJECT_THRESHOLD {
        ScoreBand::Low
    } else {
        ScoreBand::Mid
    }
}

/// Presentation band of a single 0-10 dimension value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscoreBand {
    Good,
    Fair,
    Poor,
}

pub fn subscore_band(value: f64) -> SubscoreBand {
    if value >= 7.0 {
        SubscoreBand::Good
    } else if value >= 5.0 {
        SubscoreBand::Fair
    } else {
        SubscoreBand::Poor
    }
}
