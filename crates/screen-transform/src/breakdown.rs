//! Per-dimension explanation of a composite score.

use serde::Serialize;

use screen_model::{Dimension, Record, ScoreColumns, Weights};

use crate::scoring::{SubscoreBand, composite_score, dimension_value, subscore_band};

/// One dimension's share of a composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub dimension: Dimension,
    pub label: &'static str,
    pub value: f64,
    pub weight: u8,
    /// Display share of the total weight, in percent.
    pub percent: u32,
    /// `value * weight / total_weight`, to one decimal.
    pub contribution: f64,
    pub band: SubscoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub lines: Vec<BreakdownLine>,
    pub composite: i64,
}

/// Explains a record's composite score.
///
/// Contributions are rounded for display and need not add up to the
/// composite.
pub fn score_breakdown(record: &Record, scores: &ScoreColumns, weights: &Weights) -> ScoreBreakdown {
    let total_weight = weights.total();
    let percentages = weights.percentages();
    let lines = weights
        .iter()
        .map(|(dimension, weight)| {
            let value = dimension_value(record, scores, dimension);
            let contribution = if total_weight == 0 {
                0.0
            } else {
                round_tenth(value * f64::from(weight.get()) / f64::from(total_weight))
            };
            BreakdownLine {
                dimension,
                label: dimension.label(),
                value,
                weight: weight.get(),
                percent: percentages[dimension.index()],
                contribution,
                band: subscore_band(value),
            }
        })
        .collect();
    ScoreBreakdown {
        lines,
        composite: composite_score(record, scores, weights),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
