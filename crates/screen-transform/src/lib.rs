#![deny(unsafe_code)]

pub mod breakdown;
pub mod pipeline;
pub mod scoring;

pub use breakdown::{BreakdownLine, ScoreBreakdown, score_breakdown};
pub use pipeline::{Derivation, DerivedRow, recompute};
pub use scoring::{
    ScoreBand, SubscoreBand, composite_score, derive_status, dimension_value, score_band,
    subscore_band,
};
