//! Candidate detail view.

use std::borrow::Cow;

use serde::Serialize;

use screen_model::{Dimension, FieldMapping, Record, RecordId, Schema, Status};
use screen_transform::{
    DerivedRow, ScoreBand, SubscoreBand, dimension_value, score_band, subscore_band,
};

pub const UNKNOWN_CANDIDATE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscore {
    pub dimension: Dimension,
    pub label: &'static str,
    pub value: f64,
    pub band: SubscoreBand,
}

/// Everything shown for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateDetail {
    pub id: RecordId,
    pub row_number: usize,
    pub name: String,
    pub initials: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub composite_score: i64,
    pub score_band: ScoreBand,
    pub status: Status,
    pub subscores: Vec<Subscore>,
    /// Non-empty fields in header order.
    pub fields: Vec<(String, String)>,
}

impl CandidateDetail {
    pub fn from_row(row: &DerivedRow<'_>, schema: &Schema) -> Self {
        let record = row.record;
        let name = display_name(record, &schema.mapping);
        let subscores = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let value = dimension_value(record, &schema.score_columns, dimension);
                Subscore {
                    dimension,
                    label: dimension.label(),
                    value,
                    band: subscore_band(value),
                }
            })
            .collect();
        let fields = record
            .fields
            .iter()
            .filter(|(_, value)| !value.is_blank())
            .map(|(header, value)| (header.to_string(), value.as_display().into_owned()))
            .collect();
        Self {
            id: record.id,
            row_number: record.row_number,
            initials: initials(candidate_name(record, &schema.mapping)),
            name,
            email: non_blank(record, schema.mapping.email.as_deref()),
            phone: non_blank(record, schema.mapping.phone.as_deref()),
            composite_score: row.composite_score,
            score_band: score_band(row.composite_score),
            status: row.status,
            subscores,
            fields,
        }
    }
}

fn candidate_name<'r>(record: &'r Record, mapping: &FieldMapping) -> Option<Cow<'r, str>> {
    let name = record.text(mapping.candidate.as_deref());
    (!name.trim().is_empty()).then_some(name)
}

/// Candidate name, or `Unknown` when unbound or blank.
pub fn display_name(record: &Record, mapping: &FieldMapping) -> String {
    candidate_name(record, mapping)
        .map_or_else(|| UNKNOWN_CANDIDATE.to_string(), |name| name.trim().to_string())
}

/// Avatar initials: first letter of a single word, first and last word
/// initials otherwise, `?` for no name.
pub fn initials<S: AsRef<str>>(name: Option<S>) -> String {
    let Some(name) = name else {
        return "?".to_string();
    };
    let parts: Vec<&str> = name.as_ref().split_whitespace().collect();
    let first_char = |word: &str| word.chars().next().into_iter().collect::<String>();
    match parts.as_slice() {
        [] => "?".to_string(),
        [only] => first_char(*only).to_uppercase(),
        [first, .., last] => format!("{}{}", first_char(*first), first_char(*last)).to_uppercase(),
    }
}

fn non_blank(record: &Record, header: Option<&str>) -> Option<String> {
    record
        .value(header)
        .filter(|value| !value.is_blank())
        .map(|value| value.as_display().trim().to_string())
}
