#![deny(unsafe_code)]

//! Infers which headers carry which meaning.
//!
//! Inference runs once per load against the headers of the first record.
//! Matching is a case-insensitive substring test and the first header (in
//! source order) that matches wins. Anything that does not match stays
//! unbound; consumers read unbound roles as empty.

use tracing::debug;

use screen_model::{
    ColumnDefinition, Dimension, FieldMap, FieldMapping, Schema, ScoreColumns, default_columns,
};

/// Builds the schema for a dataset from its first row.
pub fn infer_schema(first: &FieldMap) -> Schema {
    let headers: Vec<Header<'_>> = first.headers().map(Header::new).collect();

    let mapping = infer_mapping(&headers);
    let columns = resolve_columns(&headers);
    let score_columns = resolve_score_columns(&headers);

    debug!(
        headers = headers.len(),
        bound_roles = mapping.bound_count(),
        resolved_columns = columns.iter().filter(|c| c.header.is_some()).count(),
        score_columns = score_columns.iter().filter(|(_, h)| h.is_some()).count(),
        "inferred schema"
    );

    Schema {
        mapping,
        columns,
        score_columns,
    }
}

/// Schema for an optional first row; `None` gives the unbound schema.
pub fn infer_schema_opt(first: Option<&FieldMap>) -> Schema {
    first.map_or_else(Schema::unbound, infer_schema)
}

struct Header<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> Header<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    fn contains(&self, fragment: &str) -> bool {
        self.lower.contains(fragment)
    }
}

fn first_header(headers: &[Header<'_>], pred: impl Fn(&Header<'_>) -> bool) -> Option<String> {
    headers
        .iter()
        .find(|header| pred(header))
        .map(|header| header.raw.to_string())
}

fn infer_mapping(headers: &[Header<'_>]) -> FieldMapping {
    FieldMapping {
        candidate: first_header(headers, |h| h.contains("name")),
        experience: first_header(headers, |h| {
            h.contains("years of experience") && !h.contains("relevant")
        }),
        domain_match: first_header(headers, |h| h.contains("domain match")),
        skills: first_header(headers, |h| h.contains("skill")),
        email: first_header(headers, |h| h.contains("email")),
        phone: first_header(headers, |h| h.contains("phone") || h.contains("mobile")),
    }
}

fn resolve_columns(headers: &[Header<'_>]) -> Vec<ColumnDefinition> {
    let mut columns = default_columns();
    for column in columns.iter_mut().filter(|c| !c.kind.is_structural()) {
        column.header = first_header(headers, |h| {
            !h.contains("score") && column.key_matches.iter().any(|m| h.contains(m))
        });
    }
    columns
}

fn resolve_score_columns(headers: &[Header<'_>]) -> ScoreColumns {
    let mut scores = ScoreColumns::default();
    for dimension in Dimension::ALL {
        scores.set(
            dimension,
            first_header(headers, |h| dimension.matches_score_header(h.raw)),
        );
    }
    scores
}
