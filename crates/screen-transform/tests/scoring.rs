use proptest::prelude::*;

use screen_map::infer_schema;
use screen_model::{
    CellValue, Dimension, FieldMap, Record, RecordId, Schema, Status, StatusOverrides, Weight,
    Weights,
};
use screen_transform::{composite_score, derive_status, recompute, score_breakdown};

const HEADERS: [&str; 5] = [
    "Name",
    "Education Score",
    "Domain Score",
    "Experience Score",
    "Tools Score",
];

fn record(row_number: usize, name: &str, values: [CellValue; 4]) -> Record {
    let mut fields = FieldMap::new();
    fields.insert(HEADERS[0], CellValue::Text(name.to_string()));
    for (header, value) in HEADERS[1..].iter().zip(values) {
        fields.insert(*header, value);
    }
    Record::new(RecordId::derive("test", 1, row_number), row_number, fields)
}

fn uniform(row_number: usize, name: &str, value: f64) -> Record {
    record(
        row_number,
        name,
        [
            CellValue::Number(value),
            CellValue::Number(value),
            CellValue::Number(value),
            CellValue::Number(value),
        ],
    )
}

fn schema_for(records: &[Record]) -> Schema {
    infer_schema(&records[0].fields)
}

fn weights(values: [u32; 4]) -> Weights {
    let mut weights = Weights::default();
    for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
        weights.set(dimension, Weight::new(value).unwrap());
    }
    weights
}

#[test]
fn three_candidates_fall_into_three_statuses() {
    let records = vec![
        uniform(1, "Ann", 8.0),
        uniform(2, "Bob", 5.0),
        uniform(3, "Cid", 2.0),
    ];
    let schema = schema_for(&records);
    let derivation = recompute(
        &records,
        &schema,
        &Weights::default(),
        &StatusOverrides::new(),
    );

    let scores: Vec<i64> = derivation.rows.iter().map(|r| r.composite_score).collect();
    let statuses: Vec<Status> = derivation.rows.iter().map(|r| r.status).collect();
    assert_eq!(scores, vec![80, 50, 20]);
    assert_eq!(
        statuses,
        vec![Status::Shortlisted, Status::Borderline, Status::Rejected]
    );
    assert_eq!(derivation.counts.shortlisted, 1);
    assert_eq!(derivation.counts.borderline, 1);
    assert_eq!(derivation.counts.rejected, 1);
}

#[test]
fn override_moves_a_candidate_without_touching_its_score() {
    let records = vec![
        uniform(1, "Ann", 8.0),
        uniform(2, "Bob", 5.0),
        uniform(3, "Cid", 2.0),
    ];
    let schema = schema_for(&records);
    let mut overrides = StatusOverrides::new();
    overrides.set(records[2].id, Status::Shortlisted);

    let derivation = recompute(&records, &schema, &Weights::default(), &overrides);
    assert_eq!(derivation.rows[2].composite_score, 20);
    assert_eq!(derivation.rows[2].status, Status::Shortlisted);
    assert_eq!(derivation.counts.shortlisted, 2);
    assert_eq!(derivation.counts.borderline, 1);
    assert_eq!(derivation.counts.rejected, 0);
}

#[test]
fn weights_shift_the_composite() {
    let records = vec![record(
        1,
        "Ann",
        [
            CellValue::Number(10.0),
            CellValue::Number(0.0),
            CellValue::Number(0.0),
            CellValue::Number(0.0),
        ],
    )];
    let schema = schema_for(&records);

    assert_eq!(
        composite_score(&records[0], &schema.score_columns, &Weights::default()),
        25
    );
    assert_eq!(
        composite_score(&records[0], &schema.score_columns, &weights([10, 0, 0, 0])),
        100
    );
    assert_eq!(
        composite_score(&records[0], &schema.score_columns, &weights([0, 0, 0, 0])),
        0
    );
}

#[test]
fn text_cells_parse_their_numeric_prefix() {
    let records = vec![record(
        1,
        "Ann",
        [
            CellValue::Text("7.5/10".to_string()),
            CellValue::Text("n/a".to_string()),
            CellValue::Empty,
            CellValue::Text(" 9".to_string()),
        ],
    )];
    let schema = schema_for(&records);
    // (7.5 + 0 + 0 + 9) / 4 * 10 = 41.25
    assert_eq!(
        composite_score(&records[0], &schema.score_columns, &Weights::default()),
        41
    );
}

#[test]
fn rounding_is_half_away_from_zero() {
    let records = vec![record(
        1,
        "Ann",
        [
            CellValue::Number(7.25),
            CellValue::Number(0.0),
            CellValue::Number(0.0),
            CellValue::Number(0.0),
        ],
    )];
    let schema = schema_for(&records);
    // 7.25 * 10 = 72.5
    assert_eq!(
        composite_score(&records[0], &schema.score_columns, &weights([10, 0, 0, 0])),
        73
    );
}

#[test]
fn scores_are_not_clamped() {
    let records = vec![uniform(1, "Ann", 14.0)];
    let schema = schema_for(&records);
    assert_eq!(
        composite_score(&records[0], &schema.score_columns, &Weights::default()),
        140
    );
}

#[test]
fn missing_score_columns_score_zero() {
    let fields: FieldMap = [("Name", CellValue::Text("Ann".to_string()))]
        .into_iter()
        .collect();
    let records = vec![Record::new(RecordId::derive("test", 1, 1), 1, fields)];
    let schema = schema_for(&records);
    let derivation = recompute(
        &records,
        &schema,
        &Weights::default(),
        &StatusOverrides::new(),
    );
    assert_eq!(derivation.rows[0].composite_score, 0);
    assert_eq!(derivation.rows[0].status, Status::Rejected);
}

#[test]
fn breakdown_explains_each_dimension() {
    let records = vec![record(
        1,
        "Ann",
        [
            CellValue::Number(8.0),
            CellValue::Number(6.0),
            CellValue::Number(4.0),
            CellValue::Number(7.0),
        ],
    )];
    let schema = schema_for(&records);
    let breakdown = score_breakdown(&records[0], &schema.score_columns, &weights([10, 5, 5, 0]));

    assert_eq!(breakdown.composite, 65);
    assert_eq!(breakdown.lines.len(), 4);
    assert_eq!(breakdown.lines[0].label, "Education");
    assert_eq!(breakdown.lines[0].percent, 50);
    assert_eq!(breakdown.lines[0].contribution, 4.0);
    assert_eq!(breakdown.lines[1].contribution, 1.5);
    assert_eq!(breakdown.lines[3].percent, 0);
    assert_eq!(breakdown.lines[3].contribution, 0.0);

    let zero = score_breakdown(&records[0], &schema.score_columns, &weights([0, 0, 0, 0]));
    assert_eq!(zero.composite, 0);
    assert!(zero.lines.iter().all(|line| line.contribution == 0.0));
}

fn values_strategy() -> impl Strategy<Value = [f64; 4]> {
    prop::array::uniform4(0.0f64..=10.0)
}

fn weights_strategy() -> impl Strategy<Value = [u32; 4]> {
    prop::array::uniform4(0u32..=10)
}

fn numbers(values: [f64; 4]) -> [CellValue; 4] {
    values.map(CellValue::Number)
}

proptest! {
    #[test]
    fn zero_total_weight_scores_zero(values in values_strategy()) {
        let records = vec![record(1, "Ann", numbers(values))];
        let schema = schema_for(&records);
        prop_assert_eq!(
            composite_score(&records[0], &schema.score_columns, &weights([0, 0, 0, 0])),
            0
        );
    }

    #[test]
    fn raising_one_dimension_never_lowers_the_score(
        values in values_strategy(),
        weight_values in weights_strategy(),
        dimension in 0usize..4,
        bump in 0.0f64..=5.0,
    ) {
        let mut raised = values;
        raised[dimension] += bump;
        let records = vec![
            record(1, "Low", numbers(values)),
            record(2, "High", numbers(raised)),
        ];
        let schema = schema_for(&records);
        let weights = weights(weight_values);
        let low = composite_score(&records[0], &schema.score_columns, &weights);
        let high = composite_score(&records[1], &schema.score_columns, &weights);
        prop_assert!(high >= low);
    }

    #[test]
    fn overrides_always_win(score in -50i64..=200, pick in 0usize..3) {
        let forced = Status::ALL[pick];
        prop_assert_eq!(derive_status(score, Some(forced)), forced);
    }

    #[test]
    fn recompute_is_idempotent(
        rows in prop::collection::vec(values_strategy(), 1..20),
        weight_values in weights_strategy(),
    ) {
        let records: Vec<Record> = rows
            .into_iter()
            .enumerate()
            .map(|(idx, values)| record(idx + 1, "Candidate", numbers(values)))
            .collect();
        let schema = schema_for(&records);
        let weights = weights(weight_values);
        let overrides = StatusOverrides::new();
        let first = recompute(&records, &schema, &weights, &overrides);
        let second = recompute(&records, &schema, &weights, &overrides);
        prop_assert_eq!(first, second);
    }
}
