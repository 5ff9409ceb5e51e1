#![allow(missing_docs)]

use screen_model::{
    CellValue, Dimension, FieldMap, Record, RecordId, Schema, SortDirection, SortState, Status,
    StatusOverrides, Weight, Weights,
};

#[test]
fn test_weights_serialize_as_plain_integers() {
    let weights = Weights::default().with(Dimension::Experience, Weight::new(9).unwrap());
    let json = serde_json::to_string(&weights).unwrap();
    assert_eq!(json, r#"{"values":[5,5,9,5]}"#);

    let back: Weights = serde_json::from_str(&json).unwrap();
    assert_eq!(back, weights);

    // Out-of-range values are rejected on the way in.
    assert!(serde_json::from_str::<Weights>(r#"{"values":[5,5,11,5]}"#).is_err());
}

#[test]
fn test_overrides_are_keyed_by_record_id() {
    let first = RecordId::derive("candidates.csv", 1, 1);
    let second = RecordId::derive("candidates.csv", 1, 2);

    let mut overrides = StatusOverrides::new();
    overrides.set(first, Status::Rejected);
    overrides.set(first, Status::Shortlisted);

    assert_eq!(overrides.get(&first), Some(Status::Shortlisted));
    assert_eq!(overrides.get(&second), None);
    assert_eq!(overrides.len(), 1);

    overrides.clear();
    assert!(overrides.is_empty());
}

#[test]
fn test_record_serializes_with_hex_id() {
    let fields: FieldMap = [
        ("Name", CellValue::Text("Ann".to_string())),
        ("Education Score", CellValue::Number(8.0)),
        ("Notes", CellValue::Empty),
    ]
    .into_iter()
    .collect();
    let id = RecordId::derive("candidates.csv", 1, 1);
    let record = Record::new(id, 1, fields);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["id"], serde_json::Value::String(id.to_hex()));
    assert_eq!(value["row_number"], 1);

    let back: Record = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_unbound_schema_has_full_catalog() {
    let schema = Schema::unbound();
    assert_eq!(schema.columns.len(), 12);
    assert_eq!(schema.mapping.bound_count(), 0);
    assert!(schema.score_columns.iter().all(|(_, header)| header.is_none()));
    assert_eq!(schema.column_header("Exp"), None);
}

#[test]
fn test_sort_state_default_is_inactive() {
    let mut sort = SortState::default();
    assert!(!sort.is_active());
    sort.select("Exp", Some(SortDirection::Descending));
    assert!(sort.is_active());
    sort.clear();
    assert_eq!(sort, SortState::default());
}
