use screen_map::{infer_schema, infer_schema_opt};
use screen_model::{CellValue, Dimension, FieldMap, Schema};

fn first_row(headers: &[&str]) -> FieldMap {
    headers
        .iter()
        .map(|header| (header.to_string(), CellValue::Text("x".to_string())))
        .collect()
}

fn export_headers() -> FieldMap {
    first_row(&[
        "Candidate Name",
        "Email Address",
        "Mobile",
        "Years of Experience",
        "Domain Match",
        "Skills",
        "Critical Requirements",
        "Non Critical Requirements",
        "Recruiter Notes",
        "Profile Summary",
        "Redflags",
        "Education Score",
        "Domain Score",
        "Experience Score",
        "Tools & Technologies Score",
    ])
}

#[test]
fn binds_roles_from_a_typical_export() {
    let schema = infer_schema(&export_headers());
    let mapping = &schema.mapping;

    assert_eq!(mapping.candidate.as_deref(), Some("Candidate Name"));
    assert_eq!(mapping.email.as_deref(), Some("Email Address"));
    assert_eq!(mapping.phone.as_deref(), Some("Mobile"));
    assert_eq!(mapping.experience.as_deref(), Some("Years of Experience"));
    assert_eq!(mapping.domain_match.as_deref(), Some("Domain Match"));
    assert_eq!(mapping.skills.as_deref(), Some("Skills"));
    assert_eq!(mapping.bound_count(), 6);
}

#[test]
fn resolves_data_columns_by_first_match() {
    let schema = infer_schema(&export_headers());

    assert_eq!(schema.column_header("Exp"), Some("Years of Experience"));
    assert_eq!(schema.column_header("Domain"), Some("Domain Match"));
    assert_eq!(schema.column_header("Skills"), Some("Skills"));
    assert_eq!(schema.column_header("Critical"), Some("Critical Requirements"));
    assert_eq!(
        schema.column_header("NonCritical"),
        Some("Non Critical Requirements")
    );
    assert_eq!(schema.column_header("Notes"), Some("Recruiter Notes"));
    assert_eq!(schema.column_header("Summary"), Some("Profile Summary"));
    assert_eq!(schema.column_header("Redflag"), Some("Redflags"));
}

#[test]
fn resolves_one_score_column_per_dimension() {
    let schema = infer_schema(&export_headers());
    let scores = &schema.score_columns;

    assert_eq!(scores.get(Dimension::Education), Some("Education Score"));
    assert_eq!(scores.get(Dimension::DomainFit), Some("Domain Score"));
    assert_eq!(scores.get(Dimension::Experience), Some("Experience Score"));
    assert_eq!(
        scores.get(Dimension::Skills),
        Some("Tools & Technologies Score")
    );
}

#[test]
fn matching_ignores_case() {
    let schema = infer_schema(&first_row(&["FULL NAME", "EDUCATION SCORE"]));
    assert_eq!(schema.mapping.candidate.as_deref(), Some("FULL NAME"));
    assert_eq!(
        schema.score_columns.get(Dimension::Education),
        Some("EDUCATION SCORE")
    );
}

#[test]
fn unmatched_roles_stay_unbound() {
    let schema = infer_schema(&first_row(&["Foo", "Bar"]));
    assert_eq!(schema.mapping.bound_count(), 0);
    assert!(schema.columns.iter().all(|c| c.header.is_none()));
    assert!(schema.score_columns.iter().all(|(_, h)| h.is_none()));
}

#[test]
fn empty_dataset_gives_unbound_schema() {
    assert_eq!(infer_schema_opt(None), Schema::unbound());
}
