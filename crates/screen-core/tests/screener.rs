use screen_core::{
    Command, CoreError, FilterChange, PageChange, SCORE_EXPORT_HEADER, Screener, ViewMode,
};
use screen_ingest::{CsvCodec, Dataset, TabularCodec};
use screen_model::{Dimension, SortDirection, Status, StatusFilter, Weights};

const CSV: &str = "\
Candidate Name,Years of Experience,Domain Match,Skills,Education Score,Domain Score,Experience Score,Tools Score
Ann Lee,6,Yes,Rust|SQL,8,8,8,8
Bob Stone,3,no,Go,5,5,5,5
Cid Moss,1,no,,2,2,2,2
";

fn dataset(source: &str, csv: &str) -> Dataset {
    let rows = CsvCodec::default().decode(csv.as_bytes()).expect("decode");
    Dataset::new(source, rows)
}

fn loaded() -> Screener {
    let mut screener = Screener::new();
    screener.apply(Command::DatasetLoaded(dataset("candidates.csv", CSV)));
    screener
}

fn page_names(screener: &Screener) -> Vec<String> {
    screener
        .view()
        .page_rows
        .iter()
        .map(|row| row.record.text(Some("Candidate Name")).into_owned())
        .collect()
}

#[test]
fn load_scores_every_candidate() {
    let mut screener = Screener::new();
    let view = screener.update(Command::DatasetLoaded(dataset("candidates.csv", CSV)));

    let scores: Vec<i64> = view.page_rows.iter().map(|r| r.composite_score).collect();
    assert_eq!(scores, vec![80, 50, 20]);
    assert_eq!(view.counts.shortlisted, 1);
    assert_eq!(view.counts.borderline, 1);
    assert_eq!(view.counts.rejected, 1);
    assert_eq!(view.visible_count(), 3);
    assert_eq!(view.weight_percentages(), [25, 25, 25, 25]);
}

#[test]
fn override_wins_until_reload() {
    let mut screener = loaded();
    let third = screener.record_id_for_row(3).expect("row 3");

    let view = screener.update(Command::OverrideSet {
        record: third,
        status: Status::Shortlisted,
    });
    assert_eq!(view.counts.shortlisted, 2);
    assert_eq!(view.counts.borderline, 1);
    assert_eq!(view.counts.rejected, 0);
    assert_eq!(view.row(&third).map(|r| r.composite_score), Some(20));

    // Weight changes keep the override.
    let view = screener.update(Command::WeightChanged {
        dimension: Dimension::Education,
        value: 10,
    });
    assert_eq!(view.row(&third).map(|r| r.status), Some(Status::Shortlisted));

    screener.apply(Command::SortChanged {
        column: "Score".to_string(),
        direction: Some(SortDirection::Descending),
    });
    screener.apply(Command::DatasetLoaded(dataset("candidates.csv", CSV)));
    assert!(screener.overrides().is_empty());
    assert!(!screener.sort().is_active());
    assert_eq!(screener.generation(), 2);
    assert_ne!(screener.record_id_for_row(3), Some(third));
    assert_eq!(screener.view().counts.shortlisted, 1);
}

#[test]
fn unknown_override_target_is_ignored() {
    let mut screener = loaded();
    let stale = screener.record_id_for_row(1).expect("row 1");
    screener.apply(Command::DatasetLoaded(dataset("candidates.csv", CSV)));

    screener.apply(Command::OverrideSet {
        record: stale,
        status: Status::Rejected,
    });
    assert!(screener.overrides().is_empty());
}

#[test]
fn empty_dataset_keeps_previous_state() {
    let mut screener = loaded();
    let before = screener.records().to_vec();

    let view = screener.update(Command::DatasetLoaded(dataset("empty.csv", "Name\n")));
    assert_eq!(view.visible_count(), 3);
    assert_eq!(screener.records(), before.as_slice());
    assert_eq!(screener.generation(), 1);
}

#[test]
fn weight_change_recomputes_scores() {
    let mut screener = loaded();
    for dimension in [Dimension::DomainFit, Dimension::Experience, Dimension::Skills] {
        screener.apply(Command::WeightChanged {
            dimension,
            value: 0,
        });
    }
    let view = screener.update(Command::WeightChanged {
        dimension: Dimension::Education,
        value: 42,
    });
    assert_eq!(view.weights.get(Dimension::Education).get(), 10);
    assert_eq!(view.weight_percentages(), [100, 0, 0, 0]);
    assert_eq!(view.page_rows[0].composite_score, 80);
}

#[test]
fn weights_are_locked_on_the_board() {
    let mut screener = loaded();
    screener.apply(Command::ViewModeChanged(ViewMode::Board));
    let view = screener.update(Command::WeightChanged {
        dimension: Dimension::Education,
        value: 0,
    });
    assert_eq!(view.weights, Weights::default());

    let board = view.board();
    assert_eq!(board.lane(Status::Shortlisted).count(), 1);

    screener.apply(Command::ViewModeChanged(ViewMode::Table));
    let view = screener.update(Command::WeightChanged {
        dimension: Dimension::Education,
        value: 0,
    });
    assert_eq!(view.weights.get(Dimension::Education).get(), 0);
}

#[test]
fn filters_sort_and_page_compose() {
    let mut screener = loaded();
    screener.apply(Command::SortChanged {
        column: "Score".to_string(),
        direction: None,
    });
    assert_eq!(page_names(&screener), vec!["Cid Moss", "Bob Stone", "Ann Lee"]);

    screener.apply(Command::SortChanged {
        column: "Score".to_string(),
        direction: None,
    });
    assert_eq!(page_names(&screener), vec!["Ann Lee", "Bob Stone", "Cid Moss"]);

    screener.apply(Command::FilterChanged(FilterChange::Search("NO".to_string())));
    assert_eq!(page_names(&screener), vec!["Bob Stone", "Cid Moss"]);

    screener.apply(Command::PageChanged(PageChange::PageSize(1)));
    screener.apply(Command::PageChanged(PageChange::GoTo(2)));
    assert_eq!(page_names(&screener), vec!["Cid Moss"]);
    assert_eq!(screener.view().page.total_pages, 2);

    // Any filter change goes back to page 1.
    screener.apply(Command::FilterChanged(FilterChange::Status(
        StatusFilter::Only(Status::Rejected),
    )));
    assert_eq!(screener.pagination().page, 1);
    assert_eq!(page_names(&screener), vec!["Cid Moss"]);

    screener.apply(Command::FiltersCleared);
    let view = screener.view();
    assert_eq!(view.visible_count(), 3);
    assert_eq!(view.counts.total(), 3);
}

#[test]
fn pinned_columns_cannot_be_hidden() {
    let mut screener = loaded();
    let ids = |screener: &Screener| -> Vec<String> {
        screener
            .view()
            .columns
            .iter()
            .map(|c| c.id.clone())
            .collect()
    };
    assert_eq!(
        ids(&screener),
        vec!["Candidate", "Exp", "Domain", "Skills", "Redflag", "Subcards", "Score", "Status"]
    );

    screener.apply(Command::ColumnToggled {
        column: "Score".to_string(),
        visible: false,
    });
    screener.apply(Command::ColumnToggled {
        column: "Redflag".to_string(),
        visible: false,
    });
    screener.apply(Command::ColumnToggled {
        column: "Notes".to_string(),
        visible: true,
    });
    assert_eq!(
        ids(&screener),
        vec!["Candidate", "Exp", "Domain", "Skills", "Notes", "Subcards", "Score", "Status"]
    );
}

#[test]
fn detail_is_available_for_filtered_out_rows() {
    let mut screener = loaded();
    let first = screener.record_id_for_row(1).expect("row 1");
    screener.apply(Command::FilterChanged(FilterChange::Search(
        "nobody".to_string(),
    )));
    let view = screener.view();
    assert_eq!(view.visible_count(), 0);
    let detail = view.detail(&first).expect("detail");
    assert_eq!(detail.name, "Ann Lee");
    assert_eq!(detail.initials, "AL");
}

#[test]
fn export_appends_score_and_status_in_sort_order() {
    let mut screener = loaded();
    screener.apply(Command::SortChanged {
        column: "Score".to_string(),
        direction: Some(SortDirection::Ascending),
    });
    screener.apply(Command::FilterChanged(FilterChange::Search(
        "ann".to_string(),
    )));

    let bytes = screener.export(&CsvCodec::default()).expect("export");
    let text = String::from_utf8(bytes).expect("utf8");
    insta::assert_snapshot!(text.trim_end(), @r"
    Candidate Name,Years of Experience,Domain Match,Skills,Education Score,Domain Score,Experience Score,Tools Score,Composite Score,Screening Status
    Cid Moss,1,no,,2,2,2,2,20,Rejected
    Bob Stone,3,no,Go,5,5,5,5,50,Borderline
    Ann Lee,6,Yes,Rust|SQL,8,8,8,8,80,Shortlisted
    ");

    let rows = screener.export_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].headers().nth(8), Some(SCORE_EXPORT_HEADER));
}

#[test]
fn export_keeps_source_columns_that_share_a_derived_name() {
    let csv = "\
Name,Phone,Composite Score,Education Score,Domain Score,Experience Score,Tools Score
Ann,0712345678,99,8,8,8,8
";
    let mut screener = Screener::new();
    screener.apply(Command::DatasetLoaded(dataset("scored.csv", csv)));
    assert_eq!(
        screener.export_headers(),
        ("Composite Score (2)".to_string(), "Screening Status".to_string())
    );

    let bytes = screener.export(&CsvCodec::default()).expect("export");
    let text = String::from_utf8(bytes).expect("utf8");
    insta::assert_snapshot!(text.trim_end(), @r"
    Name,Phone,Composite Score,Education Score,Domain Score,Experience Score,Tools Score,Composite Score (2),Screening Status
    Ann,0712345678,99,8,8,8,8,80,Shortlisted
    ");
}

#[test]
fn leading_zero_phone_survives_detail_and_search() {
    let csv = "Name,Phone,Education Score\nAnn,0712345678,8\n";
    let mut screener = Screener::new();
    screener.apply(Command::DatasetLoaded(dataset("phones.csv", csv)));
    let id = screener.record_id_for_row(1).expect("row 1");

    screener.apply(Command::FilterChanged(FilterChange::Search(
        "0712".to_string(),
    )));
    let view = screener.view();
    assert_eq!(view.visible_count(), 1);
    let detail = view.detail(&id).expect("detail");
    assert_eq!(detail.phone.as_deref(), Some("0712345678"));
}

#[test]
fn export_without_records_fails() {
    let screener = Screener::new();
    assert!(matches!(
        screener.export(&CsvCodec::default()),
        Err(CoreError::NothingToExport)
    ));
}
