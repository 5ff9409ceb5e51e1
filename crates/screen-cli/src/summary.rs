//! Terminal and JSON rendering of screening views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use screen_core::{ScreeningView, ViewMode};
use screen_model::{
    ColumnDefinition, ColumnKind, Dimension, RecordId, Schema, Status, StatusCounts, Weights,
    format_numeric,
};
use screen_transform::{DerivedRow, ScoreBand, ScoreBreakdown, SubscoreBand, score_band};
use screen_view::{Board, CandidateDetail, PageInfo, display_name, split_tags};

const EMPTY_CELL: &str = "-";

pub fn print_view(view: &ScreeningView<'_>) {
    println!("{}", counts_table(&view.counts));
    println!("{}", weights_table(&view.weights));
    match view.mode {
        ViewMode::Table => {
            println!("{}", page_table(view));
            println!("{}", page_footer(view.page, view.counts.total()));
        }
        ViewMode::Board => println!("{}", board_table(&view.board(), view.schema())),
    }
}

pub fn page_footer(page: PageInfo, total: usize) -> String {
    format!(
        "Showing {} of {} candidates (page {} of {})",
        page.total_rows, total, page.page, page.total_pages
    )
}

pub fn counts_table(counts: &StatusCounts) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        status_header(Status::Shortlisted),
        status_header(Status::Borderline),
        status_header(Status::Rejected),
        header_cell("Total"),
    ]);
    apply_summary_table_style(&mut table);
    table.add_row(vec![
        Cell::new(counts.shortlisted),
        Cell::new(counts.borderline),
        Cell::new(counts.rejected),
        Cell::new(counts.total()).add_attribute(Attribute::Bold),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn weights_table(weights: &Weights) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Weight"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    let percentages = weights.percentages();
    for (dimension, weight) in weights.iter() {
        table.add_row(vec![
            Cell::new(dimension.label()),
            Cell::new(weight),
            Cell::new(format!("{}%", percentages[dimension.index()])),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

pub fn page_table(view: &ScreeningView<'_>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Row")];
    header.extend(view.columns.iter().map(|column| header_cell(&column.label)));
    table.set_header(header);
    apply_table_style(&mut table);
    for row in &view.page_rows {
        let mut cells = vec![dim_cell(row.record.row_number)];
        cells.extend(
            view.columns
                .iter()
                .map(|column| styled_cell(row, column, view.schema())),
        );
        table.add_row(cells);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn board_table(board: &Board<'_>, schema: &Schema) -> Table {
    let mut table = Table::new();
    table.set_header(
        board
            .lanes
            .iter()
            .map(|lane| {
                Cell::new(format!("{} ({})", lane.status, lane.count()))
                    .fg(status_color(lane.status))
                    .add_attribute(Attribute::Bold)
            })
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let depth = board.lanes.iter().map(|lane| lane.count()).max().unwrap_or(0);
    for idx in 0..depth {
        table.add_row(
            board
                .lanes
                .iter()
                .map(|lane| match lane.rows.get(idx) {
                    Some(row) => Cell::new(board_card(row, schema)),
                    None => Cell::new(""),
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn print_columns(schema: &Schema) {
    let mut roles = Table::new();
    roles.set_header(vec![header_cell("Role"), header_cell("Header")]);
    apply_table_style(&mut roles);
    for (role, header) in schema.mapping.roles() {
        roles.add_row(vec![Cell::new(role), optional_cell(header)]);
    }
    println!("{roles}");

    let mut scores = Table::new();
    scores.set_header(vec![header_cell("Dimension"), header_cell("Score column")]);
    apply_table_style(&mut scores);
    for (dimension, header) in schema.score_columns.iter() {
        scores.add_row(vec![Cell::new(dimension.label()), optional_cell(header)]);
    }
    println!("{scores}");

    println!("{}", catalog_table(&schema.columns));
}

pub fn catalog_table(columns: &[ColumnDefinition]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Label"),
        header_cell("Kind"),
        header_cell("Shown"),
        header_cell("Sortable"),
        header_cell("Header"),
    ]);
    apply_table_style(&mut table);
    for column in columns {
        table.add_row(vec![
            Cell::new(&column.id),
            Cell::new(&column.label),
            Cell::new(kind_label(column.kind)),
            flag_cell(column.show),
            flag_cell(column.sortable),
            optional_cell(column.header.as_deref()),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    table
}

pub fn print_detail(detail: &CandidateDetail, breakdown: &ScoreBreakdown) {
    println!("{} [{}]", detail.name, detail.initials);
    if let Some(email) = &detail.email {
        println!("Email: {email}");
    }
    if let Some(phone) = &detail.phone {
        println!("Phone: {phone}");
    }
    println!(
        "Row {}  Score {}  Status {}",
        detail.row_number, detail.composite_score, detail.status
    );
    println!("{}", breakdown_table(breakdown));

    let mut fields = Table::new();
    fields.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut fields);
    for (header, value) in &detail.fields {
        fields.add_row(vec![Cell::new(header), Cell::new(value)]);
    }
    println!("{fields}");
}

pub fn breakdown_table(breakdown: &ScoreBreakdown) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Value"),
        header_cell("Weight"),
        header_cell("Share"),
        header_cell("Contribution"),
    ]);
    apply_summary_table_style(&mut table);
    for line in &breakdown.lines {
        table.add_row(vec![
            Cell::new(line.label),
            Cell::new(format_numeric(line.value)).fg(subscore_color(line.band)),
            Cell::new(line.weight),
            Cell::new(format!("{}%", line.percent)),
            Cell::new(format!("{:.1}", line.contribution)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Final").add_attribute(Attribute::Bold),
        dim_cell(EMPTY_CELL),
        dim_cell(EMPTY_CELL),
        dim_cell(EMPTY_CELL),
        score_cell(breakdown.composite),
    ]);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

/// Plain text of one cell.
pub fn cell_text(row: &DerivedRow<'_>, column: &ColumnDefinition, schema: &Schema) -> String {
    let header = column.header.as_deref();
    let text = match column.kind {
        ColumnKind::Contact => {
            let mut lines = vec![display_name(row.record, &schema.mapping)];
            for header in [&schema.mapping.email, &schema.mapping.phone] {
                let value = row.record.text(header.as_deref());
                if !value.trim().is_empty() {
                    lines.push(value.trim().to_string());
                }
            }
            lines.join("\n")
        }
        ColumnKind::Number | ColumnKind::Text => row.record.text(header).into_owned(),
        ColumnKind::Boolean => match row.record.value(header) {
            Some(value) if !value.is_blank() => {
                let flag = if value.as_flag() { "Yes" } else { "No" };
                flag.to_string()
            }
            _ => String::new(),
        },
        ColumnKind::Tags => split_tags(&row.record.text(header)).join(", "),
        ColumnKind::Subcards => subcards_text(row, schema),
        ColumnKind::Score => row.composite_score.to_string(),
        ColumnKind::Status => row.status.to_string(),
    };
    if text.trim().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        text
    }
}

/// Name and score, skill tags when present, then the sub-scores.
fn board_card(row: &DerivedRow<'_>, schema: &Schema) -> String {
    let mut lines = vec![format!(
        "{} ({})",
        display_name(row.record, &schema.mapping),
        row.composite_score
    )];
    let skills = skill_tags(row, schema);
    if !skills.is_empty() {
        lines.push(skills.join(", "));
    }
    lines.push(subcards_text(row, schema));
    lines.join("\n")
}

/// Tags from the column bound to the skills role.
pub fn skill_tags(row: &DerivedRow<'_>, schema: &Schema) -> Vec<String> {
    split_tags(&row.record.text(schema.mapping.skills.as_deref()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Two-letter dimension tags with their values, e.g. `Ed 8  Do 6`.
pub fn subcards_text(row: &DerivedRow<'_>, schema: &Schema) -> String {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            let value = row.record.number(schema.score_columns.get(*dimension));
            let tag: String = dimension.label().chars().take(2).collect();
            format!("{tag} {}", format_numeric(value))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn styled_cell(row: &DerivedRow<'_>, column: &ColumnDefinition, schema: &Schema) -> Cell {
    match column.kind {
        ColumnKind::Score => score_cell(row.composite_score),
        ColumnKind::Status => Cell::new(row.status).fg(status_color(row.status)),
        _ => {
            let text = cell_text(row, column, schema);
            if text == EMPTY_CELL {
                dim_cell(text)
            } else {
                Cell::new(text)
            }
        }
    }
}

fn score_cell(score: i64) -> Cell {
    let color = match score_band(score) {
        ScoreBand::High => Color::Green,
        ScoreBand::Mid => Color::Yellow,
        ScoreBand::Low => Color::Red,
    };
    Cell::new(score).fg(color).add_attribute(Attribute::Bold)
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Shortlisted => Color::Green,
        Status::Borderline => Color::Yellow,
        Status::Rejected => Color::Red,
    }
}

fn subscore_color(band: SubscoreBand) -> Color {
    match band {
        SubscoreBand::Good => Color::Green,
        SubscoreBand::Fair => Color::Yellow,
        SubscoreBand::Poor => Color::Red,
    }
}

fn kind_label(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Contact => "contact",
        ColumnKind::Number => "number",
        ColumnKind::Boolean => "boolean",
        ColumnKind::Tags => "tags",
        ColumnKind::Text => "text",
        ColumnKind::Subcards => "subcards",
        ColumnKind::Score => "score",
        ColumnKind::Status => "status",
    }
}

fn status_header(status: Status) -> Cell {
    Cell::new(status)
        .fg(status_color(status))
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell(EMPTY_CELL),
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

// =============================================================================
// JSON output
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ViewReport {
    pub mode: ViewMode,
    pub counts: StatusCounts,
    pub weights: Vec<WeightReport>,
    pub page: PageInfo,
    pub columns: Vec<String>,
    pub rows: Vec<RowReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<LaneReport>>,
}

#[derive(Debug, Serialize)]
pub struct WeightReport {
    pub dimension: Dimension,
    pub label: &'static str,
    pub weight: u8,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct RowReport {
    pub id: RecordId,
    pub row_number: usize,
    pub name: String,
    pub score: i64,
    pub status: Status,
    pub skills: Vec<String>,
    /// `(column id, text)` for each visible column.
    pub cells: Vec<(String, String)>,
}

#[derive(Debug, Serialize)]
pub struct LaneReport {
    pub status: Status,
    pub candidates: Vec<RowReport>,
}

pub fn view_report(view: &ScreeningView<'_>) -> ViewReport {
    let schema = view.schema();
    let row_report = |row: &DerivedRow<'_>| RowReport {
        id: row.record.id,
        row_number: row.record.row_number,
        name: display_name(row.record, &schema.mapping),
        score: row.composite_score,
        status: row.status,
        skills: skill_tags(row, schema),
        cells: view
            .columns
            .iter()
            .map(|column| (column.id.clone(), cell_text(row, column, schema)))
            .collect(),
    };
    let percentages = view.weights.percentages();
    let board = (view.mode == ViewMode::Board).then(|| {
        view.board()
            .lanes
            .iter()
            .map(|lane| LaneReport {
                status: lane.status,
                candidates: lane.rows.iter().map(row_report).collect(),
            })
            .collect()
    });
    ViewReport {
        mode: view.mode,
        counts: view.counts,
        weights: view
            .weights
            .iter()
            .map(|(dimension, weight)| WeightReport {
                dimension,
                label: dimension.label(),
                weight: weight.get(),
                percent: percentages[dimension.index()],
            })
            .collect(),
        page: view.page,
        columns: view.columns.iter().map(|column| column.id.clone()).collect(),
        rows: view.page_rows.iter().map(row_report).collect(),
        board,
    }
}
