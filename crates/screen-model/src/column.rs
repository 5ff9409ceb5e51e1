//! Display column catalog.

use serde::{Deserialize, Serialize};

/// How a display column renders its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Candidate name with avatar, email and phone.
    Contact,
    Number,
    Boolean,
    /// Delimited list rendered as badges.
    Tags,
    Text,
    /// Per-dimension sub-score rings.
    Subcards,
    /// Composite score with its breakdown.
    Score,
    Status,
}

impl ColumnKind {
    /// Structural kinds are filled from derived data, never from a header.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ColumnKind::Contact | ColumnKind::Subcards | ColumnKind::Score | ColumnKind::Status
        )
    }
}

/// Column id of the candidate/contact column.
pub const CANDIDATE_COLUMN: &str = "Candidate";
/// Column id sorted numerically by years of experience.
pub const EXPERIENCE_COLUMN: &str = "Exp";
/// Column id sorted by composite score.
pub const SCORE_COLUMN: &str = "Score";
/// Column id of the derived status.
pub const STATUS_COLUMN: &str = "Status";

/// A column of the candidate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub id: String,
    pub label: String,
    pub show: bool,
    pub kind: ColumnKind,
    /// Lowercase header fragments that locate this column's data.
    pub key_matches: Vec<String>,
    pub sortable: bool,
    /// Preferred width in pixels.
    pub width: Option<u16>,
    /// Header resolved from the loaded dataset, if any.
    pub header: Option<String>,
}

impl ColumnDefinition {
    pub fn new(id: &str, label: &str, kind: ColumnKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            show: true,
            kind,
            key_matches: Vec::new(),
            sortable: false,
            width: None,
            header: None,
        }
    }

    #[must_use]
    pub fn matching(mut self, fragments: &[&str]) -> Self {
        self.key_matches = fragments.iter().map(|f| f.to_string()).collect();
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.show = false;
        self
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Columns that cannot be hidden by the user.
    pub fn is_pinned(&self) -> bool {
        matches!(
            self.id.as_str(),
            CANDIDATE_COLUMN | SCORE_COLUMN | STATUS_COLUMN
        )
    }
}

/// The fixed column catalog, in display order, with nothing resolved yet.
pub fn default_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new(CANDIDATE_COLUMN, "Candidate", ColumnKind::Contact).width(250),
        ColumnDefinition::new(EXPERIENCE_COLUMN, "Exp (Yrs)", ColumnKind::Number)
            .matching(&["years of experience"])
            .sortable()
            .width(100),
        ColumnDefinition::new("Domain", "Domain", ColumnKind::Boolean)
            .matching(&["domain match"])
            .width(100),
        ColumnDefinition::new("Skills", "Skills", ColumnKind::Tags)
            .matching(&["skill"])
            .width(300),
        ColumnDefinition::new("Critical", "Critical Match", ColumnKind::Tags)
            .matching(&["critical"])
            .hidden()
            .width(200),
        ColumnDefinition::new("NonCritical", "Non-Critical", ColumnKind::Tags)
            .matching(&["non critical"])
            .hidden()
            .width(200),
        ColumnDefinition::new("Notes", "Notes", ColumnKind::Text)
            .matching(&["note"])
            .hidden()
            .width(250),
        ColumnDefinition::new("Summary", "AI Summary", ColumnKind::Text)
            .matching(&["summary"])
            .hidden()
            .width(300),
        ColumnDefinition::new("Redflag", "Red Flags", ColumnKind::Tags)
            .matching(&["redflag"])
            .width(200),
        ColumnDefinition::new("Subcards", "Subcards (10)", ColumnKind::Subcards).width(200),
        ColumnDefinition::new(SCORE_COLUMN, "Final Score", ColumnKind::Score)
            .sortable()
            .width(120),
        ColumnDefinition::new(STATUS_COLUMN, "Status", ColumnKind::Status).width(120),
    ]
}

/// Looks a column up by id, case-insensitively.
pub fn find_column<'a>(columns: &'a [ColumnDefinition], id: &str) -> Option<&'a ColumnDefinition> {
    columns.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}
