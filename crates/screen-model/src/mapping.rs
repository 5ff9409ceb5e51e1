//! Resolved dataset schema: semantic roles, display columns and score columns.

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDefinition, default_columns};
use crate::scoring::Dimension;

/// Headers bound to the semantic roles the viewer needs.
///
/// Every role is bound to at most one header. Unbound roles read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub candidate: Option<String>,
    pub experience: Option<String>,
    pub domain_match: Option<String>,
    pub skills: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FieldMapping {
    /// `(role, header)` pairs in a fixed order, for display.
    pub fn roles(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("candidate", self.candidate.as_deref()),
            ("experience", self.experience.as_deref()),
            ("domain_match", self.domain_match.as_deref()),
            ("skills", self.skills.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
        ]
    }

    pub fn bound_count(&self) -> usize {
        self.roles().iter().filter(|(_, h)| h.is_some()).count()
    }
}

/// The score column located for each dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreColumns {
    headers: [Option<String>; 4],
}

impl ScoreColumns {
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.headers[dimension.index()].as_deref()
    }

    pub fn set(&mut self, dimension: Dimension, header: Option<String>) {
        self.headers[dimension.index()] = header;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Option<&str>)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }
}

/// Everything inferred from a dataset's headers, computed once per load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub mapping: FieldMapping,
    pub columns: Vec<ColumnDefinition>,
    pub score_columns: ScoreColumns,
}

impl Schema {
    /// Schema with nothing bound, used before a load or for an empty dataset.
    pub fn unbound() -> Self {
        Self {
            mapping: FieldMapping::default(),
            columns: default_columns(),
            score_columns: ScoreColumns::default(),
        }
    }

    /// Resolved header of a catalog column.
    pub fn column_header(&self, id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.id == id)
            .and_then(|c| c.header.as_deref())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::unbound()
    }
}
