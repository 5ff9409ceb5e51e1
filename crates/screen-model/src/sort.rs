//! Table sort state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// `+1` ascending, `-1` descending.
    pub fn sign(&self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column (by catalog id) and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: &str, direction: SortDirection) -> Self {
        Self {
            column: Some(column.to_string()),
            direction,
        }
    }

    /// Selects a sort column.
    ///
    /// An explicit direction is used as given. Without one this behaves like
    /// a header click: the active column toggles its direction, any other
    /// column becomes active ascending.
    pub fn select(&mut self, column: &str, direction: Option<SortDirection>) {
        let same = self.column.as_deref() == Some(column);
        self.direction = match direction {
            Some(direction) => direction,
            None if same => self.direction.reversed(),
            None => SortDirection::Ascending,
        };
        self.column = Some(column.to_string());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }
}
