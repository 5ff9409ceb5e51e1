//! Screening outcome categories and manual overrides.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, RecordId};

/// Composite score at or above which a candidate is shortlisted.
pub const SHORTLIST_THRESHOLD: i64 = 70;
/// Composite score below which a candidate is rejected.
pub const REJECT_THRESHOLD: i64 = 40;

/// Categorical screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Shortlisted,
    Borderline,
    Rejected,
}

impl Status {
    /// Lane order on the board.
    pub const ALL: [Status; 3] = [Status::Shortlisted, Status::Borderline, Status::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Shortlisted => "Shortlisted",
            Status::Borderline => "Borderline",
            Status::Rejected => "Rejected",
        }
    }

    /// Status implied by a composite score alone.
    pub fn from_score(score: i64) -> Self {
        if score >= SHORTLIST_THRESHOLD {
            Status::Shortlisted
        } else if score < REJECT_THRESHOLD {
            Status::Rejected
        } else {
            Status::Borderline
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

/// Per-status tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub shortlisted: usize,
    pub borderline: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Shortlisted => self.shortlisted += 1,
            Status::Borderline => self.borderline += 1,
            Status::Rejected => self.rejected += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Shortlisted => self.shortlisted,
            Status::Borderline => self.borderline,
            Status::Rejected => self.rejected,
        }
    }

    pub fn total(&self) -> usize {
        self.shortlisted + self.borderline + self.rejected
    }
}

impl FromIterator<Status> for StatusCounts {
    fn from_iter<T: IntoIterator<Item = Status>>(iter: T) -> Self {
        let mut counts = Self::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

/// User-forced statuses, keyed by record id.
///
/// Entries survive recomputation and are dropped only when a new dataset
/// is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOverrides {
    entries: BTreeMap<RecordId, Status>,
}

impl StatusOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: RecordId, status: Status) {
        self.entries.insert(id, status);
    }

    pub fn get(&self, id: &RecordId) -> Option<Status> {
        self.entries.get(id).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_at_seventy_and_forty() {
        assert_eq!(Status::from_score(70), Status::Shortlisted);
        assert_eq!(Status::from_score(69), Status::Borderline);
        assert_eq!(Status::from_score(40), Status::Borderline);
        assert_eq!(Status::from_score(39), Status::Rejected);
        assert_eq!(Status::from_score(-5), Status::Rejected);
        assert_eq!(Status::from_score(140), Status::Shortlisted);
    }

    #[test]
    fn parses_status_case_insensitively() {
        assert_eq!("shortlisted".parse::<Status>().unwrap(), Status::Shortlisted);
        assert_eq!(" REJECTED ".parse::<Status>().unwrap(), Status::Rejected);
        assert!(matches!(
            "maybe".parse::<Status>(),
            Err(ModelError::UnknownStatus(_))
        ));
    }

    #[test]
    fn counts_tally_statuses() {
        let counts: StatusCounts = [Status::Shortlisted, Status::Rejected, Status::Rejected]
            .into_iter()
            .collect();
        assert_eq!(counts.get(Status::Shortlisted), 1);
        assert_eq!(counts.get(Status::Borderline), 0);
        assert_eq!(counts.get(Status::Rejected), 2);
        assert_eq!(counts.total(), 3);
    }
}
