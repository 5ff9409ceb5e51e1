//! Table filter state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::status::Status;

/// Domain-match selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainFilter {
    #[default]
    All,
    /// Only rows whose domain-match field reads as true.
    Matched,
    /// Only rows whose domain-match field reads as false.
    Unmatched,
}

impl DomainFilter {
    pub fn accepts(&self, flag: bool) -> bool {
        match self {
            DomainFilter::All => true,
            DomainFilter::Matched => flag,
            DomainFilter::Unmatched => !flag,
        }
    }
}

impl FromStr for DomainFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(DomainFilter::All),
            "true" | "yes" => Ok(DomainFilter::Matched),
            "false" | "no" => Ok(DomainFilter::Unmatched),
            _ => Err(ModelError::UnknownDomainFilter(s.to_string())),
        }
    }
}

impl fmt::Display for DomainFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DomainFilter::All => "all",
            DomainFilter::Matched => "true",
            DomainFilter::Unmatched => "false",
        })
    }
}

/// Status selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn accepts(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Active table filters. All conditions must hold for a row to stay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    search: String,
    pub min_experience: Option<f64>,
    pub domain: DomainFilter,
    pub status: StatusFilter,
}

impl FilterState {
    /// Search text, always lowercase.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_lowercase();
    }

    #[must_use]
    pub fn with_search(mut self, text: &str) -> Self {
        self.set_search(text);
        self
    }

    #[must_use]
    pub fn with_min_experience(mut self, years: f64) -> Self {
        self.min_experience = Some(years);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: DomainFilter) -> Self {
        self.domain = domain;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// True when no filter narrows the rows.
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.min_experience.is_none()
            && self.domain == DomainFilter::All
            && self.status == StatusFilter::All
    }
}
