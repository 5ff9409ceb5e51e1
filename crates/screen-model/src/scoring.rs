//! Scoring dimensions and their user-adjustable weights.
//!
//! A spreadsheet carries one score column per dimension (for example
//! "Education Score" or "Tools & Technologies Score"). The column is located
//! by requiring the substring `score` plus one of the dimension's keyword
//! fragments in the lowercased header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Largest weight a dimension can carry.
pub const MAX_WEIGHT: u8 = 10;
/// Weight every dimension starts with.
pub const DEFAULT_WEIGHT: u8 = 5;

/// One of the four fixed scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Education,
    DomainFit,
    Experience,
    Skills,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Education,
        Dimension::DomainFit,
        Dimension::Experience,
        Dimension::Skills,
    ];

    /// Short identifier (`edu`, `dom`, `exp`, `req`).
    pub fn id(&self) -> &'static str {
        self.param().id
    }

    pub fn label(&self) -> &'static str {
        self.param().label
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.param().keywords
    }

    pub fn param(&self) -> &'static ScoringParam {
        &SCORING_PARAMS[self.index()]
    }

    pub fn index(&self) -> usize {
        match self {
            Dimension::Education => 0,
            Dimension::DomainFit => 1,
            Dimension::Experience => 2,
            Dimension::Skills => 3,
        }
    }

    /// True when a header names this dimension's score column.
    pub fn matches_score_header(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        lower.contains("score") && self.keywords().iter().any(|kw| lower.contains(kw))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    /// Accepts the short id (`edu`), the snake-case name (`domain_fit`) or
    /// the label (`Domain Fit`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Dimension::ALL
            .into_iter()
            .find(|dimension| {
                let param = dimension.param();
                normalized == param.id
                    || normalized == param.name
                    || normalized == param.label.to_lowercase().replace(' ', "_")
            })
            .ok_or_else(|| ModelError::UnknownDimension(s.to_string()))
    }
}

/// Static description of a scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParam {
    pub dimension: Dimension,
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SCORING_PARAMS: [ScoringParam; 4] = [
    ScoringParam {
        dimension: Dimension::Education,
        id: "edu",
        name: "education",
        label: "Education",
        keywords: &["education"],
    },
    ScoringParam {
        dimension: Dimension::DomainFit,
        id: "dom",
        name: "domain_fit",
        label: "Domain Fit",
        keywords: &["domain"],
    },
    ScoringParam {
        dimension: Dimension::Experience,
        id: "exp",
        name: "experience",
        label: "Experience",
        keywords: &["experien"],
    },
    ScoringParam {
        dimension: Dimension::Skills,
        id: "req",
        name: "skills",
        label: "Skills/Reqs",
        keywords: &["requirement", "tool", "technolog"],
    },
];

/// A dimension weight in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Weight(u8);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn new(value: u32) -> Result<Self, ModelError> {
        if value > u32::from(MAX_WEIGHT) {
            return Err(ModelError::WeightOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Clamps anything above the maximum to 10.
    pub fn saturating(value: u32) -> Self {
        Self(value.min(u32::from(MAX_WEIGHT)) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(DEFAULT_WEIGHT)
    }
}

impl TryFrom<u32> for Weight {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for u32 {
    fn from(weight: Weight) -> Self {
        u32::from(weight.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weights for all four dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    values: [Weight; 4],
}

impl Weights {
    pub fn uniform(weight: Weight) -> Self {
        Self { values: [weight; 4] }
    }

    pub fn get(&self, dimension: Dimension) -> Weight {
        self.values[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, weight: Weight) {
        self.values[dimension.index()] = weight;
    }

    #[must_use]
    pub fn with(mut self, dimension: Dimension, weight: Weight) -> Self {
        self.set(dimension, weight);
        self
    }

    pub fn total(&self) -> u32 {
        self.values.iter().map(|w| u32::from(w.get())).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Weight)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    /// Display percentages per dimension, summing to exactly 100.
    ///
    /// Uses largest-remainder rounding; ties go to the earlier dimension.
    /// All zero when every weight is zero.
    pub fn percentages(&self) -> [u32; 4] {
        let total = self.total();
        if total == 0 {
            return [0; 4];
        }
        let mut shares = [0u32; 4];
        let mut remainders = [(0u32, 0usize); 4];
        for (idx, weight) in self.values.iter().enumerate() {
            let scaled = u32::from(weight.get()) * 100;
            shares[idx] = scaled / total;
            remainders[idx] = (scaled % total, idx);
        }
        let assigned: u32 = shares.iter().sum();
        remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        for &(_, idx) in remainders.iter().take((100 - assigned) as usize) {
            shares[idx] += 1;
        }
        shares
    }

    pub fn percentage(&self, dimension: Dimension) -> u32 {
        self.percentages()[dimension.index()]
    }
}
