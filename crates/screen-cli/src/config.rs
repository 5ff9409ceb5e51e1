//! Optional TOML settings file.
//!
//! ```toml
//! [weights]
//! education = 5
//! domain_fit = 5
//! experience = 5
//! skills = 5
//!
//! [view]
//! page_size = 10
//! show = ["Notes"]
//! hide = ["Redflag"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use screen_model::{DEFAULT_WEIGHT, Dimension, Weight, Weights};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "screener.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub weights: WeightSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightSettings {
    pub education: u32,
    pub domain_fit: u32,
    pub experience: u32,
    pub skills: u32,
}

impl Default for WeightSettings {
    fn default() -> Self {
        let weight = u32::from(DEFAULT_WEIGHT);
        Self {
            education: weight,
            domain_fit: weight,
            experience: weight,
            skills: weight,
        }
    }
}

impl WeightSettings {
    /// Validated weights; each value must be within 0-10.
    pub fn to_weights(&self) -> Result<Weights> {
        let mut weights = Weights::default();
        for (dimension, value) in [
            (Dimension::Education, self.education),
            (Dimension::DomainFit, self.domain_fit),
            (Dimension::Experience, self.experience),
            (Dimension::Skills, self.skills),
        ] {
            let weight = Weight::new(value)
                .with_context(|| format!("weights.{}", dimension.param().name))?;
            weights.set(dimension, weight);
        }
        Ok(weights)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewSettings {
    pub page_size: Option<usize>,
    pub show: Vec<String>,
    pub hide: Vec<String>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    /// Reads `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings: {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("invalid settings file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Explicit path if given (must exist), else `screener.toml` in `dir`
    /// when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load_from(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}
