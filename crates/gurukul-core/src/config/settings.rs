use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::score::GradeScale;

use super::ids;

/// Portal settings.
///
/// File format (TOML, every key optional):
///
/// ```toml
/// [school]
/// name = "DBG Gurukulam"
/// id_prefix = "dbg"
///
/// [grading]
/// derived_scale = "letter"
/// converted_scale = "descriptive"
///
/// [data]
/// dir = "data"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub school: SchoolConfig,
    pub grading: GradingConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub name: String,
    /// Prefix of synthetic student ids
    pub id_prefix: String,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            name: "DBG Gurukulam".to_string(),
            id_prefix: ids::DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Scale for report cards derived from roster marks
    pub derived_scale: GradeScale,
    /// Scale for roster classes converted to the 100-point card
    pub converted_scale: GradeScale,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            derived_scale: GradeScale::Letter,
            converted_scale: GradeScale::Descriptive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `students.json`, `results.json`, `rosters.json`.
    /// The embedded dataset is used when unset.
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn id_prefix(&self) -> &str {
        &self.school.id_prefix
    }
}
