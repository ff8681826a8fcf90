use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::config::marks;
use crate::normalize::ClassKey;

use super::ResultContext;

/// Assessment mode of a roster mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Written,
    Oral,
    Project,
}

impl Mode {
    /// Maximum marks of this mode for one subject.
    pub fn max_marks(&self) -> u32 {
        match self {
            Self::Written => marks::WRITTEN_MAX,
            Self::Oral => marks::ORAL_MAX,
            Self::Project => marks::PROJECT_MAX,
        }
    }
}

/// Marks of one subject. `None` means not entered yet, which is not the same as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectMarks {
    pub subject: String,
    pub written: Option<u32>,
    pub oral: Option<u32>,
    pub project: Option<u32>,
}

impl SubjectMarks {
    pub fn get(&self, mode: Mode) -> Option<u32> {
        match mode {
            Mode::Written => self.written,
            Mode::Oral => self.oral,
            Mode::Project => self.project,
        }
    }

    /// Sum of all modes with missing marks counted as zero. Saturates instead of overflowing.
    pub fn total(&self) -> u32 {
        self.written
            .unwrap_or(0)
            .saturating_add(self.oral.unwrap_or(0))
            .saturating_add(self.project.unwrap_or(0))
    }

    /// Modes whose entered mark is above the mode maximum.
    pub fn marks_over_max(&self) -> impl Iterator<Item = (Mode, u32)> + '_ {
        [Mode::Written, Mode::Oral, Mode::Project]
            .into_iter()
            .filter_map(|mode| {
                self.get(mode)
                    .filter(|&mark| mark > mode.max_marks())
                    .map(|mark| (mode, mark))
            })
    }

    pub fn has_any(&self) -> bool {
        self.written.is_some() || self.oral.is_some() || self.project.is_some()
    }
}

/// One student line of a class roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(rename = "rollNo")]
    pub roll_number: u32,
    pub name: String,
    pub subjects: Vec<SubjectMarks>,
}

impl RosterEntry {
    pub fn has_any_marks(&self) -> bool {
        self.subjects.iter().any(SubjectMarks::has_any)
    }

    pub fn mode_total(&self, mode: Mode) -> u32 {
        self.subjects
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.get(mode).unwrap_or(0)))
    }
}

/// Per-class roster of raw marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterClass {
    pub class_name: String,
    /// Assessment these marks belong to; `None` means unspecified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<ResultContext>,
    pub students: Vec<RosterEntry>,
}

impl RosterClass {
    pub fn class_key(&self) -> Option<ClassKey> {
        ClassKey::parse(&self.class_name)
    }

    pub fn entry(&self, roll_number: u32) -> Option<&RosterEntry> {
        self.students.iter().find(|s| s.roll_number == roll_number)
    }

    /// Whether this roster may back a result for the given assessment.
    pub fn covers(&self, context: &ResultContext) -> bool {
        match &self.assessment {
            Some(assessment) => assessment == context,
            None => true,
        }
    }
}
