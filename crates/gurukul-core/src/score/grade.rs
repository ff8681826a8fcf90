use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Letter grade used on multi-mode (written/oral/project) report cards.
///
/// Ordered from worst to best so that `E < D < ... < A1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum LetterGrade {
    E,
    D,
    C2,
    C1,
    B2,
    B1,
    A2,
    A1,
}

impl LetterGrade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 95.0 {
            Self::A1
        } else if percentage >= 90.0 {
            Self::A2
        } else if percentage >= 80.0 {
            Self::B1
        } else if percentage >= 70.0 {
            Self::B2
        } else if percentage >= 60.0 {
            Self::C1
        } else if percentage >= 50.0 {
            Self::C2
        } else if percentage >= 40.0 {
            Self::D
        } else {
            Self::E
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Descriptive grade used on authored and converted report cards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum DescriptiveGrade {
    #[strum(serialize = "Needs Improvement")]
    NeedsImprovement,
    Average,
    Good,
    #[strum(serialize = "Very Good")]
    VeryGood,
    Excellent,
    Outstanding,
}

impl DescriptiveGrade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Outstanding
        } else if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::VeryGood
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 50.0 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Grading policy chosen by the caller.
///
/// The two scales are kept apart on purpose: the portal grades multi-mode
/// cards with letters and converted/authored cards with words, and the two
/// do not agree on thresholds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GradeScale {
    #[default]
    Letter,
    Descriptive,
}

impl GradeScale {
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::UnknownGradeScale(name.to_string()))
    }

    pub fn grade(&self, percentage: f64) -> Grade {
        match self {
            Self::Letter => Grade::Letter(LetterGrade::from_percentage(percentage)),
            Self::Descriptive => Grade::Descriptive(DescriptiveGrade::from_percentage(percentage)),
        }
    }
}

/// A grade produced under one of the scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Letter(LetterGrade),
    Descriptive(DescriptiveGrade),
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Letter(g) => g.short_name(),
            Self::Descriptive(g) => g.label(),
        }
    }

    pub fn scale(&self) -> GradeScale {
        match self {
            Self::Letter(_) => GradeScale::Letter,
            Self::Descriptive(_) => GradeScale::Descriptive,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
