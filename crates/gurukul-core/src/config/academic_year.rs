use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Month in which a new academic session begins (April).
const SESSION_START_MONTH: u32 = 4;

/// Academic session label such as `2024-25`.
///
/// The second part is the last two digits of the year after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AcademicYear {
    start: i32,
}

impl AcademicYear {
    pub fn new(start: i32) -> Self {
        Self { start }
    }

    pub fn start_year(&self) -> i32 {
        self.start
    }

    pub fn end_year(&self) -> i32 {
        self.start + 1
    }

    /// Session containing `date`. Sessions run April to March.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= SESSION_START_MONTH {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    pub fn previous(&self) -> Self {
        Self::new(self.start - 1)
    }

    pub fn next(&self) -> Self {
        Self::new(self.start + 1)
    }
}

impl FromStr for AcademicYear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAcademicYear(s.to_string());
        let (first, second) = s.trim().split_once('-').ok_or_else(invalid)?;
        if first.len() != 4 || second.len() != 2 {
            return Err(invalid());
        }
        let start: i32 = first.parse().map_err(|_| invalid())?;
        let end: i32 = second.parse().map_err(|_| invalid())?;
        if (start + 1).rem_euclid(100) != end {
            return Err(invalid());
        }
        Ok(Self::new(start))
    }
}

impl TryFrom<String> for AcademicYear {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AcademicYear> for String {
    fn from(value: AcademicYear) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.start, self.end_year().rem_euclid(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let year: AcademicYear = "2024-25".parse().unwrap();
        assert_eq!(year.start_year(), 2024);
        assert_eq!(year.end_year(), 2025);
        assert_eq!(year.to_string(), "2024-25");
    }

    #[test]
    fn test_century_rollover() {
        let year: AcademicYear = "2099-00".parse().unwrap();
        assert_eq!(year.to_string(), "2099-00");
        assert_eq!(AcademicYear::new(2009).to_string(), "2009-10");
    }

    #[test]
    fn test_parse_invalid() {
        for label in ["2024-26", "2024", "24-25", "2024-2025", "abcd-ef", ""] {
            assert!(
                matches!(label.parse::<AcademicYear>(), Err(Error::InvalidAcademicYear(_))),
                "{label} should be rejected"
            );
        }
    }

    #[test]
    fn test_containing_date() {
        let april = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let march = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(AcademicYear::containing(april).to_string(), "2025-26");
        assert_eq!(AcademicYear::containing(march).to_string(), "2024-25");
    }

    #[test]
    fn test_neighbours() {
        let year = AcademicYear::new(2024);
        assert_eq!(year.previous().to_string(), "2023-24");
        assert_eq!(year.next().to_string(), "2025-26");
    }

    #[test]
    fn test_serde_as_string() {
        let year = AcademicYear::new(2025);
        assert_eq!(serde_json::to_string(&year).unwrap(), "\"2025-26\"");
        let parsed: AcademicYear = serde_json::from_str("\"2024-25\"").unwrap();
        assert_eq!(parsed, AcademicYear::new(2024));
        assert!(serde_json::from_str::<AcademicYear>("\"2024-27\"").is_err());
    }
}
