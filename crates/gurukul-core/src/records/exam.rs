use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};
use crate::score::{Grade, GradeScale};

/// The three exam categories of an academic year.
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
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExamType {
    /// Monthly assessment
    JigyasaAnveshan,
    /// Term-end examination
    BodhaManthan,
    /// Annual examination
    PragyaSiddhi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Cadence {
    Monthly,
    #[strum(serialize = "Term-End")]
    TermEnd,
    Annual,
}

impl ExamType {
    /// Parse a slug as typed by a user, surrounding whitespace allowed.
    pub fn from_slug(slug: &str) -> Result<Self> {
        slug.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| Error::UnknownExamType(slug.to_string()))
    }

    /// URL/data slug, e.g. `jigyasa-anveshan`
    pub fn slug(&self) -> &'static str {
        self.into()
    }

    pub fn cadence(&self) -> Cadence {
        match self {
            Self::JigyasaAnveshan => Cadence::Monthly,
            Self::BodhaManthan => Cadence::TermEnd,
            Self::PragyaSiddhi => Cadence::Annual,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JigyasaAnveshan => "Jigyāsa Anveshan",
            Self::BodhaManthan => "Bodha Manthan",
            Self::PragyaSiddhi => "Pragya Siddhi",
        }
    }

    /// Display label, e.g. "Jigyāsa Anveshan (Monthly)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.cadence())
    }

    pub fn hindi_name(&self) -> &'static str {
        match self {
            Self::JigyasaAnveshan => "जिज्ञासा अन्वेषण",
            Self::BodhaManthan => "बोध मंथन",
            Self::PragyaSiddhi => "प्रज्ञा सिद्धि",
        }
    }
}

/// One academic subject line of an authored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub subject: String,
    pub raw_marks: f64,
    /// Maximum raw marks
    pub total: f64,
    /// Raw marks rescaled onto `out_of`
    pub scaled_marks: f64,
    pub out_of: f64,
}

/// One co-curricular activity line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoActivity {
    pub activity: String,
    pub marks: f64,
    pub out_of: f64,
}

/// Identifies one assessment sitting: which exam, which period, which session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultContext {
    pub exam_type: ExamType,
    pub exam_period: String,
    pub academic_year: String,
}

impl ResultContext {
    pub fn new(
        exam_type: ExamType,
        exam_period: impl Into<String>,
        academic_year: impl Into<String>,
    ) -> Self {
        Self {
            exam_type,
            exam_period: exam_period.into(),
            academic_year: academic_year.into(),
        }
    }

    /// Matches a lookup where the academic year filter is optional.
    pub fn matches(&self, exam_type: ExamType, exam_period: &str, academic_year: Option<&str>) -> bool {
        self.exam_type == exam_type
            && self.exam_period == exam_period
            && academic_year.is_none_or(|year| self.academic_year == year)
    }
}

/// A scored assessment as shown on a report card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub student_id: String,
    pub exam_type: ExamType,
    pub exam_period: String,
    pub academic_year: String,
    pub academic_marks: Vec<SubjectScore>,
    pub co_activities: Vec<CoActivity>,
    pub total_marks: f64,
    pub max_marks: f64,
    pub percentage: f64,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl ExamResult {
    pub fn context(&self) -> ResultContext {
        ResultContext::new(self.exam_type, &self.exam_period, &self.academic_year)
    }

    pub fn matches(
        &self,
        student_id: &str,
        exam_type: ExamType,
        exam_period: &str,
        academic_year: Option<&str>,
    ) -> bool {
        self.student_id == student_id
            && self.exam_type == exam_type
            && self.exam_period == exam_period
            && academic_year.is_none_or(|year| self.academic_year == year)
    }

    /// Percentage recomputed from the stored totals.
    pub fn computed_percentage(&self) -> f64 {
        if self.max_marks > 0.0 {
            self.total_marks / self.max_marks * 100.0
        } else {
            0.0
        }
    }

    /// Grade of the stored percentage under an explicit scale.
    ///
    /// The authored `grade` string is left untouched.
    pub fn grade_under(&self, scale: GradeScale) -> Grade {
        scale.grade(self.percentage)
    }

    pub fn academic_total(&self) -> f64 {
        self.academic_marks.iter().map(|s| s.scaled_marks).sum()
    }

    pub fn co_activity_total(&self) -> f64 {
        self.co_activities.iter().map(|a| a.marks).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn sample_result() -> ExamResult {
        ExamResult {
            student_id: "dbg-001".to_string(),
            exam_type: ExamType::JigyasaAnveshan,
            exam_period: "I - April 2024".to_string(),
            academic_year: "2024-25".to_string(),
            academic_marks: vec![SubjectScore {
                subject: "Hindi".to_string(),
                raw_marks: 45.0,
                total: 50.0,
                scaled_marks: 9.0,
                out_of: 10.0,
            }],
            co_activities: vec![CoActivity {
                activity: "Discipline".to_string(),
                marks: 5.0,
                out_of: 5.0,
            }],
            total_marks: 90.6,
            max_marks: 100.0,
            percentage: 90.6,
            grade: "Excellent".to_string(),
            remarks: None,
        }
    }

    #[test]
    fn test_exam_type_slugs() {
        assert_eq!(ExamType::JigyasaAnveshan.slug(), "jigyasa-anveshan");
        assert_eq!(ExamType::BodhaManthan.to_string(), "bodha-manthan");
        assert_eq!(
            ExamType::from_str("pragya-siddhi").ok(),
            Some(ExamType::PragyaSiddhi)
        );
        assert!(ExamType::from_str("weekly-test").is_err());
        assert_eq!(ExamType::iter().count(), 3);
    }

    #[test]
    fn test_exam_type_from_slug() {
        assert_eq!(
            ExamType::from_slug(" Bodha-Manthan ").ok(),
            Some(ExamType::BodhaManthan)
        );
        assert!(matches!(
            ExamType::from_slug("weekly-test"),
            Err(Error::UnknownExamType(s)) if s == "weekly-test"
        ));
    }

    #[test]
    fn test_exam_type_labels() {
        assert_eq!(
            ExamType::JigyasaAnveshan.label(),
            "Jigyāsa Anveshan (Monthly)"
        );
        assert_eq!(ExamType::BodhaManthan.label(), "Bodha Manthan (Term-End)");
        assert_eq!(ExamType::PragyaSiddhi.label(), "Pragya Siddhi (Annual)");
    }

    #[test]
    fn test_exam_type_serde() {
        let json = serde_json::to_string(&ExamType::BodhaManthan).unwrap();
        assert_eq!(json, "\"bodha-manthan\"");
        let parsed: ExamType = serde_json::from_str("\"jigyasa-anveshan\"").unwrap();
        assert_eq!(parsed, ExamType::JigyasaAnveshan);
    }

    #[test]
    fn test_result_matches() {
        let result = sample_result();
        assert!(result.matches("dbg-001", ExamType::JigyasaAnveshan, "I - April 2024", None));
        assert!(result.matches(
            "dbg-001",
            ExamType::JigyasaAnveshan,
            "I - April 2024",
            Some("2024-25")
        ));
        assert!(!result.matches(
            "dbg-001",
            ExamType::JigyasaAnveshan,
            "I - April 2024",
            Some("2025-26")
        ));
        assert!(!result.matches("dbg-002", ExamType::JigyasaAnveshan, "I - April 2024", None));
        assert!(!result.matches("dbg-001", ExamType::BodhaManthan, "I - April 2024", None));
    }

    #[test]
    fn test_authored_grade_is_kept() {
        let result = sample_result();
        assert_eq!(result.grade, "Excellent");
        assert_eq!(result.grade_under(GradeScale::Descriptive).label(), "Outstanding");
        assert_eq!(result.grade_under(GradeScale::Letter).label(), "A2");
    }

    #[test]
    fn test_computed_percentage() {
        let mut result = sample_result();
        assert!((result.computed_percentage() - 90.6).abs() < 1e-9);
        result.max_marks = 0.0;
        assert_eq!(result.computed_percentage(), 0.0);
    }
}
