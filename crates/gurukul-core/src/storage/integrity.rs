use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::config::PERCENTAGE_TOLERANCE;
use crate::records::Mode;
use crate::resolver::StudentResolver;

use super::{ResultRepository, RosterRepository, StudentRepository};

/// Problem found in an authored result or a roster line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IntegrityIssue {
    TotalExceedsMax {
        student_id: String,
        exam_period: String,
        total_marks: f64,
        max_marks: f64,
    },
    PercentageMismatch {
        student_id: String,
        exam_period: String,
        stored: f64,
        computed: f64,
    },
    UnknownStudent {
        student_id: String,
        exam_period: String,
    },
    MarkExceedsMax {
        class_name: String,
        roll_number: u32,
        subject: String,
        mode: Mode,
        mark: u32,
        max_marks: u32,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TotalExceedsMax {
                student_id,
                exam_period,
                total_marks,
                max_marks,
            } => write!(
                f,
                "{} [{}]: total {} exceeds max {}",
                student_id, exam_period, total_marks, max_marks
            ),
            Self::PercentageMismatch {
                student_id,
                exam_period,
                stored,
                computed,
            } => write!(
                f,
                "{} [{}]: stored percentage {} but total/max gives {:.2}",
                student_id, exam_period, stored, computed
            ),
            Self::UnknownStudent {
                student_id,
                exam_period,
            } => write!(f, "{} [{}]: student id not found", student_id, exam_period),
            Self::MarkExceedsMax {
                class_name,
                roll_number,
                subject,
                mode,
                mark,
                max_marks,
            } => write!(
                f,
                "class {} roll {}: {} {} mark {} exceeds max {}",
                class_name, roll_number, subject, mode, mark, max_marks
            ),
        }
    }
}

/// Check authored results against their own totals and the student sources,
/// and roster marks against their mode maxima.
///
/// Issues are logged and returned; none of them stops the portal from serving data.
pub fn integrity_report<D>(data: &D, id_prefix: &str) -> Vec<IntegrityIssue>
where
    D: StudentRepository + ResultRepository + RosterRepository,
{
    let mut issues = Vec::new();
    let resolver = StudentResolver::new(data, id_prefix);

    for result in data.results() {
        if result.total_marks > result.max_marks {
            issues.push(IntegrityIssue::TotalExceedsMax {
                student_id: result.student_id.clone(),
                exam_period: result.exam_period.clone(),
                total_marks: result.total_marks,
                max_marks: result.max_marks,
            });
        }

        let computed = result.computed_percentage();
        if (computed - result.percentage).abs() > PERCENTAGE_TOLERANCE {
            issues.push(IntegrityIssue::PercentageMismatch {
                student_id: result.student_id.clone(),
                exam_period: result.exam_period.clone(),
                stored: result.percentage,
                computed,
            });
        }

        if resolver.resolve_id(&result.student_id).is_none() {
            issues.push(IntegrityIssue::UnknownStudent {
                student_id: result.student_id.clone(),
                exam_period: result.exam_period.clone(),
            });
        }
    }

    for roster in data.rosters() {
        for entry in &roster.students {
            for subject in &entry.subjects {
                for (mode, mark) in subject.marks_over_max() {
                    issues.push(IntegrityIssue::MarkExceedsMax {
                        class_name: roster.class_name.clone(),
                        roll_number: entry.roll_number,
                        subject: subject.subject.clone(),
                        mode,
                        mark,
                        max_marks: mode.max_marks(),
                    });
                }
            }
        }
    }

    for issue in &issues {
        warn!("Dataset integrity: {}", issue);
    }
    issues
}
