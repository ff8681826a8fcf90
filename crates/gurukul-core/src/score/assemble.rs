use crate::config::marks;
use crate::records::{ExamResult, ResultContext, RosterEntry, SubjectScore};

use super::{DerivedScore, GradeScale, default_co_activities, scale_subject_total};

/// Where a scored assessment comes from.
#[derive(Debug, Clone, Copy)]
pub enum ScoreSource<'a> {
    /// Values authored directly in the results dataset.
    Authored(&'a ExamResult),
    /// Computed on read from raw roster marks.
    Derived {
        student_id: &'a str,
        entry: &'a RosterEntry,
        context: &'a ResultContext,
    },
}

impl ScoreSource<'_> {
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived { .. })
    }
}

/// Normalize either source into an `ExamResult`.
///
/// Authored results are returned as stored, grade string included. Derived
/// results are graded under `scale`.
pub fn assemble(source: ScoreSource<'_>, scale: GradeScale) -> ExamResult {
    match source {
        ScoreSource::Authored(result) => result.clone(),
        ScoreSource::Derived {
            student_id,
            entry,
            context,
        } => assemble_derived(student_id, entry, context, scale),
    }
}

fn assemble_derived(
    student_id: &str,
    entry: &RosterEntry,
    context: &ResultContext,
    scale: GradeScale,
) -> ExamResult {
    let score = DerivedScore::compute(entry, scale);

    let academic_marks = entry
        .subjects
        .iter()
        .map(|subject| {
            let raw = subject.total();
            SubjectScore {
                subject: subject.subject.clone(),
                raw_marks: raw as f64,
                total: marks::SUBJECT_MAX as f64,
                scaled_marks: scale_subject_total(raw),
                out_of: marks::SCALED_OUT_OF,
            }
        })
        .collect();

    ExamResult {
        student_id: student_id.to_string(),
        exam_type: context.exam_type,
        exam_period: context.exam_period.clone(),
        academic_year: context.academic_year.clone(),
        academic_marks,
        co_activities: default_co_activities(),
        total_marks: score.grand_total as f64,
        max_marks: score.max_total as f64,
        percentage: score.percentage,
        grade: score.grade.label().to_string(),
        remarks: None,
    }
}
