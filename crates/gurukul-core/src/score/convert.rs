//! Conversion of roster marks onto the 100-point report card.
//!
//! Each subject is rescaled to 10 points and the default co-curricular
//! activities are added on top. The card is always out of 100, whatever
//! the number of subjects in the roster.

use tracing::debug;

use crate::config::marks;
use crate::normalize::ClassKey;
use crate::records::{
    ExamResult, ResultContext, RosterClass, RosterEntry, SubjectScore, synthetic_student_id,
};

use super::{GradeScale, default_co_activities, round_1_decimal, scale_subject_total};

/// Convert every roster entry that has at least one mark.
///
/// Entries with no marks at all are skipped. Returns an empty list when the
/// roster class name is blank.
pub fn convert_roster_class(
    roster: &RosterClass,
    context: &ResultContext,
    id_prefix: &str,
    scale: GradeScale,
) -> Vec<ExamResult> {
    let Some(class_key) = roster.class_key() else {
        return Vec::new();
    };

    let results: Vec<ExamResult> = roster
        .students
        .iter()
        .filter(|entry| entry.has_any_marks())
        .map(|entry| convert_entry(&class_key, entry, context, id_prefix, scale))
        .collect();

    debug!(
        "Converted {} of {} roster entries for class {}",
        results.len(),
        roster.students.len(),
        class_key
    );
    results
}

fn convert_entry(
    class_key: &ClassKey,
    entry: &RosterEntry,
    context: &ResultContext,
    id_prefix: &str,
    scale: GradeScale,
) -> ExamResult {
    let academic_marks: Vec<SubjectScore> = entry
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

    let co_activities = default_co_activities();
    let academic_total: f64 = academic_marks.iter().map(|s| s.scaled_marks).sum();
    let co_total: f64 = co_activities.iter().map(|a| a.marks).sum();
    let total_marks = round_1_decimal(academic_total + co_total);
    let percentage = round_1_decimal(total_marks / marks::REPORT_CARD_MAX * 100.0);

    ExamResult {
        student_id: synthetic_student_id(id_prefix, class_key, entry.roll_number),
        exam_type: context.exam_type,
        exam_period: context.exam_period.clone(),
        academic_year: context.academic_year.clone(),
        academic_marks,
        co_activities,
        total_marks,
        max_marks: marks::REPORT_CARD_MAX,
        percentage,
        grade: scale.grade(percentage).label().to_string(),
        remarks: None,
    }
}
