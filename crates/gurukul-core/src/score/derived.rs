use serde::Serialize;

use crate::config::{co_curricular, marks};
use crate::records::{CoActivity, Mode, RosterEntry, SubjectMarks};

use super::{Grade, GradeScale};

/// Placeholder shown for marks that have not been entered.
pub const MISSING_MARK: &str = "—";

/// Score derived from written/oral/project roster marks.
///
/// Missing marks count as zero in every total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedScore {
    /// Raw marks as entered, nulls kept for display
    pub subjects: Vec<SubjectMarks>,
    pub subject_count: u32,
    pub written_total: u32,
    pub oral_total: u32,
    pub project_total: u32,
    pub grand_total: u32,
    pub max_written: u32,
    pub max_oral: u32,
    pub max_project: u32,
    pub max_total: u32,
    pub percentage: f64,
    #[serde(serialize_with = "serialize_grade")]
    pub grade: Grade,
}

fn serialize_grade<S: serde::Serializer>(grade: &Grade, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(grade.label())
}

impl DerivedScore {
    pub fn compute(entry: &RosterEntry, scale: GradeScale) -> Self {
        let subject_count = entry.subjects.len() as u32;

        let written_total = entry.mode_total(Mode::Written);
        let oral_total = entry.mode_total(Mode::Oral);
        let project_total = entry.mode_total(Mode::Project);
        let grand_total = written_total
            .saturating_add(oral_total)
            .saturating_add(project_total);

        let max_written = subject_count.saturating_mul(Mode::Written.max_marks());
        let max_oral = subject_count.saturating_mul(Mode::Oral.max_marks());
        let max_project = subject_count.saturating_mul(Mode::Project.max_marks());
        let max_total = max_written
            .saturating_add(max_oral)
            .saturating_add(max_project);

        let percentage = if max_total > 0 {
            grand_total as f64 / max_total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            subjects: entry.subjects.clone(),
            subject_count,
            written_total,
            oral_total,
            project_total,
            grand_total,
            max_written,
            max_oral,
            max_project,
            max_total,
            percentage,
            grade: scale.grade(percentage),
        }
    }

    pub fn mode_total(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Written => self.written_total,
            Mode::Oral => self.oral_total,
            Mode::Project => self.project_total,
        }
    }

    pub fn mode_max(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Written => self.max_written,
            Mode::Oral => self.max_oral,
            Mode::Project => self.max_project,
        }
    }
}

/// Render a roster mark for display; missing marks are not shown as zero.
pub fn format_mark(mark: Option<u32>) -> String {
    match mark {
        Some(value) => value.to_string(),
        None => MISSING_MARK.to_string(),
    }
}

/// Round to one decimal place.
pub fn round_1_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Subject raw total rescaled onto the common 10-point scale.
pub fn scale_subject_total(raw_total: u32) -> f64 {
    round_1_decimal(raw_total as f64 / marks::SUBJECT_MAX as f64 * marks::SCALED_OUT_OF)
}

/// Co-curricular activities assumed for roster-backed results.
pub fn default_co_activities() -> Vec<CoActivity> {
    co_curricular::DEFAULT_ACTIVITIES
        .iter()
        .map(|(activity, marks)| CoActivity {
            activity: activity.to_string(),
            marks: *marks,
            out_of: co_curricular::ACTIVITY_MAX,
        })
        .collect()
}
