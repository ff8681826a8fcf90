//! Read-only lookups over the repositories.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::normalize::{normalize_roll_number, parse_roll_number};
use crate::records::{ExamResult, ExamType, Student};
use crate::storage::{ResultRepository, StudentRepository};

/// Counts shown on a class overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStats {
    pub total_students: usize,
    pub total_results: usize,
}

pub fn get_student_by_id<'a, D: StudentRepository>(data: &'a D, id: &str) -> Option<&'a Student> {
    data.student_by_id(id)
}

/// Authored results of a student, in dataset order.
pub fn get_student_results<'a, D: ResultRepository>(data: &'a D, student_id: &str) -> Vec<&'a ExamResult> {
    data.results()
        .iter()
        .filter(|r| r.student_id == student_id)
        .collect()
}

/// Exact-match lookup of an authored result. `academic_year` is an optional filter.
pub fn get_exam_result<'a, D: ResultRepository>(
    data: &'a D,
    student_id: &str,
    exam_type: ExamType,
    exam_period: &str,
    academic_year: Option<&str>,
) -> Option<&'a ExamResult> {
    data.results()
        .iter()
        .find(|r| r.matches(student_id, exam_type, exam_period, academic_year))
}

/// Distinct exam periods recorded for a year and exam type, sorted.
pub fn get_available_exam_periods<D: ResultRepository>(
    data: &D,
    academic_year: &str,
    exam_type: ExamType,
) -> Vec<String> {
    data.results()
        .iter()
        .filter(|r| r.academic_year == academic_year && r.exam_type == exam_type)
        .map(|r| r.exam_period.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Canonical students of a class, ordered by roll number.
pub fn list_class_students<'a, D: StudentRepository>(data: &'a D, class_label: &str) -> Vec<&'a Student> {
    let class_label = class_label.trim();
    let mut students: Vec<&Student> = data
        .students()
        .iter()
        .filter(|s| s.class_label.trim() == class_label)
        .collect();
    students.sort_by(|a, b| {
        parse_roll_number(&a.roll_number)
            .cmp(&parse_roll_number(&b.roll_number))
            .then_with(|| normalize_roll_number(&a.roll_number).cmp(&normalize_roll_number(&b.roll_number)))
    });
    students
}

pub fn get_class_stats<D>(data: &D, class_label: &str) -> ClassStats
where
    D: StudentRepository + ResultRepository,
{
    let ids: HashSet<&str> = list_class_students(data, class_label)
        .into_iter()
        .map(|s| s.id.as_str())
        .collect();
    let total_results = data
        .results()
        .iter()
        .filter(|r| ids.contains(r.student_id.as_str()))
        .count();

    ClassStats {
        total_students: ids.len(),
        total_results,
    }
}
