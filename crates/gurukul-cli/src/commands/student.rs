//! Student command: record and results on file.

use anyhow::{Result, bail};
use gurukul_core::Portal;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::cli_utils;

pub fn run(portal: &Portal, id: &str, json: bool) -> Result<()> {
    let Some(student) = portal.resolve_student(id) else {
        bail!("Student {} not found", id);
    };
    let results = portal.get_student_results(&student.id);

    if json {
        return cli_utils::print_json(&json!({
            "student": student,
            "results": results,
        }));
    }

    println!("{} ({})", student.name.bold(), student.id.dimmed());
    println!("  Class {} / Roll {}", student.class_label, student.roll_number);
    if results.is_empty() {
        println!("  {}", "No authored results".dimmed());
    }
    for result in results {
        println!(
            "  {:<28} {:<28} {:>7} {:>6.2}%  {}",
            result.exam_type.label(),
            result.exam_period,
            result.academic_year,
            result.percentage,
            result.grade
        );
    }
    Ok(())
}
