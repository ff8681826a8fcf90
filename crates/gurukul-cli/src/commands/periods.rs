//! Periods command: exam periods with published results.

use anyhow::Result;
use gurukul_core::{AcademicYear, ExamType, Portal};

use crate::cli_utils;

pub fn run(portal: &Portal, exam_type: ExamType, year: Option<AcademicYear>) -> Result<()> {
    let year = year.unwrap_or_else(cli_utils::current_academic_year);
    let periods = portal.get_available_exam_periods(&year.to_string(), exam_type);

    if periods.is_empty() {
        eprintln!(
            "No {} results published for {} (try --year {})",
            exam_type.label(),
            year,
            year.previous()
        );
        return Ok(());
    }

    println!("{} {} ({})", exam_type.label(), exam_type.hindi_name(), year);
    for period in periods {
        println!("  {}", period);
    }
    Ok(())
}
