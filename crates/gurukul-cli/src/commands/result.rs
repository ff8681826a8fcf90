//! Result command: one report card.

use anyhow::{Result, bail};
use gurukul_core::export::{
    format_report_card_console, format_report_card_summary, report_card_json,
};
use gurukul_core::{AcademicYear, ExamType, Portal};
use tracing::debug;

pub fn run(
    portal: &Portal,
    student_id: &str,
    exam_type: ExamType,
    period: &str,
    year: Option<AcademicYear>,
    json: bool,
) -> Result<()> {
    let year = year.map(|y| y.to_string());
    let Some(card) = portal.report_card(student_id, exam_type, period, year.as_deref()) else {
        bail!(
            "No {} result for {} in {}. Please check your details.",
            exam_type.label(),
            student_id,
            period
        );
    };

    debug!("{}", format_report_card_summary(&card));
    if json {
        println!("{}", report_card_json(&card)?);
    } else {
        println!("{}", format_report_card_console(&card));
    }
    Ok(())
}
