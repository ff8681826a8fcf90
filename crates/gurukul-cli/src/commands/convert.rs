//! Convert command: roster marks onto the 100-point report card.

use std::path::Path;

use anyhow::{Result, bail};
use gurukul_core::{AcademicYear, ExamType, Portal};

use crate::cli_utils;

pub fn run(
    portal: &Portal,
    class: &str,
    exam_type: Option<ExamType>,
    period: Option<String>,
    year: Option<AcademicYear>,
    output: Option<&Path>,
) -> Result<()> {
    let context = cli_utils::roster_context(portal, class, exam_type, period, year)?;
    let results = portal.convert_class(class, &context);
    if results.is_empty() {
        bail!("No marks entered for class {}", class);
    }

    eprintln!(
        "Converted {} students of class {} ({} grades)",
        results.len(),
        class,
        portal.config().grading.converted_scale
    );
    cli_utils::emit(&serde_json::to_string_pretty(&results)?, output)
}
