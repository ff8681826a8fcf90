//! Roster command: derived report cards of a whole class.

use std::path::Path;

use anyhow::{Result, bail};
use gurukul_core::export::{class_sheet_json, format_class_sheet_tsv, format_report_card_console};
use gurukul_core::{AcademicYear, ExamType, Portal};

use crate::cli::SheetFormat;
use crate::cli_utils;

pub fn run(
    portal: &Portal,
    class: &str,
    exam_type: Option<ExamType>,
    period: Option<String>,
    year: Option<AcademicYear>,
    format: SheetFormat,
    output: Option<&Path>,
) -> Result<()> {
    let context = cli_utils::roster_context(portal, class, exam_type, period, year)?;

    let cards = portal.class_report_cards(class, &context);
    if cards.is_empty() {
        bail!(
            "No marks for class {} in {} {} ({})",
            class,
            context.exam_type.label(),
            context.exam_period,
            context.academic_year
        );
    }

    let content = match format {
        SheetFormat::Tsv => format_class_sheet_tsv(&cards),
        SheetFormat::Json => {
            serde_json::to_string_pretty(&class_sheet_json(&portal.config().school.name, &cards))?
        }
        SheetFormat::Console => cards
            .iter()
            .map(format_report_card_console)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    cli_utils::emit(&content, output)
}
