//! Export formats for report cards and class sheets.

mod console;

pub use console::*;

use serde_json::{Value as JsonValue, json};

use crate::error::Result;
use crate::portal::ReportCard;
use crate::records::Mode;
use crate::score::MISSING_MARK;

/// Pretty JSON of a report card, as handed to a renderer.
pub fn report_card_json(card: &ReportCard) -> Result<String> {
    Ok(serde_json::to_string_pretty(card)?)
}

/// JSON of a class sheet with school and assessment context.
pub fn class_sheet_json(school: &str, cards: &[ReportCard]) -> JsonValue {
    let context = cards.first().map(|card| card.result.context());
    json!({
        "school": school,
        "assessment": context,
        "students": cards,
    })
}

pub fn format_class_sheet_header() -> String {
    [
        "Roll",
        "Name",
        "Written",
        "Oral",
        "Project",
        "Total",
        "Max",
        "Percentage",
        "Grade",
    ]
    .join("\t")
}

/// One TSV row. Authored cards have no per-mode split, so those columns show the placeholder.
pub fn format_class_sheet_row(card: &ReportCard) -> String {
    let mode_column = |mode: Mode| match &card.derived {
        Some(derived) => derived.mode_total(mode).to_string(),
        None => MISSING_MARK.to_string(),
    };

    [
        card.student.roll_number.clone(),
        card.student.name.clone(),
        mode_column(Mode::Written),
        mode_column(Mode::Oral),
        mode_column(Mode::Project),
        card.result.total_marks.to_string(),
        card.result.max_marks.to_string(),
        format!("{:.2}", card.result.percentage),
        card.result.grade.clone(),
    ]
    .join("\t")
}

pub fn format_class_sheet_tsv(cards: &[ReportCard]) -> String {
    let mut lines = vec![format_class_sheet_header()];
    lines.extend(cards.iter().map(format_class_sheet_row));
    lines.join("\n")
}
