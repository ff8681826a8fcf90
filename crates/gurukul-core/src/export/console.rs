//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::portal::ReportCard;
use crate::records::Mode;
use crate::score::{format_mark, round_1_decimal};

/// Format a report card for console display with colored output
///
/// Returns a multi-line string with a boxed format. Derived cards add a
/// written/oral/project breakdown.
pub fn format_report_card_console(card: &ReportCard) -> String {
    let mut output = String::new();
    let student = &card.student;
    let result = &card.result;

    let title_content = format!(
        "  {} [Class {} / Roll {}]",
        student.name.bold(),
        student.class_label,
        student.roll_number
    );
    let content_width = student.name.chars().count()
        + student.class_label.len()
        + student.roll_number.len()
        + 20;
    let border_width = content_width.max(50);
    let border: String = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title_content);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  ID     : {}", student.id);
    if !student.father_name.is_empty() {
        let _ = writeln!(output, "  FATHER : {}", student.father_name);
    }
    if !student.mother_name.is_empty() {
        let _ = writeln!(output, "  MOTHER : {}", student.mother_name);
    }
    let _ = writeln!(
        output,
        "  EXAM   : {} {} ({})",
        result.exam_type.label(),
        result.exam_period,
        result.academic_year
    );

    if let Some(derived) = &card.derived {
        let _ = writeln!(
            output,
            "  {:<20} {:>7} {:>7} {:>7}",
            "SUBJECT".dimmed(),
            "WRITTEN".dimmed(),
            "ORAL".dimmed(),
            "PROJECT".dimmed()
        );
        for subject in &derived.subjects {
            let _ = writeln!(
                output,
                "  {:<20} {:>7} {:>7} {:>7}",
                subject.subject,
                format_mark(subject.written),
                format_mark(subject.oral),
                format_mark(subject.project)
            );
        }
        for mode in [Mode::Written, Mode::Oral, Mode::Project] {
            let _ = writeln!(
                output,
                "  {:<7}: {}/{}",
                mode.to_string().to_uppercase(),
                derived.mode_total(mode),
                derived.mode_max(mode)
            );
        }
    } else {
        for subject in &result.academic_marks {
            let _ = writeln!(
                output,
                "  {:<20} {:>5}/{:<5} {:>5}/{}",
                subject.subject,
                subject.raw_marks,
                subject.total,
                subject.scaled_marks,
                subject.out_of
            );
        }
        let _ = writeln!(
            output,
            "  ACADEMIC      : {}",
            round_1_decimal(result.academic_total())
        );
        if !result.co_activities.is_empty() {
            let _ = writeln!(
                output,
                "  CO-CURRICULAR : {}",
                round_1_decimal(result.co_activity_total()).dimmed()
            );
        }
    }

    let _ = writeln!(
        output,
        "  TOTAL  : {}/{} ({:.2}%)",
        result.total_marks, result.max_marks, result.percentage
    );
    let _ = writeln!(
        output,
        "  GRADE  : {}",
        format_colored_grade(&result.grade, result.percentage)
    );
    if let Some(remarks) = &result.remarks {
        let _ = writeln!(output, "  REMARKS: {}", remarks.italic());
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format a grade label with a color picked from the percentage band
fn format_colored_grade(label: &str, percentage: f64) -> String {
    if percentage >= 90.0 {
        label.truecolor(255, 200, 0).bold().to_string()
    } else if percentage >= 80.0 {
        label.truecolor(0, 255, 255).to_string()
    } else if percentage >= 60.0 {
        label.green().to_string()
    } else if percentage >= 40.0 {
        label.yellow().to_string()
    } else {
        label.red().to_string()
    }
}

/// One-line report card summary for logging
pub fn format_report_card_summary(card: &ReportCard) -> String {
    format!(
        "{} {} {} {:.2}% {}{}",
        card.student.id,
        card.result.exam_type.slug(),
        card.result.exam_period,
        card.result.percentage,
        card.result.grade,
        if card.is_derived() { " [derived]" } else { "" }
    )
}
