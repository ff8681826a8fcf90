//! Find command: the search form of the portal.

use anyhow::{Result, bail};
use gurukul_core::Portal;
use owo_colors::OwoColorize;

use crate::cli_utils;

pub fn run(portal: &Portal, class: &str, roll: &str, name: Option<&str>, json: bool) -> Result<()> {
    let Some(student) = portal.find_student(class, roll, name) else {
        bail!("Student not found. Please check the class, roll number and name.");
    };

    if json {
        return cli_utils::print_json(&student);
    }

    println!("{} ({})", student.name.bold(), student.id.dimmed());
    println!("  Class {} / Roll {}", student.class_label, student.roll_number);
    if student.is_synthesized() {
        println!("  {}", "Roster record".dimmed());
    } else {
        println!("  Father: {}", student.father_name);
        println!("  Mother: {}", student.mother_name);
        println!("  Session: {}", student.academic_year);
    }
    Ok(())
}
