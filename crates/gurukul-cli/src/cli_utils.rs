//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gurukul_core::{AcademicYear, Config, ExamType, Portal, ResultContext};
use serde::Serialize;
use tracing::{debug, warn};

/// Load settings, falling back to defaults when the file is missing or invalid.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Config::default();
    }
    match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Build the portal over the configured or embedded dataset.
pub fn open_portal(config: Config) -> Result<Portal> {
    Portal::from_config(config).context("Failed to load results dataset")
}

/// Session the portal currently runs in.
pub fn current_academic_year() -> AcademicYear {
    AcademicYear::containing(chrono::Local::now().date_naive())
}

/// Assessment of a roster class, with any part overridden from the command line.
pub fn roster_context(
    portal: &Portal,
    class: &str,
    exam_type: Option<ExamType>,
    period: Option<String>,
    year: Option<AcademicYear>,
) -> Result<ResultContext> {
    let roster = portal
        .roster(class)
        .with_context(|| format!("No roster for class {}", class))?;
    let assessment = roster.assessment.as_ref();

    let exam_type = exam_type
        .or(assessment.map(|a| a.exam_type))
        .context("The roster names no assessment; pass --exam-type")?;
    let exam_period = period
        .or(assessment.map(|a| a.exam_period.clone()))
        .context("The roster names no assessment; pass --period")?;
    let academic_year = match (year, assessment) {
        (Some(year), _) => year.to_string(),
        (None, Some(a)) => a.academic_year.clone(),
        (None, None) => current_academic_year().to_string(),
    };

    Ok(ResultContext::new(exam_type, exam_period, academic_year))
}

/// Write to `output` when given, otherwise print to stdout.
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
