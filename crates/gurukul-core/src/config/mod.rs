//! Configuration and grading constants.
//!
//! This module contains:
//! - `Config` - portal settings loaded from TOML
//! - `AcademicYear` - session labels such as `2024-25`
//! - Mark maxima, id formatting and co-curricular constants

mod academic_year;
mod settings;

pub use academic_year::*;
pub use settings::*;

/// Maximum marks per subject for each roster mode.
///
/// 80 written + 10 oral + 10 project = 100 per subject.
pub mod marks {
    pub const WRITTEN_MAX: u32 = 80;
    pub const ORAL_MAX: u32 = 10;
    pub const PROJECT_MAX: u32 = 10;

    /// Full marks of one subject across all modes.
    pub const SUBJECT_MAX: u32 = WRITTEN_MAX + ORAL_MAX + PROJECT_MAX;

    /// Common point scale subjects are rescaled onto.
    pub const SCALED_OUT_OF: f64 = 10.0;

    /// Full marks of a converted (scaled + co-curricular) report card.
    pub const REPORT_CARD_MAX: f64 = 100.0;
}

/// Student id formatting.
pub mod ids {
    /// Id prefix used by the embedded dataset.
    pub const DEFAULT_ID_PREFIX: &str = "dbg";

    /// Zero-padding of the roll segment in synthetic ids (`dbg-4-001`).
    pub const ROLL_ID_WIDTH: usize = 3;

    /// Zero-padding of roll numbers on synthesized student records (`"01"`).
    pub const ROLL_LABEL_WIDTH: usize = 2;
}

/// Co-curricular activity defaults.
pub mod co_curricular {
    /// Maximum marks of each activity.
    pub const ACTIVITY_MAX: f64 = 5.0;

    /// Activities assumed when a roster carries no co-curricular marks.
    pub const DEFAULT_ACTIVITIES: [(&str, f64); 8] = [
        ("Discipline", 5.0),
        ("Project Work", 4.0),
        ("Attendance", 5.0),
        ("Yoga", 4.0),
        ("Class Participation", 4.0),
        ("Arts / Painting", 4.0),
        ("Oral Performance", 5.0),
        ("Fair Copy", 4.0),
    ];
}

/// Tolerance when checking authored percentages against total/max.
pub const PERCENTAGE_TOLERANCE: f64 = 0.05;
