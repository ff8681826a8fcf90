//! Read-only repositories over the results dataset.
//!
//! The core never reaches for global state: every lookup goes through one
//! of these traits, so tests can hand in fixtures.

mod dataset;
mod integrity;

pub use dataset::*;
pub use integrity::*;

use crate::normalize::ClassKey;
use crate::records::{ExamResult, RosterClass, Student};

pub trait StudentRepository {
    fn students(&self) -> &[Student];

    fn student_by_id(&self, id: &str) -> Option<&Student> {
        self.students().iter().find(|s| s.id == id)
    }
}

pub trait ResultRepository {
    fn results(&self) -> &[ExamResult];
}

pub trait RosterRepository {
    fn rosters(&self) -> &[RosterClass];

    fn roster_for(&self, class: &ClassKey) -> Option<&RosterClass> {
        self.rosters()
            .iter()
            .find(|roster| roster.class_key().as_ref() == Some(class))
    }
}
