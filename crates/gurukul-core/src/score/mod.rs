//! Grading and scoring.
//!
//! This module contains:
//! - `LetterGrade`, `DescriptiveGrade`, `GradeScale` - the two grade scales
//! - `DerivedScore` - totals computed from written/oral/project marks
//! - `ScoreSource`, `assemble` - authored or derived results as one shape
//! - `convert_roster_class` - roster marks onto the 100-point card

mod assemble;
mod convert;
mod derived;
mod grade;

pub use assemble::*;
pub use convert::*;
pub use derived::*;
pub use grade::*;
