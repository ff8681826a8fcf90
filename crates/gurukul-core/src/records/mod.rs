//! Record types of the results dataset.
//!
//! - `Student` - canonical student record
//! - `ExamType`, `ExamResult` - authored, pre-scored results
//! - `RosterClass`, `RosterEntry`, `SubjectMarks` - raw per-mode marks

mod exam;
mod roster;
mod student;

pub use exam::*;
pub use roster::*;
pub use student::*;
