pub mod config;
pub mod error;
pub mod export;
pub mod normalize;
pub mod portal;
pub mod query;
pub mod question_paper;
pub mod records;
pub mod resolver;
pub mod score;
pub mod storage;

pub use config::{AcademicYear, Config};
pub use error::{Error, Result};
pub use normalize::{ClassKey, normalize_name, normalize_roll_number};
pub use portal::{Portal, ReportCard};
pub use query::ClassStats;
pub use question_paper::{QuestionPaperCatalog, QuestionSet};
pub use records::{ExamResult, ExamType, ResultContext, RosterClass, RosterEntry, Student, SubjectMarks};
pub use resolver::StudentResolver;
pub use score::{DerivedScore, DescriptiveGrade, Grade, GradeScale, LetterGrade, ScoreSource, assemble};
pub use storage::{Dataset, ResultRepository, RosterRepository, StudentRepository};
