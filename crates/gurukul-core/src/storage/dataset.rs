use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::records::{ExamResult, RosterClass, Student};

use super::{ResultRepository, RosterRepository, StudentRepository};

const EMBEDDED_STUDENTS: &str = include_str!("../../data/students.json");
const EMBEDDED_RESULTS: &str = include_str!("../../data/results.json");
const EMBEDDED_ROSTERS: &str = include_str!("../../data/rosters.json");

pub const STUDENTS_FILE: &str = "students.json";
pub const RESULTS_FILE: &str = "results.json";
pub const ROSTERS_FILE: &str = "rosters.json";

/// In-memory dataset: canonical students, authored results and rosters.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    students: Vec<Student>,
    results: Vec<ExamResult>,
    rosters: Vec<RosterClass>,
}

impl Dataset {
    pub fn new(students: Vec<Student>, results: Vec<ExamResult>, rosters: Vec<RosterClass>) -> Self {
        Self {
            students,
            results,
            rosters,
        }
    }

    /// Dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let dataset = Self::new(
            decode(STUDENTS_FILE, EMBEDDED_STUDENTS)?,
            decode(RESULTS_FILE, EMBEDDED_RESULTS)?,
            decode(ROSTERS_FILE, EMBEDDED_ROSTERS)?,
        );
        debug!(
            "Embedded dataset: {} students, {} results, {} rosters",
            dataset.students.len(),
            dataset.results.len(),
            dataset.rosters.len()
        );
        Ok(dataset)
    }

    /// Load a dataset from a directory of JSON files.
    ///
    /// `students.json` and `results.json` are required; `rosters.json` is optional.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let students = decode(STUDENTS_FILE, &fs::read_to_string(dir.join(STUDENTS_FILE))?)?;
        let results = decode(RESULTS_FILE, &fs::read_to_string(dir.join(RESULTS_FILE))?)?;

        let rosters_path = dir.join(ROSTERS_FILE);
        let rosters = if rosters_path.exists() {
            decode(ROSTERS_FILE, &fs::read_to_string(rosters_path)?)?
        } else {
            Vec::new()
        };

        let dataset = Self::new(students, results, rosters);
        info!(
            "Loaded dataset from {}: {} students, {} results, {} rosters",
            dir.display(),
            dataset.students.len(),
            dataset.results.len(),
            dataset.rosters.len()
        );
        Ok(dataset)
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.results.is_empty() && self.rosters.is_empty()
    }
}

fn decode<T: DeserializeOwned>(name: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| Error::dataset(name, e.to_string()))
}

impl StudentRepository for Dataset {
    fn students(&self) -> &[Student] {
        &self.students
    }
}

impl ResultRepository for Dataset {
    fn results(&self) -> &[ExamResult] {
        &self.results
    }
}

impl RosterRepository for Dataset {
    fn rosters(&self) -> &[RosterClass] {
        &self.rosters
    }
}
