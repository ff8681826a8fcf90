//! Student lookup across the canonical records and the class rosters.

use tracing::debug;

use crate::config::ids;
use crate::normalize::{
    ClassKey, normalize_name, normalize_optional_name, normalize_roll_number, parse_roll_number,
};
use crate::records::{
    RosterClass, RosterEntry, Student, parse_synthetic_student_id, synthetic_student_id,
};
use crate::storage::{RosterRepository, StudentRepository};

/// Resolves `(class, roll, name)` searches to a student.
///
/// Names match by case-insensitive substring containment, so "aditya"
/// finds "Aditya Kumar". Without a name, class and roll must identify a
/// single record.
pub struct StudentResolver<'a, D> {
    data: &'a D,
    id_prefix: &'a str,
}

impl<'a, D> StudentResolver<'a, D>
where
    D: StudentRepository + RosterRepository,
{
    pub fn new(data: &'a D, id_prefix: &'a str) -> Self {
        Self { data, id_prefix }
    }

    /// Find a student, first among canonical records, then in the rosters.
    ///
    /// Returns `None` when nothing matches; malformed input is never an error.
    pub fn find_student(
        &self,
        class_label: &str,
        roll_number: &str,
        name: Option<&str>,
    ) -> Option<Student> {
        let search_name = normalize_optional_name(name);

        if let Some(student) = self.find_canonical(class_label, roll_number, &search_name) {
            return Some(student.clone());
        }

        debug!(
            "No canonical match for class={:?} roll={:?}, checking rosters",
            class_label, roll_number
        );
        self.find_in_roster(class_label, roll_number, &search_name)
    }

    fn find_canonical(&self, class_label: &str, roll_number: &str, search_name: &str) -> Option<&'a Student> {
        let class_label = class_label.trim();
        let roll = normalize_roll_number(roll_number);
        if roll.is_empty() {
            return None;
        }

        let candidates = self.data.students().iter().filter(|s| {
            s.class_label.trim() == class_label
                && normalize_roll_number(&s.roll_number) == roll
                && name_matches(&s.name, search_name)
        });
        pick(candidates, search_name.is_empty())
    }

    fn find_in_roster(&self, class_label: &str, roll_number: &str, search_name: &str) -> Option<Student> {
        let class = ClassKey::parse(class_label)?;
        let roster = self.data.roster_for(&class)?;
        let roll = parse_roll_number(roll_number)?;

        let candidates = roster
            .students
            .iter()
            .filter(|entry| entry.roll_number == roll && name_matches(&entry.name, search_name));
        let entry = pick(candidates, search_name.is_empty())?;

        let id = synthetic_student_id(self.id_prefix, &class, entry.roll_number);
        if let Some(student) = self.data.student_by_id(&id) {
            debug!("Roster line {} has a canonical record", id);
            return Some(student.clone());
        }

        debug!("Resolved {} from roster of class {}", entry.name, class);
        Some(self.synthesize(&class, class_label.trim(), entry))
    }

    /// Look a student up by id, rebuilding roster students from synthetic ids.
    pub fn resolve_id(&self, id: &str) -> Option<Student> {
        if let Some(student) = self.data.student_by_id(id) {
            return Some(student.clone());
        }

        let (class_segment, roll) = parse_synthetic_student_id(self.id_prefix, id)?;
        let class = ClassKey::parse(&class_segment.replace('_', " "))?;
        let entry = self.data.roster_for(&class)?.entry(roll)?;
        Some(self.synthesize(&class, &class.display_label(), entry))
    }

    /// Roster line holding the raw marks of `student`, if any.
    ///
    /// The roster line must agree on roll number and (normalized) name, so
    /// two canonical students sharing a roll number are never mixed up.
    pub fn roster_entry(&self, student: &Student) -> Option<(&'a RosterClass, &'a RosterEntry)> {
        let class = student.class_key()?;
        let roster = self.data.roster_for(&class)?;
        let roll = parse_roll_number(&student.roll_number)?;
        let entry = roster.entry(roll)?;
        if normalize_name(&entry.name) != normalize_name(&student.name) {
            return None;
        }
        Some((roster, entry))
    }

    fn synthesize(&self, class: &ClassKey, class_label: &str, entry: &RosterEntry) -> Student {
        Student {
            id: synthetic_student_id(self.id_prefix, class, entry.roll_number),
            name: entry.name.clone(),
            class_label: class_label.to_string(),
            roll_number: format!("{:0width$}", entry.roll_number, width = ids::ROLL_LABEL_WIDTH),
            father_name: String::new(),
            mother_name: String::new(),
            academic_year: String::new(),
            from_roster: true,
        }
    }
}

fn name_matches(stored: &str, search_name: &str) -> bool {
    normalize_name(stored).contains(search_name)
}

/// First candidate, or `None` if uniqueness is required and there are several.
fn pick<'b, T: 'b>(mut candidates: impl Iterator<Item = &'b T>, require_unique: bool) -> Option<&'b T> {
    let first = candidates.next()?;
    if require_unique && candidates.next().is_some() {
        debug!("Ambiguous lookup without a name, treating as not found");
        return None;
    }
    Some(first)
}
