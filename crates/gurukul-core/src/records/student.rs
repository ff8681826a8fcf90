use serde::{Deserialize, Serialize};

use crate::config::ids;
use crate::normalize::ClassKey;

/// Canonical student record.
///
/// In practice a student is identified by `(class_label, roll_number)`;
/// `id` is a synthetic key that encodes both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_label: String,
    #[serde(rename = "rollNo")]
    pub roll_number: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_name: String,
    /// Session in which the student was registered.
    #[serde(default)]
    pub academic_year: String,
    /// Built from a roster line rather than read from the student records.
    #[serde(default, skip_serializing_if = "is_false")]
    pub from_roster: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Student {
    pub fn class_key(&self) -> Option<ClassKey> {
        ClassKey::parse(&self.class_label)
    }

    /// Students synthesized from a roster carry no parent or registration data.
    pub fn is_synthesized(&self) -> bool {
        self.from_roster
    }
}

/// Build the synthetic id for a roster student: `<prefix>-<class>-<roll:03>`.
pub fn synthetic_student_id(prefix: &str, class: &ClassKey, roll_number: u32) -> String {
    format!(
        "{}-{}-{:0width$}",
        prefix,
        class.id_segment(),
        roll_number,
        width = ids::ROLL_ID_WIDTH
    )
}

/// Split a synthetic id back into its class segment and roll number.
///
/// Canonical ids such as `dbg-007` have no class segment and yield `None`.
pub fn parse_synthetic_student_id<'a>(prefix: &str, id: &'a str) -> Option<(&'a str, u32)> {
    let rest = id.strip_prefix(prefix)?.strip_prefix('-')?;
    let (class_segment, roll) = rest.rsplit_once('-')?;
    if class_segment.is_empty() || roll.is_empty() || !roll.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((class_segment, roll.parse().ok()?))
}
