//! String normalization for names, roll numbers and class labels.
//!
//! Every function here is total: any input, including the empty string,
//! produces a value and nothing panics.

use std::fmt;

/// Normalize a student name for comparison.
///
/// Trims, lowercases and collapses internal whitespace runs to one space.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize an optional name; an absent name normalizes to `""`.
pub fn normalize_optional_name(name: Option<&str>) -> String {
    name.map(normalize_name).unwrap_or_default()
}

/// Normalize a roll number: trim and strip leading zeros.
///
/// `"007"` becomes `"7"`, while `"0"` and `"000"` stay `"0"`.
pub fn normalize_roll_number(roll: &str) -> String {
    let trimmed = roll.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let stripped = trimmed.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Extract the class number from a label such as `"4"`, `"4th"` or `"Class 10"`.
pub fn parse_class_number(label: &str) -> Option<u32> {
    let digits: String = label.trim().chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parse a roll number as an integer, tolerating padding and whitespace.
pub fn parse_roll_number(roll: &str) -> Option<u32> {
    normalize_roll_number(roll).parse().ok()
}

/// Ordinal label for a class number (`4` -> `"4th"`).
pub fn ordinal_label(number: u32) -> String {
    let suffix = match (number % 10, number % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}

/// Whitespace- and case-insensitive key used for catalog matching.
pub fn normalize_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Key identifying a class independently of how its label is written.
///
/// Numbered classes compare by number, so `"4"`, `"4th"` and `"Class 4"`
/// are the same class. Labels without digits (`"Nursery"`, `"LKG"`) fall
/// back to normalized string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassKey {
    Numbered(u32),
    Named(String),
}

impl ClassKey {
    pub fn parse(label: &str) -> Option<Self> {
        if let Some(number) = parse_class_number(label) {
            return Some(Self::Numbered(number));
        }
        let named = normalize_name(label);
        if named.is_empty() {
            None
        } else {
            Some(Self::Named(named))
        }
    }

    /// Segment used inside synthetic student ids.
    pub fn id_segment(&self) -> String {
        match self {
            Self::Numbered(n) => n.to_string(),
            Self::Named(name) => name.replace(' ', "_"),
        }
    }

    /// Display label in the style of the canonical records (`"4th"`, `"nursery"`).
    pub fn display_label(&self) -> String {
        match self {
            Self::Numbered(n) => ordinal_label(*n),
            Self::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbered(n) => write!(f, "{}", n),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}
