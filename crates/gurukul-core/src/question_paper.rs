//! Question paper catalog: class -> subject -> chapter -> numbered sets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::{ClassKey, normalize_key};

const EMBEDDED_PAPERS: &str = include_str!("../data/papers.json");

pub const PAPERS_FILE: &str = "papers.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOptions {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveQuestion {
    pub number: u32,
    pub text: String,
    pub options: AnswerOptions,
    pub marks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortAnswerQuestion {
    pub number: u32,
    pub text: String,
    pub marks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongAnswerQuestion {
    pub number: u32,
    pub text: String,
    /// Internal choice offered instead of `text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub or_question: Option<String>,
    pub marks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    #[serde(rename = "set")]
    pub number: u32,
    #[serde(default)]
    pub objective_questions: Vec<ObjectiveQuestion>,
    #[serde(default)]
    pub short_answer_questions: Vec<ShortAnswerQuestion>,
    #[serde(default)]
    pub long_answer_questions: Vec<LongAnswerQuestion>,
}

impl QuestionSet {
    /// Full marks of the set. An "OR" alternative does not add marks.
    pub fn total_marks(&self) -> u32 {
        let objective: u32 = self.objective_questions.iter().map(|q| q.marks).sum();
        let short: u32 = self.short_answer_questions.iter().map(|q| q.marks).sum();
        let long: u32 = self.long_answer_questions.iter().map(|q| q.marks).sum();
        objective + short + long
    }

    pub fn question_count(&self) -> usize {
        self.objective_questions.len() + self.short_answer_questions.len() + self.long_answer_questions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    pub sets: Vec<QuestionSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPapers {
    /// Slug such as `science`
    pub key: String,
    pub name: String,
    pub chapters: Vec<Chapter>,
}

impl SubjectPapers {
    fn matches(&self, subject: &str) -> bool {
        let wanted = normalize_key(subject);
        normalize_key(&self.key) == wanted || normalize_key(&self.name) == wanted
    }

    pub fn chapter(&self, chapter: &str) -> Option<&Chapter> {
        let wanted = normalize_key(chapter);
        self.chapters.iter().find(|c| normalize_key(&c.name) == wanted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPapers {
    /// Catalog key such as `class-10`
    pub class_key: String,
    pub subjects: Vec<SubjectPapers>,
}

/// All question papers, grouped by class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionPaperCatalog {
    classes: Vec<ClassPapers>,
}

impl QuestionPaperCatalog {
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_PAPERS)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(content).map_err(|e| Error::dataset(PAPERS_FILE, e.to_string()))?;
        debug!("Question paper catalog: {} classes", catalog.classes.len());
        Ok(catalog)
    }

    pub fn classes(&self) -> &[ClassPapers] {
        &self.classes
    }

    /// Find a class by any label naming it: `class-10`, `10`, `10th`.
    pub fn class(&self, class_label: &str) -> Option<&ClassPapers> {
        let wanted = ClassKey::parse(class_label)?;
        self.classes
            .iter()
            .find(|c| ClassKey::parse(&c.class_key).as_ref() == Some(&wanted))
    }

    pub fn subjects(&self, class_label: &str) -> Vec<&SubjectPapers> {
        self.class(class_label)
            .map(|c| c.subjects.iter().collect())
            .unwrap_or_default()
    }

    pub fn subject(&self, class_label: &str, subject: &str) -> Option<&SubjectPapers> {
        self.class(class_label)?
            .subjects
            .iter()
            .find(|s| s.matches(subject))
    }

    pub fn chapters(&self, class_label: &str, subject: &str) -> Vec<&Chapter> {
        self.subject(class_label, subject)
            .map(|s| s.chapters.iter().collect())
            .unwrap_or_default()
    }

    /// Look up one set; subject and chapter ignore case and whitespace.
    pub fn find_set(
        &self,
        class_label: &str,
        subject: &str,
        chapter: &str,
        set_number: u32,
    ) -> Option<&QuestionSet> {
        self.subject(class_label, subject)?
            .chapter(chapter)?
            .sets
            .iter()
            .find(|s| s.number == set_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = QuestionPaperCatalog::embedded().unwrap();
        assert_eq!(catalog.classes().len(), 2);
        assert_eq!(catalog.subjects("class-10").len(), 1);
        assert_eq!(catalog.subjects("10th")[0].name, "Science");
        assert!(catalog.subjects("9").is_empty());
    }

    #[test]
    fn test_find_set_ignores_case_and_whitespace() {
        let catalog = QuestionPaperCatalog::embedded().unwrap();
        let set = catalog
            .find_set("10", "  SCIENCE", "light-reflection and refraction", 1)
            .unwrap();
        assert_eq!(set.number, 1);
        assert_eq!(set.objective_questions.len(), 25);
        assert_eq!(set.short_answer_questions.len(), 10);
        assert_eq!(set.long_answer_questions.len(), 1);
        assert_eq!(set.question_count(), 36);
        assert_eq!(set.total_marks(), 50);
        assert!(set.long_answer_questions[0].or_question.is_some());
    }

    #[test]
    fn test_find_set_missing() {
        let catalog = QuestionPaperCatalog::embedded().unwrap();
        assert!(catalog.find_set("10", "Science", "Light - Reflection and Refraction", 9).is_none());
        assert!(catalog.find_set("10", "Physics", "Electrostatics", 1).is_none());
        assert!(catalog.find_set("12", "physics", "Electrostatics", 1).is_some());
    }

    #[test]
    fn test_chapters_listing() {
        let catalog = QuestionPaperCatalog::embedded().unwrap();
        let chapters = catalog.chapters("class-12", "Physics");
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name, "Electrostatics");
    }

    #[test]
    fn test_parse_rejects_bad_catalog() {
        assert!(matches!(
            QuestionPaperCatalog::parse("{\"classKey\": 1}"),
            Err(Error::Dataset { .. })
        ));
    }
}
