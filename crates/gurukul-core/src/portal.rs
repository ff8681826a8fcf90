//! Portal facade: one entry point over dataset, settings and question papers.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::normalize::ClassKey;
use crate::query::{self, ClassStats};
use crate::question_paper::{PAPERS_FILE, QuestionPaperCatalog};
use crate::records::{
    ExamResult, ExamType, ResultContext, RosterClass, RosterEntry, Student, synthetic_student_id,
};
use crate::resolver::StudentResolver;
use crate::score::{DerivedScore, ScoreSource, assemble, convert_roster_class};
use crate::storage::{
    Dataset, IntegrityIssue, ResultRepository, RosterRepository, StudentRepository,
    integrity_report,
};

/// Everything needed to render one report card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub student: Student,
    pub result: ExamResult,
    /// Per-mode breakdown, present only for cards derived from roster marks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived: Option<DerivedScore>,
}

impl ReportCard {
    pub fn is_derived(&self) -> bool {
        self.derived.is_some()
    }
}

pub struct Portal<D = Dataset> {
    data: D,
    config: Config,
    papers: QuestionPaperCatalog,
}

impl Portal<Dataset> {
    /// Build a portal from settings, reading `data.dir` when set and the
    /// embedded dataset otherwise.
    pub fn from_config(config: Config) -> Result<Self> {
        let (data, papers) = match &config.data.dir {
            Some(dir) => {
                let data = Dataset::load_dir(dir)?;
                let papers_path = dir.join(PAPERS_FILE);
                let papers = if papers_path.exists() {
                    QuestionPaperCatalog::load(papers_path)?
                } else {
                    QuestionPaperCatalog::embedded()?
                };
                (data, papers)
            }
            None => (Dataset::embedded()?, QuestionPaperCatalog::embedded()?),
        };
        if data.is_empty() {
            warn!("Dataset is empty, every lookup will come back not found");
        }
        info!("Portal ready for {}", config.school.name);
        Ok(Self::new(data, config).with_papers(papers))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_config(Config::default())
    }
}

impl<D> Portal<D>
where
    D: StudentRepository + ResultRepository + RosterRepository,
{
    pub fn new(data: D, config: Config) -> Self {
        Self {
            data,
            config,
            papers: QuestionPaperCatalog::default(),
        }
    }

    pub fn with_papers(mut self, papers: QuestionPaperCatalog) -> Self {
        self.papers = papers;
        self
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn papers(&self) -> &QuestionPaperCatalog {
        &self.papers
    }

    pub fn resolver(&self) -> StudentResolver<'_, D> {
        StudentResolver::new(&self.data, self.config.id_prefix())
    }

    pub fn find_student(&self, class_label: &str, roll_number: &str, name: Option<&str>) -> Option<Student> {
        self.resolver().find_student(class_label, roll_number, name)
    }

    /// Student by id, including students that only exist in a roster.
    pub fn resolve_student(&self, id: &str) -> Option<Student> {
        self.resolver().resolve_id(id)
    }

    pub fn get_student_by_id(&self, id: &str) -> Option<&Student> {
        query::get_student_by_id(&self.data, id)
    }

    pub fn get_student_results(&self, student_id: &str) -> Vec<&ExamResult> {
        query::get_student_results(&self.data, student_id)
    }

    pub fn get_exam_result(
        &self,
        student_id: &str,
        exam_type: ExamType,
        exam_period: &str,
        academic_year: Option<&str>,
    ) -> Option<&ExamResult> {
        query::get_exam_result(&self.data, student_id, exam_type, exam_period, academic_year)
    }

    pub fn get_available_exam_periods(&self, academic_year: &str, exam_type: ExamType) -> Vec<String> {
        query::get_available_exam_periods(&self.data, academic_year, exam_type)
    }

    pub fn get_class_stats(&self, class_label: &str) -> ClassStats {
        query::get_class_stats(&self.data, class_label)
    }

    pub fn list_class_students(&self, class_label: &str) -> Vec<&Student> {
        query::list_class_students(&self.data, class_label)
    }

    pub fn roster(&self, class_label: &str) -> Option<&RosterClass> {
        self.data.roster_for(&ClassKey::parse(class_label)?)
    }

    /// Report card for one sitting.
    ///
    /// An authored result wins. Otherwise a card is derived from the
    /// student's roster marks, provided the roster's assessment is the one
    /// requested (or the roster names none).
    pub fn report_card(
        &self,
        student_id: &str,
        exam_type: ExamType,
        exam_period: &str,
        academic_year: Option<&str>,
    ) -> Option<ReportCard> {
        let student = self.resolve_student(student_id)?;

        if let Some(authored) = self.get_exam_result(&student.id, exam_type, exam_period, academic_year) {
            return Some(ReportCard {
                result: assemble(ScoreSource::Authored(authored), self.config.grading.derived_scale),
                student,
                derived: None,
            });
        }

        let (roster, entry) = self.resolver().roster_entry(&student)?;
        let context = match &roster.assessment {
            Some(assessment) if assessment.matches(exam_type, exam_period, academic_year) => {
                assessment.clone()
            }
            Some(_) => return None,
            None => ResultContext::new(exam_type, exam_period, academic_year.unwrap_or_default()),
        };

        debug!(
            "Deriving report card for {} from roster of class {}",
            student.id, roster.class_name
        );
        Some(self.derived_card(student, entry, &context))
    }

    /// Derived report cards for every student of a roster class, in roster order.
    pub fn class_report_cards(&self, class_label: &str, context: &ResultContext) -> Vec<ReportCard> {
        let Some(class) = ClassKey::parse(class_label) else {
            return Vec::new();
        };
        let Some(roster) = self.data.roster_for(&class) else {
            return Vec::new();
        };
        if !roster.covers(context) {
            debug!("Roster of class {} does not cover {:?}", class, context);
            return Vec::new();
        }

        let resolver = self.resolver();
        roster
            .students
            .iter()
            .filter_map(|entry| {
                let id = synthetic_student_id(self.config.id_prefix(), &class, entry.roll_number);
                let student = resolver.resolve_id(&id)?;
                Some(self.derived_card(student, entry, context))
            })
            .collect()
    }

    /// Convert a roster class onto the 100-point card under the configured scale.
    pub fn convert_class(&self, class_label: &str, context: &ResultContext) -> Vec<ExamResult> {
        match self.roster(class_label) {
            Some(roster) => convert_roster_class(
                roster,
                context,
                self.config.id_prefix(),
                self.config.grading.converted_scale,
            ),
            None => Vec::new(),
        }
    }

    pub fn integrity_report(&self) -> Vec<IntegrityIssue> {
        integrity_report(&self.data, self.config.id_prefix())
    }

    fn derived_card(&self, student: Student, entry: &RosterEntry, context: &ResultContext) -> ReportCard {
        let scale = self.config.grading.derived_scale;
        let result = assemble(
            ScoreSource::Derived {
                student_id: &student.id,
                entry,
                context,
            },
            scale,
        );
        ReportCard {
            derived: Some(DerivedScore::compute(entry, scale)),
            result,
            student,
        }
    }
}
