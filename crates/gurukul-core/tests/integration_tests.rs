//! Integration tests for gurukul-core
//!
//! These tests run the resolver, query helpers and report-card assembly
//! together over the embedded dataset.

use gurukul_core::records::Mode;
use gurukul_core::score::{LetterGrade, convert_roster_class};
use gurukul_core::{
    ClassKey, Config, Dataset, ExamType, Grade, GradeScale, Portal, ResultContext,
    RosterRepository, StudentResolver,
};

fn portal() -> Portal {
    Portal::embedded().unwrap()
}

/// Search form scenarios
mod find_student_tests {
    use super::*;

    #[test]
    fn test_roster_class_partial_name() {
        let student = portal().find_student("4", "1", Some("Aditya")).unwrap();
        assert!(student.id.ends_with("-4-001"));
        assert_eq!(student.name, "Aditya Kumar");
    }

    #[test]
    fn test_canonical_ordinal_class() {
        let student = portal().find_student("4th", "01", Some("aditya kumar")).unwrap();
        assert_eq!(student.id, "dbg-4-001");
        assert_eq!(student.academic_year, "2025-26");
        assert!(!student.is_synthesized());
    }

    #[test]
    fn test_shared_roll_without_name_returns_full_record() {
        let student = portal().find_student("4th", "01", None).unwrap();
        assert_eq!(student.id, "dbg-4-001");
        assert_eq!(student.academic_year, "2025-26");
        assert!(!student.is_synthesized());
    }

    #[test]
    fn test_padded_roll_number() {
        let portal = portal();
        let padded = portal.find_student("1st", "001", Some("Aarav")).unwrap();
        let plain = portal.find_student("1st", "1", Some("Aarav")).unwrap();
        assert_eq!(padded, plain);
    }

    #[test]
    fn test_unknown_roll_in_every_class() {
        let portal = portal();
        for class in ["1st", "4th", "4", "10th", "12th", "Nursery", "LKG", "UKG"] {
            assert!(portal.find_student(class, "99", None).is_none(), "class {}", class);
        }
    }

    #[test]
    fn test_wrong_name_is_not_found() {
        assert!(portal().find_student("4", "1", Some("Lalan")).is_none());
    }

    #[test]
    fn test_custom_id_prefix() {
        let data = Dataset::embedded().unwrap();
        let resolver = StudentResolver::new(&data, "gk");
        let student = resolver.find_student("4", "02", None).unwrap();
        assert_eq!(student.id, "gk-4-002");
        assert_eq!(resolver.resolve_id("gk-4-002").map(|s| s.name), Some("Lalan Kumar".to_string()));
    }
}

/// Query helper scenarios
mod query_tests {
    use super::*;

    #[test]
    fn test_available_periods_sorted_and_unique() {
        let periods = portal().get_available_exam_periods("2024-25", ExamType::JigyasaAnveshan);
        assert_eq!(periods, vec!["I - April 2024", "II - May 2024", "III - June 2024"]);

        let mut sorted = periods.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(periods, sorted);
    }

    #[test]
    fn test_student_results_and_exam_result() {
        let portal = portal();
        assert_eq!(portal.get_student_results("dbg-007").len(), 2);

        let result = portal
            .get_exam_result("dbg-001", ExamType::BodhaManthan, "Mid-term - September 2024", Some("2024-25"))
            .unwrap();
        assert_eq!(result.grade, "Outstanding");
        assert!(result.total_marks <= result.max_marks);
    }

    #[test]
    fn test_class_stats() {
        let stats = portal().get_class_stats("1st");
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_results, 6);
    }

    #[test]
    fn test_get_student_by_id() {
        let portal = portal();
        assert_eq!(portal.get_student_by_id("dbg-008").map(|s| s.name.as_str()), Some("Pihu Pandey"));
        assert!(portal.get_student_by_id("dbg-4-099").is_none());
    }
}

/// Report card assembly scenarios
mod report_card_tests {
    use super::*;

    #[test]
    fn test_aditya_derived_totals() {
        let data = Dataset::embedded().unwrap();
        let roster = data.roster_for(&ClassKey::Numbered(4)).unwrap();
        let entry = roster.entry(1).unwrap();
        let expected: u32 = entry.subjects.iter().map(|s| s.total()).sum();

        let card = portal()
            .report_card("dbg-4-001", ExamType::BodhaManthan, "I - July 2025", Some("2025-26"))
            .unwrap();
        let derived = card.derived.unwrap();

        assert_eq!(derived.grand_total, expected);
        assert_eq!(derived.grand_total, 248);
        assert_eq!(derived.mode_total(Mode::Written), 183);
        assert_eq!(derived.mode_max(Mode::Written), 320);
        assert_eq!(derived.max_total, 400);
        assert!((derived.percentage - 62.0).abs() < 1e-9);
        assert_eq!(derived.grade, Grade::Letter(LetterGrade::C1));
    }

    #[test]
    fn test_grades_across_the_roster() {
        let portal = portal();
        let context = ResultContext::new(ExamType::BodhaManthan, "I - July 2025", "2025-26");
        let cards = portal.class_report_cards("4th", &context);

        let grade_of = |roll: &str| {
            cards
                .iter()
                .find(|c| c.student.roll_number == roll)
                .map(|c| c.result.grade.clone())
        };
        assert_eq!(grade_of("12").as_deref(), Some("B1"));
        assert_eq!(grade_of("03").as_deref(), Some("D"));
        assert_eq!(grade_of("11").as_deref(), Some("E"));
    }

    #[test]
    fn test_all_null_entry_is_zero_and_e() {
        let card = portal()
            .report_card("dbg-4-013", ExamType::BodhaManthan, "I - July 2025", None)
            .unwrap();
        assert_eq!(card.result.total_marks, 0.0);
        assert_eq!(card.result.percentage, 0.0);
        assert_eq!(card.result.grade, "E");
    }

    #[test]
    fn test_authored_grade_not_regraded() {
        let card = portal()
            .report_card("dbg-007", ExamType::JigyasaAnveshan, "III - June 2024", None)
            .unwrap();
        assert_eq!(card.result.grade, "Commendable");
        assert_eq!(card.result.grade_under(GradeScale::Descriptive).label(), "Excellent");
        assert_eq!(card.result.grade_under(GradeScale::Letter).label(), "B1");
    }

    #[test]
    fn test_convert_embedded_roster() {
        let data = Dataset::embedded().unwrap();
        let roster = data.roster_for(&ClassKey::Numbered(4)).unwrap();
        let context = roster.assessment.clone().unwrap();
        let results = convert_roster_class(roster, &context, "dbg", GradeScale::Descriptive);

        assert_eq!(results.len(), 21);
        assert!(results.iter().all(|r| r.max_marks == 100.0));
        assert!(results.iter().all(|r| r.total_marks <= r.max_marks));

        let aditya = &results[0];
        assert_eq!(aditya.student_id, "dbg-4-001");
        assert_eq!(aditya.total_marks, 59.8);
        assert_eq!(aditya.grade, "Average");
    }

    #[test]
    fn test_config_driven_portal() {
        let config = Config::parse("[grading]\nderived_scale = \"descriptive\"\n").unwrap();
        let portal = Portal::from_config(config).unwrap();
        let card = portal
            .report_card("dbg-4-012", ExamType::BodhaManthan, "I - July 2025", None)
            .unwrap();
        assert_eq!(card.result.grade, "Excellent");
    }
}

/// Dataset integrity
mod integrity_tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_has_no_issues() {
        assert!(portal().integrity_report().is_empty());
    }
}
