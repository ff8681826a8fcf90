//! CLI argument definitions for gurukul.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gurukul_core::{AcademicYear, ExamType, GradeScale};

#[derive(Parser)]
#[command(name = "gurukul")]
#[command(about = "School results portal", version)]
pub struct Args {
    /// Settings file (TOML)
    #[arg(long, value_name = "FILE", env = "GURUKUL_CONFIG", default_value = "gurukul.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find a student by class, roll number and name
    Find {
        /// Class label (e.g. 4, 4th, Nursery)
        #[arg(long)]
        class: String,
        /// Roll number
        #[arg(long)]
        roll: String,
        /// Full or partial name
        #[arg(long)]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the report card of one exam sitting
    Result {
        /// Student id (e.g. dbg-001, dbg-4-012)
        #[arg(long)]
        student: String,
        /// Exam type slug (jigyasa-anveshan, bodha-manthan, pragya-siddhi)
        #[arg(long, value_parser = ExamType::from_slug)]
        exam_type: ExamType,
        /// Exam period label (e.g. "I - April 2024")
        #[arg(long)]
        period: String,
        /// Academic year (e.g. 2024-25)
        #[arg(long)]
        year: Option<AcademicYear>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a student record and the results on file
    Student {
        /// Student id
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List exam periods with published results
    Periods {
        /// Exam type slug
        #[arg(long, value_parser = ExamType::from_slug)]
        exam_type: ExamType,
        /// Academic year (default: current session)
        #[arg(long)]
        year: Option<AcademicYear>,
    },
    /// Show student and result counts of a class
    Stats {
        /// Class label as written in the student records (e.g. 4th)
        #[arg(long)]
        class: String,
    },
    /// Derived report cards for every student of a roster class
    Roster {
        /// Class label
        #[arg(long)]
        class: String,
        /// Exam type slug (default: the roster's own assessment)
        #[arg(long, value_parser = ExamType::from_slug)]
        exam_type: Option<ExamType>,
        /// Exam period label (default: the roster's own assessment)
        #[arg(long)]
        period: Option<String>,
        /// Academic year (default: the roster's own assessment)
        #[arg(long)]
        year: Option<AcademicYear>,
        /// Override the configured grade scale
        #[arg(long, value_parser = GradeScale::from_name)]
        scale: Option<GradeScale>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: SheetFormat,
        /// Output file path (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Convert a roster class onto the 100-point report card
    Convert {
        /// Class label
        #[arg(long)]
        class: String,
        /// Exam type slug (default: the roster's own assessment)
        #[arg(long, value_parser = ExamType::from_slug)]
        exam_type: Option<ExamType>,
        /// Exam period label (default: the roster's own assessment)
        #[arg(long)]
        period: Option<String>,
        /// Academic year (default: the roster's own assessment)
        #[arg(long)]
        year: Option<AcademicYear>,
        /// Output file path (JSON, stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print a question paper set
    Paper {
        /// Class (e.g. 10, class-10)
        #[arg(long)]
        class: String,
        /// Subject key or name
        #[arg(long)]
        subject: Option<String>,
        /// Chapter name
        #[arg(long)]
        chapter: Option<String>,
        /// Set number
        #[arg(long, default_value = "1")]
        set: u32,
    },
    /// Check authored results for inconsistent totals and unknown students
    Check,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum SheetFormat {
    Tsv,
    Json,
    Console,
}
