//! Paper command: browse the question paper catalog.

use anyhow::{Result, bail};
use gurukul_core::{Portal, QuestionSet};
use owo_colors::OwoColorize;

pub fn run(
    portal: &Portal,
    class: &str,
    subject: Option<&str>,
    chapter: Option<&str>,
    set: u32,
) -> Result<()> {
    let papers = portal.papers();

    let Some(subject) = subject else {
        let subjects = papers.subjects(class);
        if subjects.is_empty() {
            bail!("No question papers for class {}", class);
        }
        for s in subjects {
            println!("{} ({})", s.name, s.key.dimmed());
        }
        return Ok(());
    };

    let Some(chapter) = chapter else {
        let chapters = papers.chapters(class, subject);
        if chapters.is_empty() {
            bail!("No chapters for {} in class {}", subject, class);
        }
        for c in chapters {
            println!("{} [{} sets]", c.name, c.sets.len());
        }
        return Ok(());
    };

    match papers.find_set(class, subject, chapter, set) {
        Some(question_set) => {
            print_set(chapter, question_set);
            Ok(())
        }
        None => bail!("Set {} of {} / {} not found", set, subject, chapter),
    }
}

fn print_set(chapter: &str, set: &QuestionSet) {
    println!(
        "{} - Set {} ({} marks)",
        chapter.bold(),
        set.number,
        set.total_marks()
    );

    if !set.objective_questions.is_empty() {
        println!("\n{}", "Objective".underline());
        for q in &set.objective_questions {
            println!("{:>3}. {} [{}]", q.number, q.text, q.marks);
            println!(
                "     (a) {}  (b) {}  (c) {}  (d) {}",
                q.options.a, q.options.b, q.options.c, q.options.d
            );
        }
    }

    if !set.short_answer_questions.is_empty() {
        println!("\n{}", "Short answer".underline());
        for q in &set.short_answer_questions {
            println!("{:>3}. {} [{}]", q.number, q.text, q.marks);
        }
    }

    if !set.long_answer_questions.is_empty() {
        println!("\n{}", "Long answer".underline());
        for q in &set.long_answer_questions {
            println!("{:>3}. {} [{}]", q.number, q.text, q.marks);
            if let Some(or_question) = &q.or_question {
                println!("     {}", "OR".dimmed());
                println!("     {}", or_question);
            }
        }
    }
}
