mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise warn, or debug with --verbose
    let default_filter = if args.verbose {
        "gurukul_cli=debug,gurukul_core=debug"
    } else {
        "gurukul_cli=warn,gurukul_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = cli_utils::load_config(&args.config);
    if let Command::Roster {
        scale: Some(scale), ..
    } = &args.command
    {
        config.grading.derived_scale = *scale;
    }
    let portal = cli_utils::open_portal(config)?;

    match args.command {
        Command::Find {
            class,
            roll,
            name,
            json,
        } => commands::find::run(&portal, &class, &roll, name.as_deref(), json),
        Command::Result {
            student,
            exam_type,
            period,
            year,
            json,
        } => commands::result::run(&portal, &student, exam_type, &period, year, json),
        Command::Student { id, json } => commands::student::run(&portal, &id, json),
        Command::Periods { exam_type, year } => commands::periods::run(&portal, exam_type, year),
        Command::Stats { class } => commands::stats::run(&portal, &class),
        Command::Roster {
            class,
            exam_type,
            period,
            year,
            scale: _,
            format,
            output,
        } => commands::roster::run(
            &portal,
            &class,
            exam_type,
            period,
            year,
            format,
            output.as_deref(),
        ),
        Command::Convert {
            class,
            exam_type,
            period,
            year,
            output,
        } => commands::convert::run(&portal, &class, exam_type, period, year, output.as_deref()),
        Command::Paper {
            class,
            subject,
            chapter,
            set,
        } => commands::paper::run(
            &portal,
            &class,
            subject.as_deref(),
            chapter.as_deref(),
            set,
        ),
        Command::Check => commands::check::run(&portal),
    }
}
