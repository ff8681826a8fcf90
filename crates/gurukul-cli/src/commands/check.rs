//! Check command: integrity report over authored results.

use anyhow::{Result, bail};
use gurukul_core::Portal;
use owo_colors::OwoColorize;

pub fn run(portal: &Portal) -> Result<()> {
    let issues = portal.integrity_report();
    if issues.is_empty() {
        println!("{}", "No issues found".green());
        return Ok(());
    }

    for issue in &issues {
        println!("  {} {}", "!".red(), issue);
    }
    bail!("{} issue(s) found", issues.len())
}
