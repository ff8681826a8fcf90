//! Stats command: counts of a class.

use anyhow::Result;
use gurukul_core::Portal;

pub fn run(portal: &Portal, class: &str) -> Result<()> {
    let stats = portal.get_class_stats(class);
    println!("Class {}", class);
    println!("  Students: {}", stats.total_students);
    println!("  Results : {}", stats.total_results);
    Ok(())
}
