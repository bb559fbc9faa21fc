//! Scrub CLI command

use std::path::Path;

use colored::Colorize;

use crate::services::scrub_service;
use crate::Result;

pub fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    let report = scrub_service::scrub_file(input, output)?;
    println!(
        "{}",
        format!("✓ Removed {} footer block(s)", report.removed).green()
    );
    println!("Written to: {}", report.output.display());
    Ok(())
}
