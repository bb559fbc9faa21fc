//! Clean CLI command

use std::path::Path;

use colored::Colorize;

use crate::models::{CleanOptions, Profile};
use crate::services::clean_service;
use crate::Result;

pub fn run(
    input: &Path,
    output: Option<&Path>,
    remove_topic: bool,
    profile: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut options = CleanOptions::new(remove_topic);
    if let Some(path) = profile {
        options = options.with_profile(Profile::load(path)?);
    }

    let report = clean_service::clean_file(input, output, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if report.sections == 0 {
            println!("{}", "No question sections found; wrote trimmed input.".yellow());
        } else {
            println!(
                "{}",
                format!("✓ Cleaned and sorted {} section(s)", report.sections).green()
            );
        }
        println!("Cleaned file written to: {}", report.output.display());
    }

    Ok(())
}
