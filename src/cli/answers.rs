//! Answers CLI command

use std::path::Path;

use colored::Colorize;

use crate::services::answers_service;
use crate::Result;

pub fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    let output = answers_service::answers_file(input, output)?;
    println!("{}", format!("✓ Processed: {}", input.display()).green());
    println!("Output saved to: {}", output.display());
    Ok(())
}
