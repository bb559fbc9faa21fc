//! Batch CLI command
//!
//! Runs one of the transforms over every markdown file under a directory.
//! Documents are independent, so the batch fans out across a rayon pool;
//! per-file failures are reported at the end without stopping the rest.

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::models::{CleanOptions, Profile};
use crate::parser::SectionCleaner;
use crate::services::{answers_service, clean_service, exam_service};
use crate::Result;

/// Which transform to run on each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatchMode {
    /// Clean, renumber and sort question sections.
    Clean,
    /// Extract questions and options only.
    Exam,
    /// Extract questions with their correct answers.
    Answers,
}

pub fn run(
    dir: &Path,
    output_dir: Option<&Path>,
    mode: BatchMode,
    remove_topic: bool,
    profile: Option<&Path>,
) -> Result<()> {
    let files = collect_markdown_files(dir);
    if files.is_empty() {
        bail!("no markdown files found in {}", dir.display());
    }
    println!("Found {} file(s) to process", files.len());

    if let Some(d) = output_dir {
        std::fs::create_dir_all(d)?;
    }

    // Compile the rule set once; documents share it read-only.
    let mut options = CleanOptions::new(remove_topic);
    if let Some(path) = profile {
        options = options.with_profile(Profile::load(path)?);
    }
    let cleaner = options.compile()?;

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "[{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )?);

    let failures: Vec<(PathBuf, anyhow::Error)> = files
        .par_iter()
        .filter_map(|path| {
            let result = process_one(path, output_dir, mode, &cleaner);
            bar.inc(1);
            result.err().map(|e| (path.clone(), e))
        })
        .collect();

    bar.finish_and_clear();

    let processed = files.len() - failures.len();
    println!(
        "{}",
        format!("✓ Processed {}/{} file(s)", processed, files.len()).green()
    );
    for (path, err) in &failures {
        eprintln!("{}", format!("✗ {}: {:#}", path.display(), err).red());
    }

    Ok(())
}

fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file() && e.path().extension().map_or(false, |ext| ext == "md")
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

fn process_one(
    input: &Path,
    output_dir: Option<&Path>,
    mode: BatchMode,
    cleaner: &SectionCleaner,
) -> Result<()> {
    let default = match mode {
        BatchMode::Clean => clean_service::default_output_path(input),
        BatchMode::Exam => exam_service::default_output_path(input),
        BatchMode::Answers => answers_service::default_output_path(input),
    };

    // With an output directory, keep the derived file name but move it there.
    let output: Option<PathBuf> = match (output_dir, default.file_name()) {
        (Some(d), Some(name)) => Some(d.join(name)),
        _ => None,
    };

    match mode {
        BatchMode::Clean => {
            clean_service::clean_file_with(input, output.as_deref(), cleaner)?;
        }
        BatchMode::Exam => {
            exam_service::exam_file(input, output.as_deref())?;
        }
        BatchMode::Answers => {
            answers_service::answers_file(input, output.as_deref())?;
        }
    }
    Ok(())
}
