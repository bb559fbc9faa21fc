//! Clean service - the whole-document transform
//!
//! Read a dump, split into preamble + sections, clean each body, sort by
//! question number, serialize, write. Either the whole document is
//! transformed and written or a read failure aborts with no output file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::CleanOptions;
use crate::parser::{split_document, SectionCleaner};

/// Summary of one clean run, printable as JSON.
#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of question sections recognized.
    pub sections: usize,
    /// Whether a preamble was carried through.
    pub preamble: bool,
}

/// Default sibling output path: `<stem>-cleaned.md` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}-cleaned.md", stem))
}

/// Pure transform: raw dump text in, normalized text out.
///
/// Returns the normalized text plus (section count, preamble present).
pub fn clean_text(text: &str, cleaner: &SectionCleaner) -> Result<(String, usize, bool)> {
    let mut doc = split_document(text)?;

    // Preamble-only documents pass through untouched apart from trimming.
    if doc.is_preamble_only() {
        return Ok((doc.serialize(), 0, !doc.preamble.trim().is_empty()));
    }

    for section in &mut doc.sections {
        section.body = cleaner.clean(&section.body);
    }
    doc.sort_sections();

    let sections = doc.sections.len();
    let has_preamble = !doc.preamble.trim().is_empty();
    Ok((doc.serialize(), sections, has_preamble))
}

/// Read, transform and write one document.
pub fn clean_file(
    input: &Path,
    output: Option<&Path>,
    options: &CleanOptions,
) -> Result<CleanReport> {
    let cleaner = options.compile()?;
    clean_file_with(input, output, &cleaner)
}

/// Same as [`clean_file`] with an already-compiled cleaner, so a batch can
/// compile the rule set once and share it across documents.
pub fn clean_file_with(
    input: &Path,
    output: Option<&Path>,
    cleaner: &SectionCleaner,
) -> Result<CleanReport> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let (cleaned, sections, preamble) = clean_text(&text, cleaner)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    std::fs::write(&output, cleaned)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(CleanReport {
        input: input.to_path_buf(),
        output,
        sections,
        preamble,
    })
}
