//! Scrub service - whole-file footer block removal
//!
//! Unlike the section cleaner this ignores document structure entirely: it
//! deletes every multi-line block running from a bold `**Timestamp:` marker
//! through the closing of the markdown link that follows it. Useful for
//! dumps whose sections are not (yet) recognizable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

/// A bolded timestamp through the end of the following `(.../)` link.
const FOOTER_BLOCK_PATTERN: &str = r"\*\*Timestamp:[\s\S]*?/\)";

/// Summary of one scrub run.
#[derive(Debug)]
pub struct ScrubReport {
    pub output: PathBuf,
    /// Number of footer blocks removed.
    pub removed: usize,
}

/// Remove all footer blocks; returns the scrubbed text and the number of
/// blocks removed.
pub fn scrub_text(text: &str) -> Result<(String, usize)> {
    let block_re = Regex::new(FOOTER_BLOCK_PATTERN)?;
    let removed = block_re.find_iter(text).count();
    if removed == 0 {
        return Ok((text.to_string(), 0));
    }
    Ok((block_re.replace_all(text, "").into_owned(), removed))
}

/// Read, scrub and write one file. Without an explicit output path the
/// input is rewritten in place.
pub fn scrub_file(input: &Path, output: Option<&Path>) -> Result<ScrubReport> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let (scrubbed, removed) = scrub_text(&text)?;

    let output = output.map(Path::to_path_buf).unwrap_or_else(|| input.to_path_buf());

    std::fs::write(&output, scrubbed)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(ScrubReport { output, removed })
}
