//! Exam service - questions-and-options study sheet
//!
//! Strips answers and footers from every section so the output can be used
//! as a practice sheet: question stems and their lettered options only.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

/// Divider emitted between question blocks.
pub const BLOCK_DIVIDER: &str = "\n\n----------------------------------------\n\n";

/// Loose header form: number is optional here so unnumbered blocks from
/// older dumps are still picked up.
const LOOSE_HEADER_PATTERN: &str = r"(?mi)^##\s*question(?:\s+(\d+))?";

const SUGGESTED_LINE_PATTERN: &str = r"(?mi)^\s*Suggested Answer:.*$";
const TIMESTAMP_LINE_PATTERN: &str = r"(?mi)^\*\*Timestamp:.*$";
const VIEW_LINE_PATTERN: &str = r"(?mi)^\[View on ExamTopics\].*$";

/// The bold answer marker; everything from here on is answer/discussion.
const ANSWER_MARKER: &str = "\n**Answer:";

/// Default sibling output path: `<stem>-exam.md` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}-exam.md", stem))
}

/// Build the questions-only digest for one dump.
///
/// `exam_name` goes into the document title (uppercased file stem by
/// convention).
pub fn exam_digest(text: &str, exam_name: &str) -> Result<String> {
    let header_re = Regex::new(LOOSE_HEADER_PATTERN)?;
    let suggested_re = Regex::new(SUGGESTED_LINE_PATTERN)?;
    let timestamp_re = Regex::new(TIMESTAMP_LINE_PATTERN)?;
    let view_re = Regex::new(VIEW_LINE_PATTERN)?;

    let headers: Vec<(usize, Option<u32>)> = header_re
        .captures_iter(text)
        .filter_map(|cap| {
            cap.get(0).map(|whole| {
                let number = cap.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
                (whole.start(), number)
            })
        })
        .collect();

    let mut blocks: Vec<String> = Vec::new();

    if headers.is_empty() {
        // No headers at all: treat the whole file as a single block.
        let mut body = truncate_at_marker(text);
        body = suggested_re.replace_all(&body, "").into_owned();
        let body = body.trim();
        if !body.is_empty() {
            blocks.push(body.to_string());
        }
    } else {
        for (i, &(start, number)) in headers.iter().enumerate() {
            let end = headers
                .get(i + 1)
                .map(|&(next_start, _)| next_start)
                .unwrap_or(text.len());
            let section = text[start..end].trim();

            // Drop the header line; a canonical header is regenerated below.
            let body = match section.split_once('\n') {
                Some((_, rest)) => rest.trim_end().to_string(),
                None => String::new(),
            };

            let body = suggested_re.replace_all(&body, "").into_owned();
            let body = truncate_at_marker(&body);
            let body = timestamp_re.replace_all(&body, "").into_owned();
            let body = view_re.replace_all(&body, "").into_owned();
            let body = body.trim();

            let mut block = match number {
                Some(n) => format!("## question {}", n),
                None => "## question".to_string(),
            };
            if !body.is_empty() {
                block.push_str("\n\n");
                block.push_str(body);
            }
            blocks.push(block);
        }
    }

    Ok(format!(
        "# Exam Topics Questions - {}\n\n{}",
        exam_name.to_uppercase(),
        blocks.join(BLOCK_DIVIDER)
    ))
}

/// Cut the body at the first bold answer marker.
fn truncate_at_marker(body: &str) -> String {
    match body.find(ANSWER_MARKER) {
        Some(pos) => body[..pos].to_string(),
        None => body.to_string(),
    }
}

/// Read a dump, extract the study sheet, write it out.
pub fn exam_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let exam_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let digest = exam_digest(&text, &exam_name)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    std::fs::write(&output, digest)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(output)
}
