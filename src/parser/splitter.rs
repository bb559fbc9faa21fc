//! Question section splitter
//!
//! Scans raw dump text for `## ... question <N>` header lines and splits it
//! into a preamble plus (number, body) sections. The original header line is
//! discarded after its number is captured; a canonical header is regenerated
//! at serialization time.

use anyhow::Result;
use regex::Regex;

use crate::models::{Document, Section};

/// Matches headers that contain "question <N>" anywhere on a `##` line.
/// This allows lines like "## Exam SAP-C02 question 358 discussion".
const HEADER_PATTERN: &str = r"(?mi)^##.*?question\s+(\d+)\b";

/// Normalize raw content before splitting: strip a UTF-8 BOM and normalize
/// CRLF / lone CR line endings to LF.
pub fn normalize_content(content: &str) -> String {
    let mut s = content.to_string();

    if let Some(stripped) = s.strip_prefix('\u{FEFF}') {
        s = stripped.to_string();
    }

    s = s.replace("\r\n", "\n").replace('\r', "\n");

    s
}

/// Split raw text into a [`Document`].
///
/// The span before the first header becomes the preamble (right-trimmed,
/// possibly empty). Each header plus the text up to the next header (or end
/// of input) becomes one section; the header line itself is dropped and only
/// its number kept.
///
/// When no header is found the whole input becomes the preamble and the
/// section list stays empty.
pub fn split_document(text: &str) -> Result<Document> {
    let text = normalize_content(text);
    let header_re = Regex::new(HEADER_PATTERN)?;

    // (match start, question number) for every header line, in order.
    let mut headers: Vec<(usize, u32)> = Vec::new();
    for cap in header_re.captures_iter(&text) {
        // A number too large for u32 is not treated as a header; the line
        // passes through as ordinary body text.
        let (start, number) = match (cap.get(0), cap.get(1)) {
            (Some(whole), Some(num)) => match num.as_str().parse::<u32>() {
                Ok(n) => (whole.start(), n),
                Err(_) => continue,
            },
            _ => continue,
        };
        headers.push((start, number));
    }

    if headers.is_empty() {
        return Ok(Document {
            preamble: text,
            sections: Vec::new(),
        });
    }

    let preamble = text[..headers[0].0].trim_end().to_string();

    let mut sections = Vec::with_capacity(headers.len());
    for (i, &(start, number)) in headers.iter().enumerate() {
        let end = headers
            .get(i + 1)
            .map(|&(next_start, _)| next_start)
            .unwrap_or(text.len());
        let span = &text[start..end];

        // Drop the header line; everything after it is the raw body.
        let body = match span.split_once('\n') {
            Some((_, rest)) => rest.trim_end().to_string(),
            None => String::new(),
        };

        sections.push(Section::new(number, body));
    }

    Ok(Document { preamble, sections })
}
