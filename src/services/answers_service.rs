//! Answers service - questions with their correct answer texts
//!
//! Parses lettered options (`A. ...`) and the bold `**Answer: AB**` marker
//! out of each section, maps answer letters back to option texts and emits
//! a question + correct-answers digest. Sections without a parsable stem or
//! answer are skipped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use super::exam_service::BLOCK_DIVIDER;

const LOOSE_HEADER_PATTERN: &str = r"(?mi)^##\s*question(?:\s+(\d+))?";
const SUGGESTED_LINE_PATTERN: &str = r"(?i)^\s*Suggested Answer:";
const OPTION_START_PATTERN: &str = r"^([A-Z])\.\s+(.*)$";
const ANSWER_PATTERN: &str = r"\*\*Answer:\s*([A-Z]+)\*\*";

/// One parsed question: canonical title, stem and resolved answer texts.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedQuestion {
    pub title: String,
    pub stem: String,
    pub answers: Vec<String>,
}

impl ParsedQuestion {
    /// Has both a stem and at least one resolved answer.
    pub fn is_complete(&self) -> bool {
        !self.stem.is_empty() && !self.answers.is_empty()
    }
}

/// Section parser with pre-compiled patterns, reusable across sections.
pub struct AnswerParser {
    header_re: Regex,
    suggested_re: Regex,
    option_re: Regex,
    answer_re: Regex,
}

impl AnswerParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header_re: Regex::new(LOOSE_HEADER_PATTERN)?,
            suggested_re: Regex::new(SUGGESTED_LINE_PATTERN)?,
            option_re: Regex::new(OPTION_START_PATTERN)?,
            answer_re: Regex::new(ANSWER_PATTERN)?,
        })
    }

    /// Parse one section (header line included) into stem, options and
    /// resolved answers.
    pub fn parse_section(&self, section: &str) -> ParsedQuestion {
        let title = match self
            .header_re
            .captures(section)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            Some(number) => format!("question {}", number),
            None => "question".to_string(),
        };

        let mut stem_lines: Vec<&str> = Vec::new();
        let mut options: Vec<(char, String)> = Vec::new();
        let mut in_options = false;

        for line in section.lines().skip(1) {
            if self.suggested_re.is_match(line) {
                continue;
            }
            if line.trim_start().starts_with("**Answer:") {
                break;
            }
            if let Some(cap) = self.option_re.captures(line) {
                let letter = cap[1].chars().next().unwrap_or('?');
                options.push((letter, cap[2].trim().to_string()));
                in_options = true;
                continue;
            }
            if in_options {
                // Continuation line of the current option.
                if let Some((_, text)) = options.last_mut() {
                    if !line.trim().is_empty() {
                        if !text.is_empty() {
                            text.push('\n');
                        }
                        text.push_str(line.trim_end());
                    }
                }
            } else {
                stem_lines.push(line.trim_end());
            }
        }

        let stem = stem_lines.join("\n").trim().to_string();

        let answers = match self.answer_re.captures(section) {
            Some(cap) => cap[1]
                .chars()
                .filter_map(|letter| {
                    options
                        .iter()
                        .find(|(l, _)| *l == letter)
                        .map(|(_, text)| text.clone())
                })
                .collect(),
            None => Vec::new(),
        };

        ParsedQuestion {
            title,
            stem,
            answers,
        }
    }

    fn header_spans(&self, text: &str) -> Vec<usize> {
        self.header_re
            .find_iter(text)
            .map(|m| m.start())
            .collect()
    }
}

/// Default sibling output path: `<stem>-answers.md` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}-answers.md", stem))
}

/// Build the questions-with-answers digest for one dump.
pub fn answers_digest(text: &str, exam_name: &str) -> Result<String> {
    let parser = AnswerParser::new()?;
    let starts = parser.header_spans(text);

    let mut blocks: Vec<String> = Vec::new();

    if starts.is_empty() {
        // No headers: try the whole file as a single question block.
        let parsed = parser.parse_section(text);
        if parsed.is_complete() {
            blocks.push(render_block(&parsed));
        }
    } else {
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            let parsed = parser.parse_section(&text[start..end]);
            if parsed.is_complete() {
                blocks.push(render_block(&parsed));
            }
        }
    }

    Ok(format!(
        "# Exam Questions & Answers - {}\n\n{}",
        exam_name.to_uppercase(),
        blocks.join(BLOCK_DIVIDER)
    ))
}

fn render_block(parsed: &ParsedQuestion) -> String {
    let mut block = format!("## {}\n\n{}\n\n**Correct Answer(s):**\n", parsed.title, parsed.stem);
    for answer in &parsed.answers {
        block.push_str(&format!("\n- {}", answer));
    }
    block
}

/// Read a dump, extract the answers digest, write it out.
pub fn answers_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let exam_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let digest = answers_digest(&text, &exam_name)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    std::fs::write(&output, digest)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(output)
}
