//! Document model: a preamble plus an ordered list of question sections.
//!
//! A Document is built once from raw text, each section body is cleaned
//! independently, the sections are sorted, and the whole thing is serialized
//! in one pass. Nothing mutates after serialization.

/// One question block: integer id plus body text (header line excluded).
///
/// Question numbers are not guaranteed unique or ordered in raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: u32,
    pub body: String,
}

impl Section {
    pub fn new(number: u32, body: impl Into<String>) -> Self {
        Self {
            number,
            body: body.into(),
        }
    }

    /// Canonical header for this section, e.g. `## question 358`.
    pub fn header(&self) -> String {
        normalize_header(self.number)
    }
}

/// Canonical header string for a question number.
///
/// Discards any extra wording the original header carried:
/// "## Exam ... question 358 discussion" becomes "## question 358".
pub fn normalize_header(number: u32) -> String {
    format!("## question {}", number)
}

/// A parsed dump: optional preamble text plus question sections.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Text preceding the first recognized header, right-trimmed.
    /// When no header was found at all this holds the entire input.
    pub preamble: String,
    pub sections: Vec<Section>,
}

impl Document {
    /// True when no section header was recognized anywhere in the input.
    pub fn is_preamble_only(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sort sections ascending by question number.
    ///
    /// Duplicate numbers are kept; the sort is stable so equal keys retain
    /// their original appearance order.
    pub fn sort_sections(&mut self) {
        self.sections.sort_by_key(|s| s.number);
    }

    /// Serialize back to text.
    ///
    /// Preamble (if non-empty) first, then each section as canonical header
    /// + blank line + body (body block omitted when empty), one blank line
    /// between sections, exactly one trailing newline at end of file.
    pub fn serialize(&self) -> String {
        if self.is_preamble_only() {
            return format!("{}\n", self.preamble.trim());
        }

        let mut parts: Vec<String> = Vec::new();

        if !self.preamble.trim().is_empty() {
            parts.push(self.preamble.trim_end().to_string());
            parts.push(String::new());
        }

        for section in &self.sections {
            let mut block = section.header();
            if !section.body.is_empty() {
                block.push_str("\n\n");
                block.push_str(&section.body);
            }
            parts.push(block.trim_end().to_string());
            parts.push(String::new());
        }

        format!("{}\n", parts.join("\n").trim_end())
    }
}
