//! Rule-driven section body cleaner
//!
//! Noise removal is expressed as an ordered list of pattern -> action rules
//! so one cleaner can be parameterized per call instead of re-implemented
//! per script:
//! - Drop: delete any line matching the pattern
//! - Truncate: cut the body at the first matching line and discard the rest
//!
//! Independently of the rules, runs of blank lines collapse to one and the
//! result is trimmed of leading/trailing blanks.

use regex::Regex;

/// Duplicate "Question #: N" restatements (several equivalent forms).
const QUESTION_LINE_PATTERN: &str =
    r"(?i)^\s*(Question\s*#\s*:?\s*\d+|Question\s*:?\s*\d+|Question\s*Number\s*:?\s*\d+)\s*$";

/// "Topic #: N" restatements, removed only when `remove_topic` is set.
const TOPIC_LINE_PATTERN: &str = r"(?i)^\s*Topic\s*#\s*:?\s*\d+\s*$";

/// Bolded timestamp footer, e.g. `**Timestamp: April 23, 2025, 4:15 a.m.**`.
const TIMESTAMP_PATTERN: &str = r"(?i)^\s*\*\*Timestamp:";

/// External view link footer that often follows the timestamp.
const VIEW_LINK_PATTERN: &str = r"(?i)^\s*\[View on ExamTopics\]";

/// What to do with a line matching a noise pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Delete the matching line.
    Drop,
    /// Cut the body at (excluding) the matching line; everything after is
    /// discarded.
    Truncate,
}

/// One noise pattern with its action.
#[derive(Debug, Clone)]
pub struct NoiseRule {
    pattern: Regex,
    action: RuleAction,
}

impl NoiseRule {
    pub fn new(pattern: &str, action: RuleAction) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            action,
        })
    }

    fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Cleans section bodies by applying an ordered rule list.
#[derive(Debug, Clone)]
pub struct SectionCleaner {
    rules: Vec<NoiseRule>,
}

impl SectionCleaner {
    /// Cleaner with no rules at all; only collapses blanks and trims.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in ExamTopics rule set: drop question-number restatements
    /// (and topic restatements when `remove_topic` is set), truncate at the
    /// first timestamp or view-link footer.
    pub fn with_defaults(remove_topic: bool) -> Result<Self, regex::Error> {
        let mut rules = vec![NoiseRule::new(QUESTION_LINE_PATTERN, RuleAction::Drop)?];
        if remove_topic {
            rules.push(NoiseRule::new(TOPIC_LINE_PATTERN, RuleAction::Drop)?);
        }
        rules.push(NoiseRule::new(TIMESTAMP_PATTERN, RuleAction::Truncate)?);
        rules.push(NoiseRule::new(VIEW_LINK_PATTERN, RuleAction::Truncate)?);
        Ok(Self { rules })
    }

    /// Append a rule after the existing ones.
    pub fn push_rule(&mut self, rule: NoiseRule) {
        self.rules.push(rule);
    }

    fn matches_action(&self, line: &str, action: RuleAction) -> bool {
        self.rules
            .iter()
            .any(|r| r.action == action && r.matches(line))
    }

    /// Clean one section body.
    ///
    /// Line-by-line: drop lines matching Drop rules, right-trim kept lines,
    /// collapse blank runs to a single blank, truncate at the first line
    /// matching a Truncate rule, then trim leading/trailing blanks.
    pub fn clean(&self, body: &str) -> String {
        let mut out: Vec<&str> = Vec::new();
        let mut prev_blank = false;

        for line in body.lines() {
            if self.matches_action(line, RuleAction::Drop) {
                continue;
            }
            if line.trim().is_empty() {
                if !prev_blank {
                    out.push("");
                }
                prev_blank = true;
            } else {
                out.push(line.trim_end());
                prev_blank = false;
            }
        }

        // Footer scan happens after the drop pass so a dropped line can
        // never shadow a truncation marker.
        if let Some(cut) = out
            .iter()
            .position(|line| self.matches_action(line, RuleAction::Truncate))
        {
            out.truncate(cut);
        }

        let start = match out.iter().position(|l| !l.is_empty()) {
            Some(i) => i,
            None => return String::new(),
        };
        let end = out.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);

        out[start..end].join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_cleaner() -> SectionCleaner {
        SectionCleaner::with_defaults(false).unwrap()
    }

    #[test]
    fn test_drops_question_restatement_variants() {
        let cleaner = default_cleaner();
        for noise in [
            "Question #: 169",
            "Question: 169",
            "Question Number: 169",
            "  question #:  169  ",
            "QUESTION 169",
        ] {
            let body = format!("{}\nActual content.", noise);
            assert_eq!(cleaner.clean(&body), "Actual content.", "noise: {noise:?}");
        }
    }

    #[test]
    fn test_keeps_question_mentions_inside_sentences() {
        let cleaner = default_cleaner();
        let body = "This question 5 is tricky.\nQuestion 5 asks about VPC peering.";
        assert_eq!(cleaner.clean(body), body);
    }

    #[test]
    fn test_topic_line_kept_by_default() {
        let cleaner = default_cleaner();
        assert_eq!(cleaner.clean("Topic #: 2\nBody."), "Topic #: 2\nBody.");
    }

    #[test]
    fn test_topic_line_dropped_when_enabled() {
        let cleaner = SectionCleaner::with_defaults(true).unwrap();
        assert_eq!(cleaner.clean("Topic #: 2\nBody."), "Body.");
    }

    #[test]
    fn test_collapses_blank_runs() {
        let cleaner = default_cleaner();
        assert_eq!(cleaner.clean("Hello\n\n\n\nWorld"), "Hello\n\nWorld");
    }

    #[test]
    fn test_truncates_at_timestamp() {
        let cleaner = default_cleaner();
        let body = "Keep this.\n**Timestamp: Jan 1, 2024**\nsome trailing junk";
        assert_eq!(cleaner.clean(body), "Keep this.");
    }

    #[test]
    fn test_truncates_at_view_link() {
        let cleaner = default_cleaner();
        let body = "Keep this.\n[View on ExamTopics](https://example.com)\njunk";
        assert_eq!(cleaner.clean(body), "Keep this.");
    }

    #[test]
    fn test_truncates_at_first_marker_only() {
        let cleaner = default_cleaner();
        let body = "Keep.\n**Timestamp: a**\nmiddle\n[View on ExamTopics](x)\ntail";
        assert_eq!(cleaner.clean(body), "Keep.");
    }

    #[test]
    fn test_trims_leading_and_trailing_blanks() {
        let cleaner = default_cleaner();
        assert_eq!(cleaner.clean("\n\nBody.\n\n"), "Body.");
    }

    #[test]
    fn test_all_noise_yields_empty_body() {
        let cleaner = default_cleaner();
        assert_eq!(cleaner.clean("Question #: 3\n\n**Timestamp: x**\njunk"), "");
    }

    #[test]
    fn test_custom_drop_rule_appended() {
        let mut cleaner = default_cleaner();
        cleaner.push_rule(NoiseRule::new(r"(?i)^\s*Forum\s*link:", RuleAction::Drop).unwrap());
        assert_eq!(cleaner.clean("Forum link: xyz\nBody."), "Body.");
    }

    #[test]
    fn test_custom_truncate_rule_appended() {
        let mut cleaner = default_cleaner();
        cleaner.push_rule(NoiseRule::new(r"^---\s*ads\s*---$", RuleAction::Truncate).unwrap());
        assert_eq!(cleaner.clean("Body.\n--- ads ---\nbuy stuff"), "Body.");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(NoiseRule::new(r"([unclosed", RuleAction::Drop).is_err());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let cleaner = default_cleaner();
        let once = cleaner.clean("Question #: 1\n\n\nHello\n\nWorld\n**Timestamp: x**\ny");
        assert_eq!(cleaner.clean(&once), once);
    }
}
