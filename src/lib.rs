// Examtidy - cleaner, normalizer and extractor for ExamTopics-style
// markdown question dumps.

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{CleanOptions, Document, Profile, Section};
pub use parser::{split_document, NoiseRule, RuleAction, SectionCleaner};
