pub mod cleaner;
pub mod splitter;

pub use cleaner::{NoiseRule, RuleAction, SectionCleaner};
pub use splitter::{normalize_content, split_document};
