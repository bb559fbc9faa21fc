pub mod document;
pub mod profile;

pub use document::{normalize_header, Document, Section};
pub use profile::{CleanOptions, Profile, ProfileError, RuleActionSpec, RuleSpec};
