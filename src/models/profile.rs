//! Cleaning configuration
//!
//! A profile is a small TOML file letting a caller extend the built-in noise
//! rules and flip the `remove_topic` default without touching code:
//!
//! ```toml
//! remove_topic = true
//!
//! [[rules]]
//! pattern = '(?i)^\s*Forum\s*link:'
//! action  = "drop"
//!
//! [[rules]]
//! pattern = '^---\s*ads\s*---$'
//! action  = "truncate"
//! ```
//!
//! Profile rules are appended after the built-ins, so a profile can only
//! widen cleaning, never switch the default noise removal off.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::parser::{NoiseRule, RuleAction, SectionCleaner};
use crate::Context;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// One pattern -> action entry from a profile file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub action: RuleActionSpec,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleActionSpec {
    Drop,
    Truncate,
}

impl From<RuleActionSpec> for RuleAction {
    fn from(spec: RuleActionSpec) -> Self {
        match spec {
            RuleActionSpec::Drop => RuleAction::Drop,
            RuleActionSpec::Truncate => RuleAction::Truncate,
        }
    }
}

/// Deserialized profile file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub remove_topic: bool,

    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl Profile {
    /// Load and parse a TOML profile. Fails before any document I/O so a
    /// broken profile never produces a half-processed batch.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ProfileError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Options for the whole-document clean transform.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Also strip "Topic #: N" restatement lines. Default false.
    pub remove_topic: bool,

    /// Extra rules / flags loaded from a profile file.
    pub profile: Option<Profile>,
}

impl CleanOptions {
    pub fn new(remove_topic: bool) -> Self {
        Self {
            remove_topic,
            ..Default::default()
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Build the section cleaner: built-in rules first, then any profile
    /// rules in their declared order. `remove_topic` is on when either the
    /// option or the profile sets it.
    pub fn compile(&self) -> crate::Result<SectionCleaner> {
        let remove_topic =
            self.remove_topic || self.profile.as_ref().is_some_and(|p| p.remove_topic);

        let mut cleaner = SectionCleaner::with_defaults(remove_topic)?;

        if let Some(profile) = &self.profile {
            for spec in &profile.rules {
                let rule = NoiseRule::new(&spec.pattern, spec.action.into())
                    .with_context(|| format!("invalid profile pattern '{}'", spec.pattern))?;
                cleaner.push_rule(rule);
            }
        }

        Ok(cleaner)
    }
}
