//! Per-class skill exclusion table.
//!
//! The built-in table ships as `data/skill_exclusions.toml` and can be
//! replaced by a user file with the same layout.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const BUILTIN_RULES: &str = include_str!("../../data/skill_exclusions.toml");

/// A raw skill-list position, or a half-open range of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExclusionRule {
    Index(usize),
    Range { start: usize, end: usize },
}

impl ExclusionRule {
    pub fn covers(&self, index: usize) -> bool {
        match *self {
            ExclusionRule::Index(i) => i == index,
            ExclusionRule::Range { start, end } => (start..end).contains(&index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRules {
    pub name: String,
    #[serde(default)]
    pub exclude: Vec<ExclusionRule>,
}

#[derive(Debug, Default, Deserialize)]
struct RuleFile {
    #[serde(default, rename = "class")]
    classes: Vec<ClassRules>,
}

/// Exclusion rules keyed by class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillRules {
    by_class: HashMap<String, Vec<ExclusionRule>>,
}

impl SkillRules {
    /// The table shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_RULES).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Built-in skill exclusion table is invalid");
            Self::default()
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: RuleFile = toml::from_str(contents)?;
        Ok(Self::from_classes(file.classes))
    }

    /// Build a table from class entries. Later entries for the same class
    /// add to earlier ones.
    pub fn from_classes(classes: impl IntoIterator<Item = ClassRules>) -> Self {
        let mut by_class: HashMap<String, Vec<ExclusionRule>> = HashMap::new();
        for class in classes {
            by_class.entry(class.name).or_default().extend(class.exclude);
        }
        Self { by_class }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load the override file when one is configured, falling back to the
    /// built-in table if it cannot be read.
    pub fn load(override_path: Option<&Path>) -> Self {
        let Some(path) = override_path else {
            return Self::builtin();
        };

        match Self::load_file(path) {
            Ok(rules) => {
                tracing::info!(path = %path.display(), classes = rules.by_class.len(), "Loaded skill exclusion rules");
                rules
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load skill exclusion rules, using built-in table");
                Self::builtin()
            }
        }
    }

    pub fn exclusions(&self, class: &str) -> &[ExclusionRule] {
        self.by_class.get(class).map(Vec::as_slice).unwrap_or_default()
    }
}
