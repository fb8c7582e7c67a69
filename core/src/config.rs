//! User settings.
//!
//! Stored as TOML in the platform config directory through `confy`. Both
//! settings are optional; an empty file gives the stock behavior.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const APP_NAME: &str = "livefeed";
pub const OUTPUT_DIR_NAME: &str = "BorderlandsLiveFeed";
pub const OUTPUT_FILE_NAME: &str = "Output.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveFeedConfig {
    /// Where the snapshot is written. Defaults to [`default_output_path`].
    pub output_path: Option<PathBuf>,
    /// TOML file replacing the built-in skill exclusion table.
    pub skill_rules_path: Option<PathBuf>,
}

impl LiveFeedConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(confy::load_path(path)?)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(default_output_path)
    }
}

/// `<data dir>/BorderlandsLiveFeed/Output.json`, which is
/// `%APPDATA%\BorderlandsLiveFeed\Output.json` on Windows.
pub fn default_output_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(OUTPUT_DIR_NAME)
        .join(OUTPUT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_output_path_overrides_default() {
        let config = LiveFeedConfig {
            output_path: Some(PathBuf::from("/tmp/feed.json")),
            skill_rules_path: None,
        };
        assert_eq!(config.output_path(), PathBuf::from("/tmp/feed.json"));
    }

    #[test]
    fn default_output_path_ends_with_feed_file() {
        let path = default_output_path();
        assert!(path.ends_with(Path::new(OUTPUT_DIR_NAME).join(OUTPUT_FILE_NAME)));
    }

    #[test]
    fn parses_partial_settings_file() {
        let config: LiveFeedConfig = toml::from_str(r#"skill_rules_path = "rules.toml""#).unwrap();
        assert_eq!(config.output_path, None);
        assert_eq!(config.skill_rules_path, Some(PathBuf::from("rules.toml")));
    }

    #[test]
    fn load_from_creates_missing_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("livefeed.toml");

        let config = LiveFeedConfig::load_from(&path).unwrap();

        assert_eq!(config, LiveFeedConfig::default());
        assert!(path.exists());
    }
}
