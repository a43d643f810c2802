//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the content
//! root. There is exactly one config file; it controls the shape of the
//! manual tree and how strictly pages are matched into it.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Path prefix of the versioned manual tree, relative to the content
//! # root, without leading or trailing slashes.
//! manual_path = "manuals/1.0"
//!
//! # How pages are matched into a language's sidebar:
//! #   "strict" - direct-child markdown files whose layout matches the
//! #              language (docs-en / docs-ja)
//! #   "loose"  - any page under the language tree, regardless of depth
//! #              or layout
//! strictness = "strict"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::sidebar::{DEFAULT_MANUAL_PATH, Selector, Strictness};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; a missing config file is equivalent to an
/// empty one. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path prefix of the versioned manual tree, without leading or
    /// trailing slashes.
    pub manual_path: String,
    /// How pages are matched into a language's sidebar.
    pub strictness: Strictness,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manual_path: DEFAULT_MANUAL_PATH.to_string(),
            strictness: Strictness::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manual_path.is_empty() {
            return Err(ConfigError::Validation(
                "manual_path must not be empty".into(),
            ));
        }
        if self.manual_path.starts_with('/') || self.manual_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "manual_path must not have leading or trailing slashes".into(),
            ));
        }
        Ok(())
    }

    /// Build the selection predicate this config describes.
    pub fn selector(&self) -> Selector {
        Selector::with_manual_path(self.strictness, &self.manual_path)
    }
}

/// Load `config.toml` from the content root.
///
/// Uses defaults if the file doesn't exist; validation runs either way.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config: SiteConfig = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option documented.
pub fn stock_config_toml() -> String {
    r#"# manual-nav site configuration
# All options are optional - defaults shown below

# Path prefix of the versioned manual tree, relative to the content root,
# without leading or trailing slashes.
manual_path = "manuals/1.0"

# How pages are matched into a language's sidebar:
#   "strict" - direct-child markdown files whose layout matches the
#              language (docs-en / docs-ja)
#   "loose"  - any page under the language tree, regardless of depth
#              or layout
strictness = "strict"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "strictness = \"loose\"\n").unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.strictness, Strictness::Loose);
        assert_eq!(config.manual_path, DEFAULT_MANUAL_PATH);
    }

    #[test]
    fn custom_manual_path_is_loaded() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "manual_path = \"handbook/2.0\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.manual_path, "handbook/2.0");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "languages = [\"fr\"]\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn invalid_strictness_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "strictness = \"fuzzy\"\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn empty_manual_path_fails_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "manual_path = \"\"\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn slashed_manual_path_fails_validation() {
        let config = SiteConfig {
            manual_path: "/manuals/1.0/".to_string(),
            strictness: Strictness::Strict,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
