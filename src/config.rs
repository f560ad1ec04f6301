//! Configuration and local directory resolution.
//!
//! Resolves the bundled rules directory and the local support directory used
//! for cached sample data. Both honor environment variable overrides so
//! deployments can relocate them without rebuilding.

use crate::constants::{DEFAULT_INPUT_PATTERN, RULES_DIR_ENV, SUPPORT_DIR_ENV, SUPPORT_DIR_NAME};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Global configuration for CNV detection runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the rule JSON files
    pub rules_dir: PathBuf,

    /// Local support directory for cached sample data
    pub support_dir: PathBuf,

    /// File-name pattern selecting candidate input files
    pub input_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            support_dir: support_dir(),
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Create configuration with a custom rules directory
    pub fn with_rules_dir(mut self, rules_dir: impl Into<PathBuf>) -> Self {
        self.rules_dir = rules_dir.into();
        self
    }

    /// Create configuration with a custom support directory
    pub fn with_support_dir(mut self, support_dir: impl Into<PathBuf>) -> Self {
        self.support_dir = support_dir.into();
        self
    }

    /// Create configuration with a custom input file pattern
    pub fn with_input_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.input_pattern = pattern.into();
        self
    }
}

/// Directory holding the bundled rule files.
///
/// `CNV_RULES_DIR` overrides the copy shipped with the source tree.
pub fn default_rules_dir() -> PathBuf {
    if let Some(dir) = env::var_os(RULES_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("rules")
}

/// Local support directory for cached sample data.
///
/// `CNV_DIR` overrides the default location under the user config directory.
pub fn support_dir() -> PathBuf {
    if let Some(dir) = env::var_os(SUPPORT_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SUPPORT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_pattern, DEFAULT_INPUT_PATTERN);
        assert!(config.rules_dir.ends_with("rules") || config.rules_dir.is_absolute());
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_rules_dir("/tmp/rules")
            .with_support_dir("/tmp/support")
            .with_input_pattern(r".*\.txt");

        assert_eq!(config.rules_dir, PathBuf::from("/tmp/rules"));
        assert_eq!(config.support_dir, PathBuf::from("/tmp/support"));
        assert_eq!(config.input_pattern, r".*\.txt");
    }

    #[test]
    fn test_bundled_rules_dir_exists() {
        // The source tree ships a rules/ directory next to Cargo.toml
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("rules");
        assert!(dir.is_dir());
    }
}
