//! Application constants for the CNV detector
//!
//! This module contains the naming conventions for bundled rule files,
//! environment variable overrides, and sample data locations used
//! throughout the application.

// =============================================================================
// Rule File Naming Conventions
// =============================================================================

/// Rule file names start with this prefix
pub const RULE_FILE_PREFIX: &str = "cnv";

/// Rule file names end with this suffix
pub const RULE_FILE_SUFFIX: &str = ".json";

/// Companion reference file living alongside the rules; never a rule itself
pub const REFERENCE_NAMES_FILE: &str = "refnames.json";

/// Names starting with this stem are excluded from rule discovery
pub const EXCLUDED_RULE_STEM: &str = "refnames";

/// Named capture group holding the header region
pub const HEADER_GROUP: &str = "header";

/// Named capture group holding the data region
pub const DATA_GROUP: &str = "data";

// =============================================================================
// Directory Resolution
// =============================================================================

/// Environment variable overriding the bundled rules directory
pub const RULES_DIR_ENV: &str = "CNV_RULES_DIR";

/// Environment variable overriding the local support directory
pub const SUPPORT_DIR_ENV: &str = "CNV_DIR";

/// Support directory name under the user config directory
pub const SUPPORT_DIR_NAME: &str = "cnv-detector";

// =============================================================================
// Input Discovery
// =============================================================================

/// Default file-name pattern for candidate input files
pub const DEFAULT_INPUT_PATTERN: &str = r".*\.cnv";

// =============================================================================
// Sample Data
// =============================================================================

/// Upstream archive holding the known sample CNV files
pub const SAMPLE_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/castelao/seabird/dev/sampledata";

/// Subdirectory of the support directory holding cached sample files
pub const SAMPLE_DATA_DIR_NAME: &str = "sampledata";

/// Download timeout in seconds for sample data fetches
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a file name selects as a parsing rule.
///
/// Only names with the `cnv` prefix and `.json` suffix are candidates, and the
/// companion `refnames` reference file is excluded explicitly even though it
/// shares the suffix.
pub fn is_rule_file_name(name: &str) -> bool {
    name.starts_with(RULE_FILE_PREFIX)
        && name.ends_with(RULE_FILE_SUFFIX)
        && !name.starts_with(EXCLUDED_RULE_STEM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_file_name_selection() {
        assert!(is_rule_file_name("cnv01.json"));
        assert!(is_rule_file_name("cnv02.json"));
        assert!(is_rule_file_name("cnv99.json"));

        // Wrong prefix or suffix
        assert!(!is_rule_file_name("rules.json"));
        assert!(!is_rule_file_name("cnv01.txt"));
        assert!(!is_rule_file_name("01cnv.json"));
    }

    #[test]
    fn test_reference_file_excluded() {
        // The companion reference file shares the suffix but is never a rule
        assert!(!is_rule_file_name(REFERENCE_NAMES_FILE));
        assert!(!is_rule_file_name("refnames.json"));
    }
}
