//! Error handling for CNV detection operations.
//!
//! The three conditions the detection contract distinguishes are
//! `RuleSourceUnavailable` (the rule storage itself is missing),
//! `MalformedRule` (a rule record is a load-time defect) and `NoRuleMatched`
//! (detection exhausted every rule). `NoRuleMatched` deliberately carries no
//! per-rule detail: an empty rule set and an unsupported input format are the
//! same outcome from the caller's point of view.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The rule storage location cannot be located or opened.
    #[error("rule source unavailable: {path}")]
    RuleSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule record failed to deserialize or compile. Aborts the whole
    /// repository load; a partial rule set must never be returned.
    #[error("malformed rule '{rule}': {reason}")]
    MalformedRule { rule: String, reason: String },

    /// Detection exhausted every rule without a match. Also returned for an
    /// empty rule set.
    #[error("no parsing rule matched the input")]
    NoRuleMatched,

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("download failed for {url}: {message}")]
    Download { url: String, message: String },
}

impl Error {
    /// Create a rule-source-unavailable error for a storage path
    pub fn rule_source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RuleSourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-rule error with context
    pub fn malformed_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a download error
    pub fn download(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "directory traversal failed".to_string(),
            source: error,
        }
    }
}
