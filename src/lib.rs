//! CNV Detector Library
//!
//! A Rust library for identifying the text layout of Sea-Bird CTD "CNV"
//! instrument files and extracting their header and data blocks.
//!
//! This library provides tools for:
//! - Loading declarative parsing rules from JSON files, ordered by name
//! - Compiling each rule into a verbose-syntax regular grammar at load time
//! - Classifying raw file text by first-match-wins search over the rule set
//! - Recursively discovering candidate files under an input directory
//! - Converting CTD pressure readings to depth (Sea-Bird AN69)
//! - Fetching known sample files for demos and manual testing

pub mod config;
pub mod constants;
pub mod depth;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod rule;
pub mod sampledata;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use detector::{FormatMatch, detect};
pub use error::{Error, Result};
pub use rule::{CompiledRule, Grammar, Rule, RuleDefinition, RuleRepository};
