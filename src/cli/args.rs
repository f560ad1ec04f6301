//! Command-line argument definitions for the CNV detector
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::DEFAULT_INPUT_PATTERN;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the CNV format detector
///
/// Identifies which legacy Sea-Bird CTD/CNV text layout a raw instrument file
/// uses and extracts its header and data blocks.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cnv-detector",
    version,
    about = "Identify the layout of Sea-Bird CTD CNV files and extract their header and data blocks",
    long_about = "Classifies raw CNV instrument exports against an ordered set of bundled \
                  parsing rules. Each rule is a declarative grammar; rules are tried in \
                  lexicographic name order and the first match wins. Files no rule fits are \
                  reported as unrecognized."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the CNV detector
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Detect the format of one or more CNV files
    Detect(DetectArgs),
    /// Scan a directory for candidate files and classify each
    Scan(ScanArgs),
    /// List the loaded parsing rules
    Rules(RulesArgs),
    /// Download sample CNV files into the local cache
    Fetch(FetchArgs),
}

/// Arguments for the detect command
#[derive(Debug, Clone, Parser)]
pub struct DetectArgs {
    /// Input files to classify
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Directory holding the rule JSON files
    ///
    /// Defaults to the bundled rules directory (CNV_RULES_DIR overrides it).
    #[arg(long = "rules-dir", value_name = "PATH")]
    pub rules_dir: Option<PathBuf>,

    /// Print the captured header and data regions, not just the rule identity
    #[arg(long = "show-regions", help = "Print the captured regions")]
    pub show_regions: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Directory to scan recursively for candidate files
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// File-name pattern selecting candidates (anchored at the name start)
    #[arg(long = "pattern", value_name = "REGEX", default_value = DEFAULT_INPUT_PATTERN)]
    pub pattern: String,

    /// Directory holding the rule JSON files
    #[arg(long = "rules-dir", value_name = "PATH")]
    pub rules_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except the final summary
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the rules command
#[derive(Debug, Clone, Parser)]
pub struct RulesArgs {
    /// Directory holding the rule JSON files
    #[arg(long = "rules-dir", value_name = "PATH")]
    pub rules_dir: Option<PathBuf>,

    /// Show each rule's assembled pattern text
    #[arg(long = "detailed")]
    pub detailed: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Fetch a single named sample file
    #[arg(long = "file", value_name = "NAME")]
    pub file: Option<String>,

    /// Restrict fetching to one data type (e.g. CTD)
    #[arg(long = "dtype", value_name = "TYPE", conflicts_with = "file")]
    pub dtype: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map verbosity flags to a log level string
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl DetectArgs {
    /// Validate the detect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_dir.display()
            )));
        }
        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl RulesArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

impl FetchArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        // Fetch reports progress through the log, so default to info
        if self.verbose == 0 {
            "info"
        } else {
            log_level(self.verbose, false)
        }
    }
}
