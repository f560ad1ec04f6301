//! Shared components for CLI commands
//!
//! Common helpers used across the command implementations: logging setup,
//! repository resolution and progress reporting.

use crate::rule::RuleRepository;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::debug;

/// Scan statistics for the final summary report
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Number of files examined
    pub files_examined: usize,
    /// Number of files a rule matched
    pub files_matched: usize,
    /// Number of files no rule matched
    pub files_unrecognized: usize,
    /// Number of files that could not be read
    pub files_failed: usize,
    /// Matched file count per rule identity
    pub matches_by_rule: Vec<(String, usize)>,
    /// Total scan time
    pub scan_time: std::time::Duration,
}

impl ScanStats {
    /// Record a match for the given rule identity
    pub fn record_match(&mut self, rule_id: &str) {
        self.files_matched += 1;
        if let Some(entry) = self.matches_by_rule.iter_mut().find(|(id, _)| id == rule_id) {
            entry.1 += 1;
        } else {
            self.matches_by_rule.push((rule_id.to_string(), 1));
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cnv_detector={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// A resolved rule repository, either loaded from an explicit directory or
/// borrowed from the process-wide bundled set.
#[derive(Debug)]
pub enum RepositoryHandle {
    Owned(RuleRepository),
    Bundled(&'static RuleRepository),
}

impl RepositoryHandle {
    pub fn repository(&self) -> &RuleRepository {
        match self {
            Self::Owned(repository) => repository,
            Self::Bundled(repository) => repository,
        }
    }
}

/// Resolve the rule repository for a command.
///
/// An explicit `--rules-dir` loads a fresh repository from that path; without
/// it the process-wide bundled repository is used.
pub fn resolve_repository(rules_dir: Option<&PathBuf>) -> Result<RepositoryHandle> {
    match rules_dir {
        Some(dir) => {
            let repository = RuleRepository::load(dir)?;
            debug!(
                "loaded {} rules from {}",
                repository.len(),
                dir.display()
            );
            Ok(RepositoryHandle::Owned(repository))
        }
        None => {
            let repository = RuleRepository::bundled()?;
            debug!("using bundled repository ({} rules)", repository.len());
            Ok(RepositoryHandle::Bundled(repository))
        }
    }
}

/// Read a candidate file as text
pub async fn read_input_file(path: &std::path::Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("failed to read input file {}", path.display()), e))
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
