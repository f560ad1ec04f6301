//! Scan command implementation
//!
//! Walks an input directory for candidate CNV files, classifies each against
//! the rule set and prints a summary of recognized formats.

use super::shared::{
    ScanStats, create_progress_bar, read_input_file, resolve_repository, setup_logging,
};
use crate::Result;
use crate::cli::args::ScanArgs;
use crate::config::Config;
use crate::discovery::find_input_files;
use crate::error::Error;
use colored::Colorize;
use std::time::Instant;
use tracing::{info, warn};

/// Execute the scan command
pub async fn run_scan(args: ScanArgs) -> Result<ScanStats> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let started = Instant::now();
    let config = Config::default().with_input_pattern(args.pattern.clone());
    let handle = resolve_repository(args.rules_dir.as_ref())?;
    let repository = handle.repository();

    let files = find_input_files(&args.input_dir, &config.input_pattern)?;
    info!(
        "scanning {} candidate file(s) under {}",
        files.len(),
        args.input_dir.display()
    );

    let mut stats = ScanStats::default();
    let progress = if args.show_progress() && !files.is_empty() {
        Some(create_progress_bar(files.len() as u64, "Classifying files"))
    } else {
        None
    };

    for path in &files {
        stats.files_examined += 1;

        let raw_text = match read_input_file(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                stats.files_failed += 1;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                continue;
            }
        };

        match repository.detect(&raw_text) {
            Ok(matched) => stats.record_match(matched.rule_id()),
            Err(Error::NoRuleMatched) => stats.files_unrecognized += 1,
            Err(e) => return Err(e),
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    stats.scan_time = started.elapsed();

    print_summary(&stats);
    Ok(stats)
}

fn print_summary(stats: &ScanStats) {
    println!("{}", "Scan summary".bold());
    println!("  Files examined:     {}", stats.files_examined);
    println!(
        "  Recognized:         {}",
        stats.files_matched.to_string().green()
    );
    println!(
        "  Unrecognized:       {}",
        stats.files_unrecognized.to_string().red()
    );
    if stats.files_failed > 0 {
        println!(
            "  Unreadable:         {}",
            stats.files_failed.to_string().yellow()
        );
    }
    for (rule_id, count) in &stats.matches_by_rule {
        println!("    {}: {}", rule_id.cyan(), count);
    }
    println!("  Elapsed:            {:.2?}", stats.scan_time);
}
