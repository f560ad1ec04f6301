//! Detect command implementation
//!
//! Classifies one or more named input files against the loaded rule set and
//! reports the winning rule for each, in human-readable or JSON form.

use super::shared::{read_input_file, resolve_repository, setup_logging};
use crate::Result;
use crate::cli::args::{DetectArgs, OutputFormat};
use crate::error::Error;
use colored::Colorize;
use serde_json::json;
use tracing::{debug, info};

/// Execute the detect command
pub async fn run_detect(args: DetectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let handle = resolve_repository(args.rules_dir.as_ref())?;
    let repository = handle.repository();
    info!("classifying {} file(s)", args.files.len());

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let raw_text = read_input_file(path).await?;
        debug!("read {} ({} bytes)", path.display(), raw_text.len());

        match repository.detect(&raw_text) {
            Ok(matched) => results.push((path, Some(matched))),
            Err(Error::NoRuleMatched) => results.push((path, None)),
            Err(e) => return Err(e),
        }
    }

    match args.output_format {
        OutputFormat::Human => print_human(&results, args.show_regions),
        OutputFormat::Json => print_json(&results)?,
    }

    Ok(())
}

fn print_human(
    results: &[(&std::path::PathBuf, Option<crate::detector::FormatMatch>)],
    show_regions: bool,
) {
    for (path, outcome) in results {
        match outcome {
            Some(matched) => {
                println!(
                    "{}: {}",
                    path.display(),
                    matched.rule_id().green().bold()
                );
                if show_regions {
                    let mut names: Vec<&str> =
                        matched.regions().keys().map(String::as_str).collect();
                    names.sort_unstable();
                    for name in names {
                        let text = matched.region(name).unwrap_or_default();
                        println!(
                            "  {} ({} bytes):",
                            name.cyan(),
                            text.len()
                        );
                        for line in text.lines() {
                            println!("    {line}");
                        }
                    }
                }
            }
            None => {
                println!(
                    "{}: {}",
                    path.display(),
                    "unrecognized file format".red()
                );
            }
        }
    }
}

fn print_json(
    results: &[(&std::path::PathBuf, Option<crate::detector::FormatMatch>)],
) -> Result<()> {
    let entries: Vec<serde_json::Value> = results
        .iter()
        .map(|(path, outcome)| match outcome {
            Some(matched) => json!({
                "file": path.display().to_string(),
                "rule": matched.rule_id(),
                "regions": matched.regions(),
            }),
            None => json!({
                "file": path.display().to_string(),
                "rule": serde_json::Value::Null,
            }),
        })
        .collect();

    let rendered = serde_json::to_string_pretty(&entries)
        .map_err(|e| Error::configuration(format!("failed to render JSON output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
