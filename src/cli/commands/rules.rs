//! Rules command implementation
//!
//! Lists the loaded parsing rules in their detection priority order, with an
//! optional detailed view of each assembled pattern.

use super::shared::{resolve_repository, setup_logging};
use crate::Result;
use crate::cli::args::RulesArgs;
use crate::config::default_rules_dir;
use crate::rule::load_reference_names;
use colored::Colorize;
use tracing::debug;

/// Execute the rules command
pub async fn run_rules(args: RulesArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    let handle = resolve_repository(args.rules_dir.as_ref())?;
    let repository = handle.repository();

    println!(
        "{} ({} rules, tried in listed order)",
        "Parsing rules".bold(),
        repository.len()
    );

    for compiled in repository.list_rules() {
        let mode = if compiled.rule.definition.sep.is_some() {
            "separator"
        } else {
            "named-group"
        };
        println!("  {} [{}]", compiled.rule.id.green(), mode);

        if args.detailed {
            for line in compiled.grammar.pattern().lines() {
                println!("    {}", line.dimmed());
            }
        }
    }

    let rules_dir = args
        .rules_dir
        .clone()
        .unwrap_or_else(default_rules_dir);
    match load_reference_names(&rules_dir) {
        Ok(names) => println!("\n{} {} channel short names", "Reference map:".bold(), names.len()),
        Err(e) => debug!("no reference name map available: {}", e),
    }

    Ok(())
}
