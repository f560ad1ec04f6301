//! Fetch command implementation
//!
//! Downloads known sample CNV files into the local support directory so the
//! detect and scan commands have real instrument exports to work with.

use super::shared::setup_logging;
use crate::Result;
use crate::cli::args::FetchArgs;
use crate::sampledata;
use colored::Colorize;
use tracing::info;

/// Execute the fetch command
pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    let paths = sampledata::fetch(args.file.as_deref(), args.dtype.as_deref()).await?;
    info!("{} sample file(s) available", paths.len());

    println!("{}", "Sample files".bold());
    for path in &paths {
        println!("  {}", path.display());
    }

    Ok(())
}
