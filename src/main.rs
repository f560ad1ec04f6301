use clap::Parser;
use cnv_detector::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CNV Detector - Sea-Bird CTD File Format Identifier");
    println!("==================================================");
    println!();
    println!("Identify which legacy CNV text layout a raw Sea-Bird instrument file");
    println!("uses and extract its header and data blocks for downstream parsing.");
    println!();
    println!("USAGE:");
    println!("    cnv-detector <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    detect      Classify one or more CNV files (main command)");
    println!("    scan        Scan a directory and classify every candidate file");
    println!("    rules       List the loaded parsing rules in priority order");
    println!("    fetch       Download sample CNV files into the local cache");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Classify a single profile:");
    println!("    cnv-detector detect sta0860.cnv");
    println!();
    println!("    # Classify with the captured regions printed as JSON:");
    println!("    cnv-detector detect sta0860.cnv --show-regions --format json");
    println!();
    println!("    # Scan a cruise directory for CNV files:");
    println!("    cnv-detector scan /data/cruise-2019");
    println!();
    println!("    # Inspect the bundled rules:");
    println!("    cnv-detector rules --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cnv-detector <COMMAND> --help");
}
