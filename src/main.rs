//! SortCopy CLI - copy a directory tree into per-extension folders

use clap::Parser;
use sortcopy::config::{CliArgs, SortConfig};
use sortcopy::core::{sort_blocking, RunOutcome};
use sortcopy::error::{Result, SortCopyError};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "sortcopy=debug,warn" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = SortConfig::from_cli(&args).map_err(SortCopyError::ConfigError)?;
    let summary_format = config.summary;

    let outcome = sort_blocking(config)?;

    if let (RunOutcome::Completed(summary), Some(format)) = (&outcome, summary_format) {
        println!("{}", summary.render(format)?);
    }

    println!("Done");
    Ok(())
}
