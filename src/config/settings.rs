//! Configuration settings for SortCopy
//!
//! Defines the CLI arguments and the runtime configuration handed to the
//! sorting driver.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SortCopy - copy a directory tree into per-extension folders
#[derive(Parser, Debug, Clone)]
#[command(name = "sortcopy")]
#[command(author = "SortCopy Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sort files from source to destination folder and group them by extension")]
#[command(long_about = r#"
SortCopy walks a source directory tree concurrently and copies every file it
finds into DESTINATION/<extension>/<file name>. Files without an extension
(including dotfiles such as .gitignore) land directly in DESTINATION.

Files with the same name and extension overwrite each other; the last copy to
finish wins.

Examples:
  sortcopy ~/Downloads ~/Sorted            # Sort a folder
  sortcopy ./src ./by-ext -v               # Log every copy
  sortcopy ./src ./by-ext --dry-run -v     # Show targets, write nothing
  sortcopy ./src ./by-ext --summary json   # Print a JSON summary
"#)]
pub struct CliArgs {
    /// Source directory to read files from
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination directory (created if missing)
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Verbose output (log every copy)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Dry run (show what would be copied)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Maximum number of simultaneous file copies (0 = unbounded)
    #[arg(long, default_value = "0", value_name = "NUM", env = "SORTCOPY_MAX_OPEN_FILES")]
    pub max_open_files: usize,

    /// Print a summary of the run in the given format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub summary: Option<OutputFormat>,
}

/// Output format for run summaries
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    /// Source directory
    pub source: PathBuf,
    /// Destination root
    pub destination: PathBuf,
    /// Copy permission bits along with the content
    pub preserve_permissions: bool,
    /// Dry run mode
    pub dry_run: bool,
    /// Cap on simultaneous file copies; `None` means unbounded
    pub max_open_files: Option<usize>,
    /// Summary output requested by the caller
    pub summary: Option<OutputFormat>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            preserve_permissions: true,
            dry_run: false,
            max_open_files: None,
            summary: None,
        }
    }
}

impl SortConfig {
    /// Create a config for the given source and destination with defaults
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Create config from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        if args.source.as_os_str().is_empty() {
            return Err("Source path required".to_string());
        }
        if args.destination.as_os_str().is_empty() {
            return Err("Destination path required".to_string());
        }

        Ok(Self {
            source: args.source.clone(),
            destination: args.destination.clone(),
            dry_run: args.dry_run,
            max_open_files: (args.max_open_files > 0).then_some(args.max_open_files),
            summary: args.summary,
            ..Default::default()
        })
    }
}
