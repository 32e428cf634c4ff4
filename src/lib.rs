//! # SortCopy - Concurrent copy into extension buckets
//!
//! SortCopy walks a source directory tree and copies every file into a
//! destination folder, grouping files by extension: `src/a/report.pdf` lands in
//! `dst/pdf/report.pdf`, `src/README` and `src/.gitignore` land directly in
//! `dst/`.
//!
//! ## Features
//!
//! - **Concurrent traversal**: every directory entry gets its own tokio task
//! - **Structured join**: a directory completes only after its whole subtree
//! - **Best-effort copies**: a file that fails to copy is logged and skipped
//! - **Fatal listing errors**: an unreadable directory fails the run
//! - **Optional limit**: cap simultaneous copies with `--max-open-files`
//!
//! Files with the same name and extension overwrite each other silently; the
//! last copy to finish wins.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sortcopy::core::{sort_by_extension, RunOutcome};
//! use std::path::Path;
//!
//! # async fn run() -> sortcopy::Result<()> {
//! let outcome = sort_by_extension(Path::new("/downloads"), Path::new("/sorted")).await?;
//!
//! if let RunOutcome::Completed(summary) = outcome {
//!     println!("Copied {} files", summary.files_copied);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced Usage
//!
//! ```no_run
//! use sortcopy::config::SortConfig;
//! use sortcopy::core::sort_blocking;
//!
//! let config = SortConfig {
//!     max_open_files: Some(64),
//!     ..SortConfig::new("/downloads", "/sorted")
//! };
//!
//! let outcome = sort_blocking(config).unwrap();
//! if let Some(summary) = outcome.summary() {
//!     summary.print_summary();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod fs;

// Re-export commonly used types
pub use config::{OutputFormat, SortConfig};
pub use core::{RunOutcome, SortEngine, SortSummary, TreeWalker};
pub use error::{Result, SortCopyError};
pub use fs::{CopyOutcome, Copier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use sortcopy::prelude::*;
    //! ```

    pub use crate::config::{OutputFormat, SortConfig};
    pub use crate::core::{sort_blocking, sort_by_extension, RunOutcome, SortEngine, SortSummary, TreeWalker};
    pub use crate::error::{Result, SortCopyError};
    pub use crate::fs::{bucket_name, target_path, CopyOptions, CopyOutcome, Copier};
}
