//! Sort driver
//!
//! Checks the preconditions, prepares the destination, runs the tree walker
//! once at the source root and reports fatal traversal errors.

use crate::config::SortConfig;
use crate::core::{SortSummary, TreeWalker};
use crate::error::{IoResultExt, Result, SortCopyError};
use crate::fs::{CopyOptions, Copier};
use std::path::Path;
use std::time::Instant;

/// Outcome of a sort run that did not hit a traversal error
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The whole tree was walked
    Completed(SortSummary),
    /// The source was not a directory; nothing was done
    SourceNotDirectory,
}

impl RunOutcome {
    /// Summary of the run, if it walked anything
    pub fn summary(&self) -> Option<&SortSummary> {
        match self {
            Self::Completed(summary) => Some(summary),
            Self::SourceNotDirectory => None,
        }
    }
}

/// Sorts a source tree into per-extension buckets
pub struct SortEngine {
    config: SortConfig,
}

impl SortEngine {
    /// Create a new engine
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Execute the sort.
    ///
    /// A source that is not a directory is logged and reported as
    /// [`RunOutcome::SourceNotDirectory`]. Traversal errors are logged as
    /// fatal and returned.
    pub async fn execute(&self) -> Result<RunOutcome> {
        let source = &self.config.source;
        let destination = &self.config.destination;
        tracing::debug!("Source: {}", source.display());
        tracing::debug!("Destination: {}", destination.display());

        if !is_dir(source).await {
            tracing::error!("{}", SortCopyError::NotADirectory(source.clone()));
            return Ok(RunOutcome::SourceNotDirectory);
        }

        let start = Instant::now();
        match self.run(source, destination).await {
            Ok(mut summary) => {
                summary.duration = start.elapsed();
                tracing::info!(
                    files = summary.files_copied,
                    failed = summary.files_failed,
                    dirs = summary.dirs_visited,
                    "Sorted {} into {}",
                    source.display(),
                    destination.display()
                );
                Ok(RunOutcome::Completed(summary))
            }
            Err(e) => {
                tracing::error!("Fatal: {}", e);
                Err(e)
            }
        }
    }

    async fn run(&self, source: &Path, destination: &Path) -> Result<SortSummary> {
        if !self.config.dry_run && !is_dir(destination).await {
            tokio::fs::create_dir_all(destination)
                .await
                .with_path(destination)?;
        }

        let copier = Copier::new(CopyOptions::from(&self.config));
        TreeWalker::new(copier).walk(source, destination).await
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Sort `source` into `destination` with default settings
pub async fn sort_by_extension(source: &Path, destination: &Path) -> Result<RunOutcome> {
    SortEngine::new(SortConfig::new(source, destination))
        .execute()
        .await
}

/// Blocking wrapper that drives [`SortEngine::execute`] on a fresh runtime
pub fn sort_blocking(config: SortConfig) -> Result<RunOutcome> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| SortCopyError::config(format!("Failed to create runtime: {}", e)))?;
    rt.block_on(SortEngine::new(config).execute())
}
