//! Best-effort file copier
//!
//! Copies one source file into its extension bucket under a destination root.
//! Any failure is logged and returned as [`CopyOutcome::Failed`]; it never
//! becomes an `Err`, so one bad file cannot abort sibling copies.

use crate::config::SortConfig;
use crate::error::{IoResultExt, Result, SortCopyError};
use crate::fs::bucket_dir;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Result of a single copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// File now exists at `target`
    Copied {
        /// Destination file path
        target: PathBuf,
        /// Bytes written (source size in dry-run mode)
        bytes: u64,
    },
    /// Copy did not happen; the reason has already been logged
    Failed {
        /// Destination file path that was attempted
        target: PathBuf,
        /// Underlying cause
        reason: String,
    },
}

impl CopyOutcome {
    /// Check if the file made it
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Destination path for this attempt
    pub fn target(&self) -> &Path {
        match self {
            Self::Copied { target, .. } | Self::Failed { target, .. } => target,
        }
    }
}

/// Options for the copier
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Preserve permission bits
    pub preserve_permissions: bool,
    /// Log targets without touching the filesystem
    pub dry_run: bool,
    /// Maximum simultaneous copies (`None` = unbounded)
    pub max_in_flight: Option<usize>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            preserve_permissions: true,
            dry_run: false,
            max_in_flight: None,
        }
    }
}

impl From<&SortConfig> for CopyOptions {
    fn from(config: &SortConfig) -> Self {
        Self {
            preserve_permissions: config.preserve_permissions,
            dry_run: config.dry_run,
            max_in_flight: config.max_open_files,
        }
    }
}

/// Copies files into extension buckets
#[derive(Debug)]
pub struct Copier {
    options: CopyOptions,
    /// Bounds open file handles when `max_in_flight` is set
    limiter: Option<Arc<Semaphore>>,
}

impl Copier {
    /// Create a new copier
    pub fn new(options: CopyOptions) -> Self {
        let limiter = options
            .max_in_flight
            .map(|permits| Arc::new(Semaphore::new(permits.max(1))));
        Self { options, limiter }
    }

    /// Create a copier with default options
    pub fn default_copier() -> Self {
        Self::new(CopyOptions::default())
    }

    /// Copy `source` into `destination_root/<extension>/<file name>`.
    ///
    /// Creates the bucket directory if needed and overwrites any existing
    /// file at the target.
    pub async fn copy(&self, source: &Path, destination_root: &Path) -> CopyOutcome {
        let target_dir = bucket_dir(destination_root, source);
        let Some(name) = source.file_name() else {
            let reason = "source has no file name".to_string();
            tracing::error!("Failed to copy {}: {}", source.display(), reason);
            return CopyOutcome::Failed {
                target: target_dir,
                reason,
            };
        };
        let target = target_dir.join(name);

        tracing::debug!("{} -> {}", source.display(), target.display());

        match self.try_copy(source, &target_dir, &target).await {
            Ok(bytes) => CopyOutcome::Copied { target, bytes },
            Err(e) => {
                tracing::error!(
                    "Failed to copy {} to {}: {}",
                    source.display(),
                    target.display(),
                    e
                );
                CopyOutcome::Failed {
                    target,
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_copy(&self, source: &Path, target_dir: &Path, target: &Path) -> Result<u64> {
        let _permit = match &self.limiter {
            Some(limiter) => Some(limiter.acquire().await.map_err(|e| {
                SortCopyError::TaskFailed {
                    path: source.to_path_buf(),
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        // Opening a FIFO or device for reading can block forever
        let metadata = tokio::fs::metadata(source).await.with_path(source)?;
        if !metadata.is_file() {
            return Err(SortCopyError::io(
                source,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        if self.options.dry_run {
            return Ok(metadata.len());
        }

        tokio::fs::create_dir_all(target_dir)
            .await
            .with_path(target_dir)?;

        if self.options.preserve_permissions {
            // tokio::fs::copy carries the permission bits over
            tokio::fs::copy(source, target).await.with_path(source)
        } else {
            copy_contents(source, target).await
        }
    }
}

/// Copy bytes only, leaving the target with default permissions
async fn copy_contents(source: &Path, target: &Path) -> Result<u64> {
    let mut reader = tokio::fs::File::open(source).await.with_path(source)?;
    let mut writer = tokio::fs::File::create(target).await.with_path(target)?;
    let bytes = tokio::io::copy(&mut reader, &mut writer)
        .await
        .with_path(source)?;
    writer.sync_all().await.with_path(target)?;
    Ok(bytes)
}
