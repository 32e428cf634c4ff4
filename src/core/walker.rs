//! Concurrent tree walker
//!
//! Lists one directory at a time and spawns a task per entry: a nested walk
//! for subdirectories, a copy for everything else. A directory completes only
//! after every task it spawned has completed.
//!
//! Listing failures are traversal errors and propagate to the caller. Copy
//! failures never do; the copier absorbs them.

use crate::core::SortSummary;
use crate::error::{Result, SortCopyError};
use crate::fs::Copier;
use futures::future::{join_all, BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Walks a source tree and sorts its files into a destination root
#[derive(Debug, Clone)]
pub struct TreeWalker {
    copier: Arc<Copier>,
}

impl TreeWalker {
    /// Create a walker that copies through `copier`
    pub fn new(copier: Copier) -> Self {
        Self {
            copier: Arc::new(copier),
        }
    }

    /// Sort every file under `source_dir` into `destination_root`.
    ///
    /// `source_dir` is trusted to be a directory. Returns the first traversal
    /// error seen anywhere in the tree, after all launched tasks have finished.
    pub async fn walk(&self, source_dir: &Path, destination_root: &Path) -> Result<SortSummary> {
        walk_dir(
            Arc::clone(&self.copier),
            source_dir.to_path_buf(),
            Arc::from(destination_root),
        )
        .await
    }
}

fn walk_dir(
    copier: Arc<Copier>,
    dir: PathBuf,
    destination: Arc<Path>,
) -> BoxFuture<'static, Result<SortSummary>> {
    async move {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| SortCopyError::io(&dir, e))?;

        let mut tasks: Vec<(PathBuf, JoinHandle<Result<SortSummary>>)> = Vec::new();
        let mut first_error = None;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    first_error = Some(SortCopyError::io(&dir, e));
                    break;
                }
            };
            let path = entry.path();

            let handle = if is_directory(&entry).await {
                tokio::spawn(walk_dir(
                    Arc::clone(&copier),
                    path.clone(),
                    Arc::clone(&destination),
                ))
            } else {
                let copier = Arc::clone(&copier);
                let destination = Arc::clone(&destination);
                let source = path.clone();
                tokio::spawn(async move {
                    let outcome = copier.copy(&source, &destination).await;
                    Ok(SortSummary::from_outcome(&source, outcome))
                })
            };
            tasks.push((path, handle));
        }

        let (paths, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();
        let results = join_all(handles).await;

        let mut summary = SortSummary::directory();
        for (path, result) in paths.into_iter().zip(results) {
            match result {
                Ok(Ok(child)) => summary.merge(child),
                Ok(Err(e)) => {
                    first_error.get_or_insert(e);
                }
                Err(join_err) => {
                    first_error.get_or_insert(SortCopyError::TaskFailed {
                        path,
                        message: join_err.to_string(),
                    });
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }
    .boxed()
}

/// Classify by what the entry resolves to; symlinks are followed.
/// Entries that cannot be stat'ed are handed to the copier, which reports them.
async fn is_directory(entry: &tokio::fs::DirEntry) -> bool {
    match entry.file_type().await {
        Ok(file_type) if file_type.is_dir() => true,
        Ok(file_type) if file_type.is_symlink() => tokio::fs::metadata(entry.path())
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false),
        Ok(_) => false,
        Err(_) => tokio::fs::metadata(entry.path())
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false),
    }
}
