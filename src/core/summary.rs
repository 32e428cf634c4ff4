//! Run summaries
//!
//! Each walk returns the summary of its own subtree, and parents merge the
//! summaries of their children after the join. No counters are shared
//! between tasks.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::fs::{bucket_name, CopyOutcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

/// A file that could not be copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCopy {
    /// Source file
    pub source: String,
    /// Underlying cause
    pub reason: String,
}

/// Aggregate result of sorting a directory tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortSummary {
    /// Files copied successfully
    pub files_copied: u64,
    /// Files whose copy failed and was skipped
    pub files_failed: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Directories listed
    pub dirs_visited: u64,
    /// Buckets that received at least one file ("" is the destination root)
    pub buckets: BTreeSet<String>,
    /// Per-file failures
    pub failures: Vec<FailedCopy>,
    /// Wall-clock time of the run
    pub duration: Duration,
}

impl SortSummary {
    /// Summary for one listed directory, before its children are merged in
    pub fn directory() -> Self {
        Self {
            dirs_visited: 1,
            ..Default::default()
        }
    }

    /// Summary for a single copy attempt of `source`
    pub fn from_outcome(source: &Path, outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied { bytes, .. } => Self {
                files_copied: 1,
                bytes_copied: bytes,
                buckets: BTreeSet::from([bucket_name(source).to_string_lossy().into_owned()]),
                ..Default::default()
            },
            CopyOutcome::Failed { reason, .. } => Self {
                files_failed: 1,
                failures: vec![FailedCopy {
                    source: source.display().to_string(),
                    reason,
                }],
                ..Default::default()
            },
        }
    }

    /// Fold a child's summary into this one
    pub fn merge(&mut self, other: SortSummary) {
        self.files_copied += other.files_copied;
        self.files_failed += other.files_failed;
        self.bytes_copied += other.bytes_copied;
        self.dirs_visited += other.dirs_visited;
        self.buckets.extend(other.buckets);
        self.failures.extend(other.failures);
    }

    /// Check if every file was copied
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }

    /// Average throughput in bytes/second
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.bytes_copied as f64 / secs
        } else {
            0.0
        }
    }

    /// Render the summary in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Print summary to console
    pub fn print_summary(&self) {
        println!("{}", self.to_text());
    }

    fn to_text(&self) -> String {
        let buckets: Vec<&str> = self
            .buckets
            .iter()
            .map(|b| if b.is_empty() { "(none)" } else { b.as_str() })
            .collect();

        let mut out = String::from("=== Sort Summary ===\n");
        out.push_str(&format!("Files copied:    {}\n", self.files_copied));
        out.push_str(&format!(
            "Bytes copied:    {}\n",
            humansize::format_size(self.bytes_copied, humansize::BINARY)
        ));
        out.push_str(&format!("Directories:     {}\n", self.dirs_visited));
        out.push_str(&format!("Buckets:         {}\n", buckets.join(", ")));
        out.push_str(&format!("Duration:        {:.2?}\n", self.duration));
        out.push_str(&format!(
            "Throughput:      {}/s",
            humansize::format_size(self.throughput() as u64, humansize::BINARY)
        ));

        if !self.failures.is_empty() {
            out.push_str(&format!("\n\nFailures: {}", self.failures.len()));
            for failure in &self.failures {
                out.push_str(&format!("\n  {} - {}", failure.source, failure.reason));
            }
        }
        out
    }
}
