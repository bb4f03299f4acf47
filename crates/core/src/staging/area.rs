//! Staging directory allocation and release.

use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Owns the staging root and hands out per-run directories.
#[derive(Debug, Clone)]
pub struct StagingArea {
    root: PathBuf,
}

impl StagingArea {
    /// Creates a staging area rooted at the given directory.
    ///
    /// The directory is created lazily on first allocation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The staging root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocates a fresh run-scoped directory under the staging root.
    ///
    /// The directory name is a generated v4 UUID, never derived from
    /// directory contents, so allocations from concurrent runs are
    /// guaranteed distinct.
    pub async fn allocate(&self) -> Result<RunDir, std::io::Error> {
        fs::create_dir_all(&self.root).await?;
        let path = self.root.join(Uuid::new_v4().to_string());
        fs::create_dir(&path).await?;
        Ok(RunDir { path })
    }
}

/// A staging directory owned by exactly one pipeline run.
///
/// Releasing consumes the value, so a run directory can only be deleted
/// once. The directory and anything staged inside it are removed together.
#[derive(Debug)]
pub struct RunDir {
    path: PathBuf,
}

impl RunDir {
    /// The run directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A file path inside this run's directory.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    /// Removes the run directory and everything in it.
    ///
    /// A deletion failure is logged and swallowed: by the time release
    /// runs the pipeline result is already determined, and a cleanup
    /// warning must never mask it.
    pub async fn release(self) {
        if let Err(e) = fs::remove_dir_all(&self.path).await {
            tracing::warn!(
                "Failed to clean up staging directory {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
