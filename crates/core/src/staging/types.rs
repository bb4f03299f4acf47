//! Staged artifact types.

use std::path::PathBuf;

use super::RunDir;

/// Which provider materialized a staged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Generic extraction via yt-dlp.
    Ytdlp,
    /// Direct download through the Vimeo API.
    Vimeo,
}

/// A locally staged media file awaiting upload.
///
/// Owns its run directory: releasing the file consumes the value and
/// removes the whole run directory, so the staged bytes are deleted
/// exactly once.
#[derive(Debug)]
pub struct StagedFile {
    run: RunDir,
    /// Absolute path of the staged media file.
    pub path: PathBuf,
    /// Name the artifact should carry in the remote store.
    pub display_name: String,
    /// MIME type reported upstream or derived from the file extension.
    pub mime_type: String,
    /// Provider that produced the file.
    pub source: SourceKind,
}

impl StagedFile {
    pub fn new(
        run: RunDir,
        path: PathBuf,
        display_name: impl Into<String>,
        mime_type: impl Into<String>,
        source: SourceKind,
    ) -> Self {
        Self {
            run,
            path,
            display_name: display_name.into(),
            mime_type: mime_type.into(),
            source,
        }
    }

    /// Deletes the staged file together with its run directory.
    pub async fn release(self) {
        self.run.release().await;
    }
}
