//! Error types for the remote uploader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while uploading a staged file.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The staged file could not be opened for reading.
    #[error("failed to open staged file {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store answered the upload with a non-success status.
    #[error("remote store rejected upload (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The HTTP transport failed mid-upload.
    #[error("upload transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store's response could not be parsed.
    #[error("failed to parse store response: {0}")]
    InvalidResponse(String),
}

impl UploadError {
    /// Stable taxonomy label surfaced in API error responses.
    ///
    /// Every upload failure collapses to one kind: the distinction matters
    /// for the log line, not for the caller.
    pub fn kind(&self) -> &'static str {
        "UploadFailed"
    }
}
