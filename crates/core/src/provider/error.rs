//! Error types for source providers.

use std::path::PathBuf;
use thiserror::Error;

use crate::rendition::NoRenditionAvailable;

/// Errors that can occur while resolving a source URL into a staged file.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source URL does not match the provider's expected pattern.
    #[error("invalid source URL: {0}")]
    InvalidUrl(String),

    /// The external extraction tool failed or produced no file.
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),

    /// The upstream API answered with a non-success status.
    #[error("upstream API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The upstream response could not be parsed.
    #[error("failed to parse upstream response: {0}")]
    InvalidResponse(String),

    /// No rendition satisfied the selection policy.
    #[error(transparent)]
    NoRenditionAvailable(#[from] NoRenditionAvailable),

    /// The media stream could not be written to staging.
    #[error("failed to write media stream to {path}")]
    StreamWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP transport failed before a status was received.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Staging allocation failed.
    #[error("staging I/O error: {0}")]
    Staging(#[from] std::io::Error),
}

impl ProviderError {
    /// Stable taxonomy label surfaced in API error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "InvalidUrl",
            Self::ExtractionFailed(_) => "ExtractionFailed",
            Self::Upstream { .. } | Self::InvalidResponse(_) | Self::Transport(_) => {
                "UpstreamError"
            }
            Self::NoRenditionAvailable(_) => "NoRenditionAvailable",
            Self::StreamWriteFailed { .. } | Self::Staging(_) => "StreamWriteFailed",
        }
    }
}
