//! Error type for a relay pipeline run.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::uploader::UploadError;

/// Terminal failure of a pipeline run.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The source could not be resolved into a staged file.
    #[error(transparent)]
    Resolve(#[from] ProviderError),

    /// The staged file could not be uploaded to the remote store.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl RelayError {
    /// Stable taxonomy label surfaced in API error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resolve(e) => e.kind(),
            Self::Upload(e) => e.kind(),
        }
    }

    /// HTTP status this failure maps to: bad input is the caller's
    /// fault, everything downstream is a server-side failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Resolve(ProviderError::InvalidUrl(_)) => 400,
            _ => 500,
        }
    }
}
