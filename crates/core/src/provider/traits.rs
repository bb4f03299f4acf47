//! Trait definitions for source providers.

use async_trait::async_trait;

use super::error::ProviderError;
use crate::staging::{StagedFile, StagingArea};

/// A provider that can turn a source URL into a staged local file.
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// Returns the name of this provider implementation.
    fn name(&self) -> &str;

    /// Resolves the source URL and materializes the media into staging.
    ///
    /// Implementations allocate a run directory from `staging` only once
    /// they are ready to write bytes; a failure before that point leaves
    /// no staging path behind, and a failure after it must release the
    /// run directory before returning.
    async fn resolve(
        &self,
        source_url: &str,
        staging: &StagingArea,
    ) -> Result<StagedFile, ProviderError>;
}
