//! Pipeline composition: provider, staging, uploader, cleanup.

use std::sync::Arc;
use tracing::{debug, info};

use super::error::RelayError;
use crate::provider::SourceProvider;
use crate::staging::StagingArea;
use crate::uploader::{RemoteStore, StoredObject};

/// Composes resolve → stage → upload → cleanup into one request-scoped
/// operation.
///
/// Per run: the provider resolves the URL and stages the media, the store
/// uploads it, and the staged file is released after the upload attempt
/// settles — success or failure. Cleanup is awaited, never detached, so a
/// run's terminal state implies its staging is already gone.
pub struct RelayPipeline {
    staging: StagingArea,
    store: Arc<dyn RemoteStore>,
}

impl RelayPipeline {
    /// Creates a pipeline over the given staging area and remote store.
    pub fn new(staging: StagingArea, store: Arc<dyn RemoteStore>) -> Self {
        Self { staging, store }
    }

    /// The staging area providers resolve against.
    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    /// Runs one acquisition-and-relay operation to its terminal state.
    pub async fn run(
        &self,
        provider: &dyn SourceProvider,
        source_url: &str,
        folder_id: &str,
    ) -> Result<StoredObject, RelayError> {
        info!(
            "Resolving {} via provider '{}'",
            source_url,
            provider.name()
        );
        let staged = provider.resolve(source_url, &self.staging).await?;

        debug!(
            "Staged '{}' ({}) at {}",
            staged.display_name,
            staged.mime_type,
            staged.path.display()
        );

        let outcome = self.store.upload(&staged, folder_id).await;

        // The staged file is deleted exactly once, after the upload attempt
        // resolves, before the result reaches the caller.
        staged.release().await;

        let stored = outcome?;
        info!(
            "Uploaded '{}' to {} as object {}",
            stored.name,
            self.store.name(),
            stored.id
        );
        Ok(stored)
    }
}
