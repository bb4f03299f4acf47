//! Trait definitions for the remote uploader.

use async_trait::async_trait;

use super::error::UploadError;
use super::types::StoredObject;
use crate::staging::StagedFile;

/// A remote content store that accepts staged files.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Returns the name of this store implementation.
    fn name(&self) -> &str;

    /// Uploads a staged file into the given destination folder.
    ///
    /// A failed upload is terminal for the pipeline run: no resume, no
    /// retry. The caller remains responsible for releasing the staged
    /// file afterwards.
    async fn upload(
        &self,
        file: &StagedFile,
        folder_id: &str,
    ) -> Result<StoredObject, UploadError>;
}
