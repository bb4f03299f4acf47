//! Mock remote store for testing.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::staging::StagedFile;
use crate::uploader::{RemoteStore, StoredObject, UploadError};

/// An upload captured by [`MockStore`], for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    /// Display name the upload carried.
    pub display_name: String,
    /// MIME type the upload carried.
    pub mime_type: String,
    /// Destination folder the upload targeted.
    pub folder_id: String,
    /// Staged path that was uploaded.
    pub path: PathBuf,
    /// Whether the staged file still existed on disk at upload time.
    pub file_existed: bool,
}

/// Mock implementation of the RemoteStore trait.
///
/// Records every upload and can be switched into a failing mode to
/// exercise the pipeline's cleanup-on-failure path.
pub struct MockStore {
    fail_uploads: AtomicBool,
    counter: AtomicUsize,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Creates a mock store that accepts every upload.
    pub fn new() -> Self {
        Self {
            fail_uploads: AtomicBool::new(false),
            counter: AtomicUsize::new(0),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Makes every subsequent upload fail (or succeed again).
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Every upload attempted so far, in order.
    pub async fn recorded_uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().await.clone()
    }

    /// Number of upload attempts.
    pub async fn upload_count(&self) -> usize {
        self.uploads.lock().await.len()
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn upload(
        &self,
        file: &StagedFile,
        folder_id: &str,
    ) -> Result<StoredObject, UploadError> {
        let file_existed = tokio::fs::try_exists(&file.path).await.unwrap_or(false);

        self.uploads.lock().await.push(RecordedUpload {
            display_name: file.display_name.clone(),
            mime_type: file.mime_type.clone(),
            folder_id: folder_id.to_string(),
            path: file.path.clone(),
            file_existed,
        });

        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(UploadError::Rejected {
                status: 503,
                message: "injected upload failure".to_string(),
            });
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let id = format!("mock-object-{}", n);
        Ok(StoredObject {
            name: file.display_name.clone(),
            web_view_link: Some(format!("https://store.example/view/{}", id)),
            web_content_link: Some(format!("https://store.example/download/{}", id)),
            id,
        })
    }
}
