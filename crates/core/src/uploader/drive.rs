//! Google Drive store implementation.
//!
//! Uses the Drive v3 multipart upload: one JSON metadata part naming the
//! file, its MIME type and parent folder, and one streamed media part.
//! Credentials arrive as an already-resolved bearer token; minting and
//! refreshing tokens is a deployment concern, not this crate's.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::debug;

use super::error::UploadError;
use super::traits::RemoteStore;
use super::types::StoredObject;
use crate::staging::StagedFile;

const DEFAULT_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3";

/// Drive store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Bearer token for the Drive API.
    pub access_token: String,
    /// Upload endpoint override (default: the Drive v3 upload URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
    /// Destination folder for generic-extraction uploads.
    pub youtube_folder_id: String,
    /// Destination folder for Vimeo uploads.
    pub vimeo_folder_id: String,
}

/// Remote store backed by Google Drive.
pub struct DriveStore {
    client: Client,
    upload_url: String,
    access_token: String,
}

impl DriveStore {
    /// Creates a new Drive store.
    pub fn new(config: &DriveConfig) -> Result<Self, UploadError> {
        // No request timeout: uploads of large staged files have no deadline.
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            upload_url: config
                .upload_url
                .clone()
                .unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string()),
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl RemoteStore for DriveStore {
    fn name(&self) -> &str {
        "drive"
    }

    async fn upload(
        &self,
        file: &StagedFile,
        folder_id: &str,
    ) -> Result<StoredObject, UploadError> {
        let media = File::open(&file.path)
            .await
            .map_err(|e| UploadError::FileOpen {
                path: file.path.clone(),
                source: e,
            })?;
        let body = Body::wrap_stream(ReaderStream::new(media));

        let metadata = serde_json::json!({
            "name": file.display_name,
            "mimeType": file.mime_type,
            "parents": [folder_id],
        });

        let form = Form::new()
            .part(
                "metadata",
                Part::text(metadata.to_string()).mime_str("application/json")?,
            )
            .part("media", Part::stream(body).mime_str(&file.mime_type)?);

        debug!(
            "Uploading {} as '{}' into folder {}",
            file.path.display(),
            file.display_name,
            folder_id
        );

        let response = self
            .client
            .post(format!("{}/files", self.upload_url))
            .query(&[
                ("uploadType", "multipart"),
                ("fields", "id, name, webViewLink, webContentLink"),
            ])
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json::<StoredObject>()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }
}
