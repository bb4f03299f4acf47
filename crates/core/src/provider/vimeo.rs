//! Vimeo API provider.
//!
//! Resolves a `vimeo.com/<id>` URL through the platform's metadata
//! endpoint, selects a rendition, and streams it into staging. Requires a
//! personal access token with video download scope.

use async_trait::async_trait;
use futures::StreamExt;
use regex_lite::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::error::ProviderError;
use super::traits::SourceProvider;
use crate::rendition::{self, Rendition};
use crate::staging::{SourceKind, StagedFile, StagingArea};

const DEFAULT_API_URL: &str = "https://api.vimeo.com";

/// Numeric video id embedded in a Vimeo URL.
const VIDEO_ID_PATTERN: &str = r"vimeo\.com/(\d+)";

/// Vimeo provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VimeoConfig {
    /// Personal access token for the Vimeo API.
    pub access_token: String,
    /// API base URL override (default: https://api.vimeo.com).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Provider that downloads through the Vimeo API.
pub struct VimeoProvider {
    client: Client,
    api_url: String,
    access_token: String,
    id_pattern: Regex,
}

impl VimeoProvider {
    /// Creates a new Vimeo provider.
    pub fn new(config: VimeoConfig) -> Result<Self, ProviderError> {
        // Deliberately no request timeout: a relay run has no deadline and
        // large renditions can stream for a long time.
        let client = Client::builder().build()?;
        let id_pattern = Regex::new(VIDEO_ID_PATTERN)
            .map_err(|e| ProviderError::InvalidResponse(format!("bad id pattern: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            access_token: config.access_token,
            id_pattern,
        })
    }

    /// Extracts the numeric video id from a Vimeo URL.
    fn parse_video_id(&self, source_url: &str) -> Result<String, ProviderError> {
        self.id_pattern
            .captures(source_url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ProviderError::InvalidUrl(source_url.to_string()))
    }

    /// Fetches the video name and downloadable renditions.
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, ProviderError> {
        let url = format!("{}/videos/{}", self.api_url, video_id);

        debug!("Vimeo metadata lookup: id={}", video_id);

        let response = self
            .client
            .get(&url)
            .query(&[("fields", "name,download")])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let video: VideoResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse video metadata: {}", e))
        })?;

        Ok(video.into())
    }

    /// Streams a rendition into the given path, fully draining the source
    /// before reporting success.
    async fn download_to(&self, link: &str, path: &Path) -> Result<(), ProviderError> {
        let response = self.client.get(link).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut file = File::create(path)
            .await
            .map_err(|e| ProviderError::StreamWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .await
                .map_err(|e| ProviderError::StreamWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }

        file.flush()
            .await
            .map_err(|e| ProviderError::StreamWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}

#[async_trait]
impl SourceProvider for VimeoProvider {
    fn name(&self) -> &str {
        "vimeo"
    }

    async fn resolve(
        &self,
        source_url: &str,
        staging: &StagingArea,
    ) -> Result<StagedFile, ProviderError> {
        let video_id = self.parse_video_id(source_url)?;
        let metadata = self.fetch_metadata(&video_id).await?;
        let rendition = rendition::select(&metadata.renditions)?.clone();

        debug!(
            "Selected {}px '{}' rendition for video {}",
            rendition.width, rendition.quality, video_id
        );

        // Metadata and selection are settled; only now touch the disk.
        let run = staging.allocate().await?;
        let file_name = format!("{}.mp4", sanitize_file_name(&metadata.name));
        let path = run.file_path(&file_name);

        if let Err(e) = self.download_to(&rendition.link, &path).await {
            run.release().await;
            return Err(e);
        }

        Ok(StagedFile::new(
            run,
            path,
            metadata.name,
            rendition.mime_type,
            SourceKind::Vimeo,
        ))
    }
}

/// Keeps upstream video names from escaping the run directory.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '-',
            other => other,
        })
        .collect()
}

// ============================================================================
// Vimeo API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct VideoResponse {
    name: String,
    #[serde(default)]
    download: Vec<DownloadEntry>,
}

#[derive(Debug, Deserialize)]
struct DownloadEntry {
    width: u32,
    quality: String,
    #[serde(rename = "type")]
    mime_type: String,
    link: String,
}

struct VideoMetadata {
    name: String,
    renditions: Vec<Rendition>,
}

impl From<VideoResponse> for VideoMetadata {
    fn from(v: VideoResponse) -> Self {
        Self {
            name: v.name,
            renditions: v
                .download
                .into_iter()
                .map(|d| Rendition {
                    width: d.width,
                    quality: d.quality,
                    mime_type: d.mime_type,
                    link: d.link,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> VimeoProvider {
        VimeoProvider::new(VimeoConfig {
            access_token: "test-token".to_string(),
            api_url: None,
        })
        .unwrap()
    }

    #[test]
    fn test_parse_video_id_from_plain_url() {
        let p = provider();
        assert_eq!(p.parse_video_id("https://vimeo.com/12345").unwrap(), "12345");
    }

    #[test]
    fn test_parse_video_id_with_trailing_path() {
        let p = provider();
        assert_eq!(
            p.parse_video_id("https://vimeo.com/987654321/abcdef").unwrap(),
            "987654321"
        );
    }

    #[test]
    fn test_parse_video_id_rejects_non_numeric() {
        let p = provider();
        let err = p.parse_video_id("https://vimeo.com/channels/staff").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidUrl(_)));
    }

    #[test]
    fn test_parse_video_id_rejects_other_hosts() {
        let p = provider();
        assert!(p
            .parse_video_id("https://example.com/watch?v=12345")
            .is_err());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("a/b\\c"), "a-b-c");
        assert_eq!(sanitize_file_name("plain name"), "plain name");
    }

    #[test]
    fn test_metadata_response_parsing() {
        let json = r#"{
            "name": "clip",
            "download": [
                {"width": 1920, "quality": "hd", "type": "video/mp4", "link": "u0"},
                {"width": 720, "quality": "hd", "type": "video/mp4", "link": "u2"}
            ]
        }"#;
        let response: VideoResponse = serde_json::from_str(json).unwrap();
        let metadata: VideoMetadata = response.into();
        assert_eq!(metadata.name, "clip");
        assert_eq!(metadata.renditions.len(), 2);
        assert_eq!(metadata.renditions[1].link, "u2");
    }

    #[test]
    fn test_metadata_response_missing_download_defaults_empty() {
        let response: VideoResponse = serde_json::from_str(r#"{"name": "clip"}"#).unwrap();
        assert!(response.download.is_empty());
    }
}
