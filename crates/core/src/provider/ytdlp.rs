//! Generic extraction provider backed by the yt-dlp binary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::process::Command;
use tracing::debug;

use super::error::ProviderError;
use super::traits::SourceProvider;
use crate::staging::{SourceKind, StagedFile, StagingArea};

/// yt-dlp provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtdlpConfig {
    /// Path or name of the yt-dlp binary (default: "yt-dlp").
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for YtdlpConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_binary() -> String {
    "yt-dlp".to_string()
}

/// Provider that delegates extraction to yt-dlp.
pub struct YtdlpProvider {
    config: YtdlpConfig,
}

impl YtdlpProvider {
    /// Creates a provider with the given configuration.
    pub fn new(config: YtdlpConfig) -> Self {
        Self { config }
    }

    /// Creates a provider with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(YtdlpConfig::default())
    }

    /// Finds the file yt-dlp produced inside the run directory.
    ///
    /// yt-dlp expands the `%(title)s.%(ext)s` template itself, so the final
    /// name is only known after the fact. The listing is confined to this
    /// run's private directory, which no other run can write into.
    async fn find_output(dir: &Path) -> Result<PathBuf, ProviderError> {
        let mut entries = fs::read_dir(dir).await?;
        let mut produced = None;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                produced = Some(entry.path());
                break;
            }
        }
        produced.ok_or_else(|| {
            ProviderError::ExtractionFailed("extractor produced no output file".to_string())
        })
    }
}

#[async_trait]
impl SourceProvider for YtdlpProvider {
    fn name(&self) -> &str {
        "ytdlp"
    }

    async fn resolve(
        &self,
        source_url: &str,
        staging: &StagingArea,
    ) -> Result<StagedFile, ProviderError> {
        let run = staging.allocate().await?;
        let template = run.path().join("%(title)s.%(ext)s");

        debug!(
            "Running {} for {} into {}",
            self.config.binary,
            source_url,
            run.path().display()
        );

        let output = Command::new(&self.config.binary)
            .arg(source_url)
            .arg("-o")
            .arg(&template)
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                run.release().await;
                return Err(ProviderError::ExtractionFailed(format!(
                    "failed to run {}: {}",
                    self.config.binary, e
                )));
            }
        };

        if !output.status.success() {
            run.release().await;
            return Err(ProviderError::ExtractionFailed(format!(
                "{} exited with {}: {}",
                self.config.binary,
                output.status,
                stderr_tail(&output.stderr)
            )));
        }

        let path = match Self::find_output(run.path()).await {
            Ok(path) => path,
            Err(e) => {
                run.release().await;
                return Err(e);
            }
        };

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "video.mp4".to_string());
        let mime_type = mime_for_path(&path);

        Ok(StagedFile::new(
            run,
            path,
            display_name,
            mime_type,
            SourceKind::Ytdlp,
        ))
    }
}

/// MIME type for a staged file, derived from its extension.
///
/// Defaults to video/mp4 for anything unrecognized.
pub(crate) fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        _ => "video/mp4",
    }
}

/// Last chunk of a captured stderr buffer, for error messages.
fn stderr_tail(stderr: &[u8]) -> String {
    const TAIL_BYTES: usize = 400;
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    if trimmed.len() <= TAIL_BYTES {
        trimmed.to_string()
    } else {
        let start = trimmed.len() - TAIL_BYTES;
        // Avoid splitting inside a multi-byte character
        let start = (start..trimmed.len())
            .find(|i| trimmed.is_char_boundary(*i))
            .unwrap_or(start);
        format!("...{}", &trimmed[start..])
    }
}
