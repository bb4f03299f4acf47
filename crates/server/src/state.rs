use std::sync::Arc;
use vidrelay_core::{Config, RelayPipeline, SanitizedConfig, SourceProvider};

/// Shared application state
pub struct AppState {
    config: Config,
    youtube_provider: Arc<dyn SourceProvider>,
    vimeo_provider: Arc<dyn SourceProvider>,
    pipeline: RelayPipeline,
}

impl AppState {
    pub fn new(
        config: Config,
        youtube_provider: Arc<dyn SourceProvider>,
        vimeo_provider: Arc<dyn SourceProvider>,
        pipeline: RelayPipeline,
    ) -> Self {
        Self {
            config,
            youtube_provider,
            vimeo_provider,
            pipeline,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn youtube_provider(&self) -> &dyn SourceProvider {
        self.youtube_provider.as_ref()
    }

    pub fn vimeo_provider(&self) -> &dyn SourceProvider {
        self.vimeo_provider.as_ref()
    }

    pub fn pipeline(&self) -> &RelayPipeline {
        &self.pipeline
    }

    /// Drive folder receiving yt-dlp downloads.
    pub fn youtube_folder_id(&self) -> &str {
        &self.config.drive.youtube_folder_id
    }

    /// Drive folder receiving Vimeo downloads.
    pub fn vimeo_folder_id(&self) -> &str {
        &self.config.drive.vimeo_folder_id
    }
}
