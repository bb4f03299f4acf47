pub mod config;
pub mod provider;
pub mod relay;
pub mod rendition;
pub mod staging;
pub mod testing;
pub mod uploader;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig, StagingConfig,
};
pub use provider::{
    ProviderError, SourceProvider, VimeoConfig, VimeoProvider, YtdlpConfig, YtdlpProvider,
};
pub use relay::{RelayError, RelayPipeline};
pub use staging::{RunDir, SourceKind, StagedFile, StagingArea};
pub use uploader::{DriveConfig, DriveStore, RemoteStore, StoredObject, UploadError};
