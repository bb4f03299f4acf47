use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::provider::{VimeoConfig, YtdlpConfig};
use crate::uploader::DriveConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub staging: StagingConfig,
    #[serde(default)]
    pub ytdlp: YtdlpConfig,
    pub vimeo: VimeoConfig,
    pub drive: DriveConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    3000
}

/// Transient staging storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StagingConfig {
    /// Directory that holds per-run staging subdirectories
    #[serde(default = "default_staging_root")]
    pub root: PathBuf,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            root: default_staging_root(),
        }
    }
}

fn default_staging_root() -> PathBuf {
    PathBuf::from("downloads")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub staging: StagingConfig,
    pub ytdlp: SanitizedYtdlpConfig,
    pub vimeo: SanitizedVimeoConfig,
    pub drive: SanitizedDriveConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedYtdlpConfig {
    pub binary: String,
}

/// Sanitized Vimeo config (access token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedVimeoConfig {
    pub access_token_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Sanitized Drive config (access token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedDriveConfig {
    pub access_token_configured: bool,
    pub youtube_folder_id: String,
    pub vimeo_folder_id: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            staging: config.staging.clone(),
            ytdlp: SanitizedYtdlpConfig {
                binary: config.ytdlp.binary.clone(),
            },
            vimeo: SanitizedVimeoConfig {
                access_token_configured: !config.vimeo.access_token.is_empty(),
                api_url: config.vimeo.api_url.clone(),
            },
            drive: SanitizedDriveConfig {
                access_token_configured: !config.drive.access_token.is_empty(),
                youtube_folder_id: config.drive.youtube_folder_id.clone(),
                vimeo_folder_id: config.drive.vimeo_folder_id.clone(),
            },
        }
    }
}
