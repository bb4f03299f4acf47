//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock dependencies injected, enabling comprehensive E2E testing
//! without external infrastructure.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use vidrelay_core::{
    testing::{MockProvider, MockStore},
    Config, DriveConfig, RelayPipeline, RemoteStore, ServerConfig, StagingArea, StagingConfig,
    VimeoConfig, YtdlpConfig,
};

pub const YOUTUBE_FOLDER: &str = "yt-folder";
pub const VIMEO_FOLDER: &str = "vm-folder";

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Source resolution (MockProvider, one per route)
/// - Remote storage (MockStore)
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_download() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture
///         .get("/v1/contentDashboard/youtube-download?url=https://example.com/v")
///         .await;
///
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock provider behind the youtube-download route
    pub youtube_provider: Arc<MockProvider>,
    /// Mock provider behind the vimeo-download route
    pub vimeo_provider: Arc<MockProvider>,
    /// Mock remote store - control and inspect uploads
    pub store: Arc<MockStore>,
    /// Temporary directory holding the staging root
    pub temp_dir: TempDir,
    /// Staging root the pipeline allocates under
    pub staging_root: PathBuf,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let staging_root = temp_dir.path().join("staging");

        // Create mocks
        let youtube_provider = Arc::new(MockProvider::new());
        let vimeo_provider = Arc::new(MockProvider::new());
        let store = Arc::new(MockStore::new());

        // Create config
        let config = Config {
            server: ServerConfig {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            staging: StagingConfig {
                root: staging_root.clone(),
            },
            ytdlp: YtdlpConfig::default(),
            vimeo: VimeoConfig {
                access_token: "test-vimeo-token".to_string(),
                api_url: None,
            },
            drive: DriveConfig {
                access_token: "test-drive-token".to_string(),
                upload_url: None,
                youtube_folder_id: YOUTUBE_FOLDER.to_string(),
                vimeo_folder_id: VIMEO_FOLDER.to_string(),
            },
        };

        let pipeline = RelayPipeline::new(
            StagingArea::new(&staging_root),
            Arc::clone(&store) as Arc<dyn RemoteStore>,
        );

        // Create app state with mocks
        let state = Arc::new(vidrelay_server::state::AppState::new(
            config,
            Arc::clone(&youtube_provider) as Arc<dyn vidrelay_core::SourceProvider>,
            Arc::clone(&vimeo_provider) as Arc<dyn vidrelay_core::SourceProvider>,
            pipeline,
        ));

        // Create router
        let router = vidrelay_server::api::create_router(state);

        Self {
            router,
            youtube_provider,
            vimeo_provider,
            store,
            temp_dir,
            staging_root,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Entries currently under the staging root.
    pub fn staging_entries(&self) -> usize {
        std::fs::read_dir(&self.staging_root)
            .map(|d| d.count())
            .unwrap_or(0)
    }
}
