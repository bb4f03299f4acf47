//! Download-and-relay API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use vidrelay_core::{RelayError, SourceProvider, StoredObject};

use crate::state::AppState;

const SUCCESS_MESSAGE: &str = "File downloaded and uploaded to Google Drive successfully";

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub message: String,
    #[serde(rename = "driveFile")]
    pub drive_file: StoredObject,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/contentDashboard/youtube-download?url=...
///
/// Downloads any yt-dlp-supported URL and relays it to Drive.
pub async fn youtube_download(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DownloadParams>,
) -> Result<Json<DownloadResponse>, impl IntoResponse> {
    let folder_id = state.youtube_folder_id().to_string();
    run_download(&state, state.youtube_provider(), params, &folder_id).await
}

/// GET /v1/contentDashboard/vimeo-download?url=...
///
/// Downloads a Vimeo video through its API and relays it to Drive.
pub async fn vimeo_download(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DownloadParams>,
) -> Result<Json<DownloadResponse>, impl IntoResponse> {
    let folder_id = state.vimeo_folder_id().to_string();
    run_download(&state, state.vimeo_provider(), params, &folder_id).await
}

async fn run_download(
    state: &AppState,
    provider: &dyn SourceProvider,
    params: DownloadParams,
    folder_id: &str,
) -> Result<Json<DownloadResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = match params.url {
        Some(url) if !url.is_empty() => url,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing url query parameter".to_string(),
                    details: None,
                }),
            ))
        }
    };

    match state.pipeline().run(provider, &url, folder_id).await {
        Ok(stored) => Ok(Json(DownloadResponse {
            message: SUCCESS_MESSAGE.to_string(),
            drive_file: stored,
        })),
        Err(e) => {
            error!("Download via '{}' failed: {}", provider.name(), e);
            Err((error_status(&e), Json(error_body(&e))))
        }
    }
}

fn error_status(e: &RelayError) -> StatusCode {
    StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn error_body(e: &RelayError) -> ErrorResponse {
    ErrorResponse {
        error: e.kind().to_string(),
        details: Some(e.to_string()),
    }
}
