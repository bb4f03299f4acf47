//! Mock source provider for testing.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Barrier, Mutex, RwLock};

use crate::provider::{ProviderError, SourceProvider};
use crate::staging::{SourceKind, StagedFile, StagingArea};

/// Barrier pair that lets a test freeze runs while their files are staged.
///
/// Each resolving run waits on `staged` once its file is on disk, then on
/// `resume` before returning. A test that also waits on both (with a
/// barrier size of runs + 1) gets a window in which every run's staged
/// file exists simultaneously.
#[derive(Clone)]
pub struct ResolveGate {
    pub staged: Arc<Barrier>,
    pub resume: Arc<Barrier>,
}

impl ResolveGate {
    /// Gate sized for `runs` concurrent resolutions plus the test itself.
    pub fn for_runs(runs: usize) -> Self {
        Self {
            staged: Arc::new(Barrier::new(runs + 1)),
            resume: Arc::new(Barrier::new(runs + 1)),
        }
    }
}

/// Mock implementation of the SourceProvider trait.
///
/// Provides controllable behavior for testing:
/// - Stage a configurable payload under a configurable file name
/// - Fail the next resolution with an injected error
/// - Record every staged path for assertions
/// - Optionally synchronize concurrent resolutions through a [`ResolveGate`]
pub struct MockProvider {
    payload: Arc<RwLock<Vec<u8>>>,
    file_name: Arc<RwLock<String>>,
    next_error: Arc<Mutex<Option<ProviderError>>>,
    staged_paths: Arc<Mutex<Vec<PathBuf>>>,
    gate: Arc<RwLock<Option<ResolveGate>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Creates a mock provider staging a small default payload.
    pub fn new() -> Self {
        Self {
            payload: Arc::new(RwLock::new(b"mock video payload".to_vec())),
            file_name: Arc::new(RwLock::new("mock-video.mp4".to_string())),
            next_error: Arc::new(Mutex::new(None)),
            staged_paths: Arc::new(Mutex::new(Vec::new())),
            gate: Arc::new(RwLock::new(None)),
        }
    }

    /// Sets the bytes staged by subsequent resolutions.
    pub async fn set_payload(&self, payload: Vec<u8>) {
        *self.payload.write().await = payload;
    }

    /// Sets the staged file name (also used as the display name).
    pub async fn set_file_name(&self, name: &str) {
        *self.file_name.write().await = name.to_string();
    }

    /// Configures the next resolution to fail with the given error.
    ///
    /// The error fires before any staging happens, like a provider failing
    /// on URL parsing or metadata lookup.
    pub async fn set_next_error(&self, error: ProviderError) {
        *self.next_error.lock().await = Some(error);
    }

    /// Installs a gate for synchronizing concurrent resolutions.
    pub async fn set_gate(&self, gate: ResolveGate) {
        *self.gate.write().await = Some(gate);
    }

    /// Every path staged so far, in resolution order.
    pub async fn staged_paths(&self) -> Vec<PathBuf> {
        self.staged_paths.lock().await.clone()
    }

    /// Number of successful resolutions.
    pub async fn resolve_count(&self) -> usize {
        self.staged_paths.lock().await.len()
    }
}

#[async_trait]
impl SourceProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn resolve(
        &self,
        _source_url: &str,
        staging: &StagingArea,
    ) -> Result<StagedFile, ProviderError> {
        if let Some(err) = self.next_error.lock().await.take() {
            return Err(err);
        }

        let run = staging.allocate().await?;
        let file_name = self.file_name.read().await.clone();
        let path = run.file_path(&file_name);
        tokio::fs::write(&path, self.payload.read().await.as_slice()).await?;

        self.staged_paths.lock().await.push(path.clone());

        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.staged.wait().await;
            gate.resume.wait().await;
        }

        Ok(StagedFile::new(
            run,
            path,
            file_name,
            "video/mp4",
            SourceKind::Ytdlp,
        ))
    }
}
