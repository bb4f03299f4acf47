//! Relay pipeline lifecycle integration tests.
//!
//! These tests verify the cleanup guarantees of the pipeline with mock
//! provider and store:
//! - Staged file removed after a successful upload
//! - Staged file removed after a failed upload
//! - No staging left behind when the provider fails before staging
//! - Concurrent runs stage into distinct directories

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use vidrelay_core::{
    provider::ProviderError,
    testing::{MockProvider, MockStore, ResolveGate},
    RelayPipeline, RemoteStore, StagingArea,
};

/// Test helper wiring the pipeline to mocks over a temp staging root.
struct TestHarness {
    pipeline: Arc<RelayPipeline>,
    provider: Arc<MockProvider>,
    store: Arc<MockStore>,
    staging_root: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let staging_root = TempDir::new().expect("Failed to create temp dir");
        let provider = Arc::new(MockProvider::new());
        let store = Arc::new(MockStore::new());
        let pipeline = Arc::new(RelayPipeline::new(
            StagingArea::new(staging_root.path()),
            Arc::clone(&store) as Arc<dyn RemoteStore>,
        ));
        Self {
            pipeline,
            provider,
            store,
            staging_root,
        }
    }

    /// Entries currently under the staging root.
    fn staging_entries(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.staging_root.path()) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[tokio::test]
async fn test_successful_run_removes_staged_file() {
    let harness = TestHarness::new();
    harness.provider.set_file_name("clip.mp4").await;

    let stored = harness
        .pipeline
        .run(harness.provider.as_ref(), "https://example.com/v", "folder-a")
        .await
        .expect("Run should succeed");

    assert_eq!(stored.name, "clip.mp4");
    assert!(stored.web_view_link.is_some());

    // The upload saw the file on disk, and cleanup ran before the result
    // reached us.
    let uploads = harness.store.recorded_uploads().await;
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].file_existed);
    assert_eq!(uploads[0].folder_id, "folder-a");
    assert!(!uploads[0].path.exists());

    assert!(harness.staging_entries().is_empty());
}

#[tokio::test]
async fn test_failed_upload_still_removes_staged_file() {
    let harness = TestHarness::new();
    harness.store.set_fail_uploads(true);

    let result = harness
        .pipeline
        .run(harness.provider.as_ref(), "https://example.com/v", "folder-a")
        .await;

    let err = result.err().expect("Run should fail");
    assert_eq!(err.kind(), "UploadFailed");
    assert_eq!(err.status_code(), 500);

    let uploads = harness.store.recorded_uploads().await;
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].file_existed);
    assert!(!uploads[0].path.exists());

    assert!(harness.staging_entries().is_empty());
}

#[tokio::test]
async fn test_provider_failure_before_staging_leaves_nothing() {
    let harness = TestHarness::new();
    harness
        .provider
        .set_next_error(ProviderError::InvalidUrl(
            "https://example.com/not-a-video".to_string(),
        ))
        .await;

    let result = harness
        .pipeline
        .run(
            harness.provider.as_ref(),
            "https://example.com/not-a-video",
            "folder-a",
        )
        .await;

    let err = result.err().expect("Run should fail");
    assert_eq!(err.kind(), "InvalidUrl");
    assert_eq!(err.status_code(), 400);

    // Nothing was staged and nothing reached the store.
    assert_eq!(harness.store.upload_count().await, 0);
    assert!(harness.staging_entries().is_empty());
}

#[tokio::test]
async fn test_concurrent_runs_stage_into_distinct_directories() {
    const RUNS: usize = 4;

    let harness = TestHarness::new();
    let gate = ResolveGate::for_runs(RUNS);
    harness.provider.set_gate(gate.clone()).await;

    let mut handles = Vec::new();
    for i in 0..RUNS {
        let pipeline = Arc::clone(&harness.pipeline);
        let provider = Arc::clone(&harness.provider);
        handles.push(tokio::spawn(async move {
            pipeline
                .run(
                    provider.as_ref(),
                    &format!("https://example.com/v{}", i),
                    "folder-a",
                )
                .await
        }));
    }

    // All runs have staged their file and are paused: every staged path
    // must exist simultaneously under its own run directory.
    gate.staged.wait().await;

    let staged = harness.provider.staged_paths().await;
    assert_eq!(staged.len(), RUNS);
    for path in &staged {
        assert!(path.exists(), "{} should exist while runs are paused", path.display());
    }

    let mut run_dirs: Vec<PathBuf> = staged
        .iter()
        .filter_map(|p| p.parent().map(PathBuf::from))
        .collect();
    run_dirs.sort();
    run_dirs.dedup();
    assert_eq!(run_dirs.len(), RUNS, "Each run should get its own directory");

    gate.resume.wait().await;

    for handle in handles {
        let stored = handle
            .await
            .expect("Task should not panic")
            .expect("Run should succeed");
        assert!(!stored.id.is_empty());
    }

    assert_eq!(harness.store.upload_count().await, RUNS);
    assert!(harness.staging_entries().is_empty());
}
