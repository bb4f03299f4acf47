//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external service traits,
//! allowing comprehensive E2E testing without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use vidrelay_core::testing::{MockProvider, MockStore};
//!
//! let provider = MockProvider::new();
//! let store = MockStore::new();
//!
//! // Configure mock behavior
//! provider.set_file_name("clip.mp4").await;
//! store.set_fail_uploads(true);
//!
//! // Use in AppState...
//! ```

mod mock_provider;
mod mock_store;

pub use mock_provider::{MockProvider, ResolveGate};
pub use mock_store::{MockStore, RecordedUpload};
