//! Transient staging storage bridging a download-in and upload-out pair.
//!
//! Every pipeline run gets its own uniquely-named subdirectory under the
//! staging root, so concurrent runs can never collide on a filename and no
//! run ever has to inspect another run's files.

mod area;
mod types;

pub use area::{RunDir, StagingArea};
pub use types::{SourceKind, StagedFile};
