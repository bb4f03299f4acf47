//! Remote uploader: streams staged files into the remote content store.

mod drive;
mod error;
mod traits;
mod types;

pub use drive::{DriveConfig, DriveStore};
pub use error::UploadError;
pub use traits::RemoteStore;
pub use types::StoredObject;
