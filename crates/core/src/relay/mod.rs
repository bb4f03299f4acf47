//! Relay pipeline: resolve → stage → upload → cleanup for one request.

mod error;
mod pipeline;

pub use error::RelayError;
pub use pipeline::RelayPipeline;
