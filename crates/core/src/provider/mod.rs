//! Source providers: resolve a source URL into a locally staged media file.
//!
//! Two implementations exist behind the [`SourceProvider`] trait:
//!
//! - [`YtdlpProvider`] shells out to yt-dlp for any site the extractor
//!   understands, writing directly into a run-scoped staging directory.
//! - [`VimeoProvider`] drives the Vimeo API: metadata lookup, rendition
//!   selection, then a streaming download into staging.

mod error;
mod traits;
mod vimeo;
mod ytdlp;

pub use error::ProviderError;
pub use traits::SourceProvider;
pub use vimeo::{VimeoConfig, VimeoProvider};
pub use ytdlp::{YtdlpConfig, YtdlpProvider};
