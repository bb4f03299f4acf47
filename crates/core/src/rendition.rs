//! Rendition selection for multi-quality sources.
//!
//! Vimeo reports every downloadable encode of a video; the relay only ever
//! takes the best one at or below 720 pixels wide.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest rendition the relay will download.
pub const MAX_WIDTH: u32 = 720;

/// One downloadable encode of a source video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    /// Frame width in pixels.
    pub width: u32,
    /// Provider-reported quality label (e.g. "hd", "sd").
    pub quality: String,
    /// Provider-reported MIME type of the encode.
    pub mime_type: String,
    /// Direct download URL.
    pub link: String,
}

/// No rendition satisfied the width cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no downloadable rendition at or below {MAX_WIDTH}px width")]
pub struct NoRenditionAvailable;

/// Picks the rendition to download: the widest one with `width <= 720`.
///
/// Ties resolve to the first such entry in input order, so selection is
/// stable across identical inputs.
pub fn select(renditions: &[Rendition]) -> Result<&Rendition, NoRenditionAvailable> {
    let mut best: Option<&Rendition> = None;
    for rendition in renditions {
        if rendition.width > MAX_WIDTH {
            continue;
        }
        match best {
            Some(current) if rendition.width <= current.width => {}
            _ => best = Some(rendition),
        }
    }
    best.ok_or(NoRenditionAvailable)
}
