use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a thumbnail conversion.
///
/// Each message names the stage that failed so the binary can print it as a
/// one-line diagnostic.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("decode: failed to read pattern {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("bounds: pattern contains no stitches")]
    EmptyPattern,

    #[error("bounds: pattern contains only jump/trim stitches")]
    NoStitching,

    #[error("bounds: invalid pattern dimensions {width}x{height}")]
    DegenerateDimensions { width: f64, height: f64 },

    #[error("layout: thumbnail size must be positive and fit a canvas, got {0}")]
    InvalidSize(i64),

    #[error("raster: cannot allocate a {width}x{height} canvas")]
    Raster { width: u32, height: u32 },

    #[error("encode: failed to write image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ThumbnailError>;
