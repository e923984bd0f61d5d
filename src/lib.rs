//! stitch2png - embroidery pattern thumbnailer
//!
//! Turns a decoded stitch sequence into a small raster preview image.
//!
//! ## Pipeline
//!
//! - **Bounds**: extent of the stitched area, ignoring a leading run of travel moves
//! - **Layout**: uniform scale and canvas size for the requested thumbnail size
//! - **Segmentation**: stitches grouped into coloured polylines at STOP/END boundaries
//! - **Rasterization**: antialiased round-capped strokes on a white canvas
//!
//! ## Example
//!
//! ```rust,no_run
//! use stitch2png::{convert, ConversionOptions};
//! use std::path::Path;
//!
//! let options = ConversionOptions { size: 128 };
//!
//! convert(Path::new("design.json"), Path::new("design.png"), &options)
//!     .expect("Conversion failed");
//! ```

pub mod bounds;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod pattern;
pub mod rasterizer;
pub mod reader;
pub mod segmenter;

pub use bounds::BoundingBox;
pub use encoder::write_image;
pub use error::{Result, ThumbnailError};
pub use layout::{Layout, DEFAULT_SIZE, PADDING};
pub use pattern::{Pattern, Point, Stitch, StitchFlag, StitchFlags, Thread};
pub use rasterizer::{rasterize, to_rgba_image, STROKE_WIDTH};
pub use reader::{parse_pattern_json, read_pattern, PatternFormat};
pub use segmenter::{segment, PathSegment};

use image::RgbaImage;
use std::path::Path;

/// Options for pattern to thumbnail conversion
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Length of the longer side of the stitched area, in pixels (default: 256)
    pub size: i64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

/// Render a pattern into an opaque RGBA thumbnail.
///
/// The pattern is only borrowed; calling this twice with the same inputs
/// yields identical pixels.
pub fn render_pattern(pattern: &Pattern, size: i64) -> Result<RgbaImage> {
    let bounds = BoundingBox::from_stitches(&pattern.stitches)?;
    // Segments are drawn with y negated, so the layout has to frame that
    let layout = Layout::plan(&bounds.inverted_y(), size)?;
    let segments = segment(pattern);
    let pixmap = rasterize(&layout, &segments)?;
    to_rgba_image(&pixmap)
}

/// Convert a pattern file to a thumbnail image
///
/// # Arguments
///
/// * `input_path` - Path to the pattern file
/// * `output_path` - Path to the image file; its extension picks the format
/// * `options` - Conversion options
///
/// Nothing is written to `output_path` unless every stage succeeds.
pub fn convert(input_path: &Path, output_path: &Path, options: &ConversionOptions) -> Result<()> {
    let pattern = read_pattern(input_path)?;
    let image = render_pattern(&pattern, options.size)?;
    write_image(&image, output_path)?;

    log::info!(
        "rendered {} ({} stitches) to {} ({}x{})",
        input_path.display(),
        pattern.stitches.len(),
        output_path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
