use crate::bounds::BoundingBox;
use crate::error::{Result, ThumbnailError};

/// Margin in pixels around the scaled pattern.
pub const PADDING: u32 = 10;

/// Thumbnail size used when none is requested.
pub const DEFAULT_SIZE: i64 = 256;

/// Scale factor, canvas size and translation for one thumbnail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub scale: f64,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Layout {
    /// Fits the longer side of `bounds` into `size` pixels and adds
    /// [`PADDING`] on every side.
    pub fn plan(bounds: &BoundingBox, size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(ThumbnailError::InvalidSize(size));
        }

        let width = bounds.width();
        let height = bounds.height();
        let scale = size as f64 / width.max(height);
        let padding = f64::from(PADDING);

        // Sizes whose canvas would not fit a u32 are rejected too
        let too_large = || ThumbnailError::InvalidSize(size);
        let canvas_width = padded_extent(width * scale).ok_or_else(too_large)?;
        let canvas_height = padded_extent(height * scale).ok_or_else(too_large)?;

        let layout = Layout {
            scale,
            canvas_width,
            canvas_height,
            translate_x: padding - bounds.min_x * scale,
            translate_y: padding - bounds.min_y * scale,
        };
        log::debug!(
            "layout: scale {}, canvas {}x{}",
            layout.scale,
            layout.canvas_width,
            layout.canvas_height
        );
        Ok(layout)
    }

    /// Maps a pattern-space point onto the canvas.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale + self.translate_x,
            y * self.scale + self.translate_y,
        )
    }

    /// Translate-then-scale transform for drawing in pattern space, the
    /// same mapping as [`Layout::to_canvas`].
    pub fn transform(&self) -> tiny_skia::Transform {
        let (tx, ty) = self.to_canvas(0.0, 0.0);
        let scale = self.scale as f32;
        tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx as f32, ty as f32)
    }
}

/// Rounded pixel extent plus padding on both sides, `None` if it does not fit a `u32`.
fn padded_extent(scaled: f64) -> Option<u32> {
    let rounded = scaled.round();
    if !(0.0..=f64::from(u32::MAX)).contains(&rounded) {
        return None;
    }
    u32::try_from(rounded as u64).ok()?.checked_add(2 * PADDING)
}
