use crate::error::{Result, ThumbnailError};
use crate::pattern::Stitch;

/// Extent of the stitched area in pattern-space units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Computes the extent of the stitched area.
    ///
    /// A leading run of jump/trim stitches is ignored so that a parked
    /// needle position does not stretch the box. Once the first real stitch
    /// has been seen, every stitch counts, travel moves included.
    pub fn from_stitches(stitches: &[Stitch]) -> Result<Self> {
        if stitches.is_empty() {
            return Err(ThumbnailError::EmptyPattern);
        }

        let bounds = stitches
            .iter()
            .skip_while(|stitch| stitch.flags.is_travel())
            .fold(None, |bounds: Option<BoundingBox>, stitch| match bounds {
                None => Some(BoundingBox {
                    min_x: stitch.x,
                    max_x: stitch.x,
                    min_y: stitch.y,
                    max_y: stitch.y,
                }),
                Some(b) => Some(BoundingBox {
                    min_x: b.min_x.min(stitch.x),
                    max_x: b.max_x.max(stitch.x),
                    min_y: b.min_y.min(stitch.y),
                    max_y: b.max_y.max(stitch.y),
                }),
            })
            .ok_or(ThumbnailError::NoStitching)?;

        let (width, height) = (bounds.width(), bounds.height());
        // Negated comparison so NaN coordinates are rejected as well
        if !(width > 0.0 && height > 0.0) {
            return Err(ThumbnailError::DegenerateDimensions { width, height });
        }

        log::debug!(
            "bounds: x {}..{}, y {}..{} ({}x{})",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            width,
            height
        );
        Ok(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The same box seen in the y-negated frame the segmenter draws in.
    pub fn inverted_y(&self) -> Self {
        Self {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: -self.max_y,
            max_y: -self.min_y,
        }
    }
}
