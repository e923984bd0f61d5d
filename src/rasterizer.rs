use crate::error::{Result, ThumbnailError};
use crate::layout::Layout;
use crate::segmenter::PathSegment;
use image::RgbaImage;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke};

/// Thread width in pattern-space units.
pub const STROKE_WIDTH: f32 = 0.35;

/// Strokes every segment, in order, onto a white canvas sized by `layout`.
///
/// The layout transform also scales the stroke, so the drawn width is
/// `STROKE_WIDTH * layout.scale` pixels.
pub fn rasterize(layout: &Layout, segments: &[PathSegment]) -> Result<Pixmap> {
    let mut pixmap =
        Pixmap::new(layout.canvas_width, layout.canvas_height).ok_or(ThumbnailError::Raster {
            width: layout.canvas_width,
            height: layout.canvas_height,
        })?;
    pixmap.fill(Color::WHITE);

    let transform = layout.transform();
    let stroke = Stroke {
        width: STROKE_WIDTH,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    for segment in segments {
        let Some(path) = build_path(segment) else {
            continue;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(segment.color.r, segment.color.g, segment.color.b, 255);
        paint.anti_alias = true;
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    Ok(pixmap)
}

fn build_path(segment: &PathSegment) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for subpath in &segment.subpaths {
        let Some((first, rest)) = subpath.split_first() else {
            continue;
        };
        builder.move_to(first.x as f32, first.y as f32);
        for point in rest {
            builder.line_to(point.x as f32, point.y as f32);
        }
    }
    builder.finish()
}

/// Converts the premultiplied canvas into a straight-alpha image.
pub fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(ThumbnailError::Raster {
        width: pixmap.width(),
        height: pixmap.height(),
    })
}
