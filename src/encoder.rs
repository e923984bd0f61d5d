use crate::error::{Result, ThumbnailError};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Writes `image` to `path` in the format named by its extension.
///
/// Encoding happens in memory and the bytes land in a sibling file that is
/// renamed over `path`, so a failure never leaves a partial image behind.
pub fn write_image(image: &RgbaImage, path: &Path) -> Result<()> {
    let encode_error = |source: image::ImageError| ThumbnailError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(path).map_err(encode_error)?;
    let bytes = encode(image, format).map_err(encode_error)?;

    let partial = partial_path(path);
    let written = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(encode_error(image::ImageError::IoError(e)));
    }

    log::debug!("wrote {:?} image to {}", format, path.display());
    Ok(())
}

/// Hidden file next to `path` that holds the image until it is complete.
fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.partial", name))
}

pub fn encode(image: &RgbaImage, format: ImageFormat) -> image::ImageResult<Vec<u8>> {
    let dynamic = DynamicImage::ImageRgba8(image.clone());
    // JPEG has no alpha channel; the canvas is opaque anyway
    let dynamic = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(dynamic.to_rgb8()),
        _ => dynamic,
    };

    let mut buffer = Cursor::new(Vec::new());
    dynamic.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}
