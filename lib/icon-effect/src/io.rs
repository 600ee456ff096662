//! Image loading and saving

use crate::{Error, Result};
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult, RgbaImage};
use std::path::Path;

/// Format of every knocked-out icon. PNG keeps the alpha channel.
pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

/// Decode the image at `path` into RGBA8.
///
/// The format is sniffed from the file content first and the extension only
/// as a fallback. Images without an alpha channel come back fully opaque.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = read_image(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgba8())
}

/// Encode `image` to `path` as `format`. Parent directories are not created.
pub fn encode<P: AsRef<Path>>(image: &RgbaImage, path: P, format: ImageFormat) -> Result<()> {
    let path = path.as_ref();

    image
        .save_with_format(path, format)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "Encoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        format
    );

    Ok(())
}

fn read_image(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}
