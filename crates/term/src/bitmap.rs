//! Bitmap decoding: turns an image file into a [`Canvas`].

use std::path::{Path, PathBuf};

use tui_pixels_types::Rgba;

use crate::canvas::Canvas;

/// Error raised when a demo's source picture cannot be decoded.
///
/// Always fatal at startup; the mosaic demo has nothing to show without its
/// source image.
#[derive(Debug, thiserror::Error)]
#[error("decode bitmap {}: {}", .path.display(), .source)]
pub struct BitmapError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Decode an image file into an RGBA canvas.
///
/// Any format the `image` crate understands is accepted; pixels are
/// converted to 8-bit RGBA.
pub fn load_bitmap(path: impl AsRef<Path>) -> Result<Canvas, BitmapError> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|source| BitmapError {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| Rgba::new(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();
    Ok(Canvas::from_pixels(width, height, pixels))
}
