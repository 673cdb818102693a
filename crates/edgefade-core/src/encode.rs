//! Image encoding boundary.
//!
//! PNG is the output format because it preserves the alpha channel the
//! engine computes; encoding to an alpha-less format would discard the
//! whole point of the fade.

use std::io::Cursor;

use crate::image_buf::FadeImage;
use crate::FadeError;

/// Encode an image to PNG bytes.
///
/// # Errors
///
/// Returns `FadeError::BufferSizeMismatch` if the image's buffer does not
/// match its dimensions, or `FadeError::EncodeFailed` if PNG encoding fails.
pub fn encode_png(image: &FadeImage) -> Result<Vec<u8>, FadeError> {
    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| FadeError::BufferSizeMismatch {
            expected: image.pixel_count() * 4,
            actual: image.pixels.len(),
        })?;

    let mut bytes = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| FadeError::EncodeFailed(e.to_string()))?;
    Ok(bytes)
}
