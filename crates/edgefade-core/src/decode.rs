//! Image decoding boundary.
//!
//! Turns encoded bytes (PNG or JPEG) into the RGBA [`FadeImage`] the engine
//! operates on. Sources without an alpha channel come out fully opaque,
//! which makes alpha combination a no-op for them.

use std::io::Cursor;

use image::ImageReader;

use crate::image_buf::FadeImage;
use crate::FadeError;

/// Decode an image from bytes, guessing the format from its signature.
///
/// # Errors
///
/// Returns `FadeError::DecodeFailed` if the bytes are not a supported,
/// well-formed image.
pub fn decode_image(bytes: &[u8]) -> Result<FadeImage, FadeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FadeError::DecodeFailed(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| FadeError::DecodeFailed(e.to_string()))?;

    Ok(FadeImage::from_rgba_image(img.into_rgba8()))
}
