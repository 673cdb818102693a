//! RGBA pixel buffer type used as the engine's input and output.
//!
//! The engine only ever reads dimensions and the alpha plane and writes a
//! fresh alpha plane; color bytes pass through untouched. RGB sources are
//! promoted to RGBA with a fully opaque alpha on construction.

use crate::mask::AlphaMask;
use crate::FadeError;

/// An image with interleaved RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl FadeImage {
    /// Create a new FadeImage from RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns `FadeError::EmptyImage` if either dimension is zero, or
    /// `FadeError::BufferSizeMismatch` if the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FadeError> {
        if width == 0 || height == 0 {
            return Err(FadeError::EmptyImage { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(FadeError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a FadeImage from RGB pixel data, filling alpha with 255.
    ///
    /// # Errors
    ///
    /// Returns `FadeError::EmptyImage` or `FadeError::BufferSizeMismatch`
    /// on invalid geometry, as with [`FadeImage::from_rgba`].
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FadeError> {
        if width == 0 || height == 0 {
            return Err(FadeError::EmptyImage { width, height });
        }
        let expected = (width as usize) * (height as usize) * 3;
        if pixels.len() != expected {
            return Err(FadeError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for rgb in pixels.chunks_exact(3) {
            rgba.extend_from_slice(rgb);
            rgba.push(255);
        }
        Ok(Self {
            width,
            height,
            pixels: rgba,
        })
    }

    /// Create a FadeImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Extract the current alpha plane as a mask.
    pub fn alpha_plane(&self) -> AlphaMask {
        let data = self.pixels.chunks_exact(4).map(|px| px[3]).collect();
        AlphaMask::from_raw(self.width, self.height, data)
    }

    /// Return a copy of this image with its alpha channel taken from `mask`.
    ///
    /// Color bytes are byte-identical to the source. The mask must have the
    /// same dimensions as the image.
    pub fn with_alpha(&self, mask: &AlphaMask) -> Result<Self, FadeError> {
        let expected = self.pixel_count();
        if mask.width != self.width || mask.height != self.height {
            return Err(FadeError::BufferSizeMismatch {
                expected,
                actual: (mask.width as usize) * (mask.height as usize),
            });
        }
        let mut pixels = self.pixels.clone();
        for (px, &a) in pixels.chunks_exact_mut(4).zip(mask.data.iter()) {
            px[3] = a;
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_valid() {
        let img = FadeImage::from_rgba(2, 2, vec![0u8; 16]).unwrap();
        assert_eq!(img.pixel_count(), 4);
    }

    #[test]
    fn test_from_rgba_zero_dimension() {
        let result = FadeImage::from_rgba(0, 10, vec![]);
        assert!(matches!(
            result,
            Err(FadeError::EmptyImage {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_from_rgba_wrong_length() {
        let result = FadeImage::from_rgba(2, 2, vec![0u8; 15]);
        assert!(matches!(
            result,
            Err(FadeError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_from_rgb_gains_opaque_alpha() {
        let img = FadeImage::from_rgb(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
        assert_eq!(img.pixels, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_alpha_plane_extraction() {
        let img = FadeImage::from_rgba(2, 1, vec![1, 2, 3, 100, 4, 5, 6, 200]).unwrap();
        let alpha = img.alpha_plane();
        assert_eq!(alpha.data, vec![100, 200]);
    }

    #[test]
    fn test_with_alpha_preserves_color() {
        let img = FadeImage::from_rgba(2, 1, vec![1, 2, 3, 100, 4, 5, 6, 200]).unwrap();
        let mask = AlphaMask::from_raw(2, 1, vec![7, 8]);

        let out = img.with_alpha(&mask).unwrap();
        assert_eq!(out.pixels, vec![1, 2, 3, 7, 4, 5, 6, 8]);
        // Source untouched
        assert_eq!(img.pixels[3], 100);
    }

    #[test]
    fn test_with_alpha_dimension_mismatch() {
        let img = FadeImage::from_rgba(2, 1, vec![0u8; 8]).unwrap();
        let mask = AlphaMask::opaque(3, 1);
        assert!(img.with_alpha(&mask).is_err());
    }

    #[test]
    fn test_rgba_image_roundtrip() {
        let img = FadeImage::from_rgba(2, 2, (0u8..16).collect()).unwrap();
        let converted = img.to_rgba_image().unwrap();
        let back = FadeImage::from_rgba_image(converted);
        assert_eq!(back, img);
    }
}
