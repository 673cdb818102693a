//! Alpha mask construction for edge fading
//!
//! This module builds the single-channel opacity masks that the engine
//! composites onto an image's alpha channel.
//!
//! ## Mask Shapes
//!
//! - **Square**: independent linear gradient bands along each selected edge
//! - **Rounded**: a distance field around an inner safe zone, with
//!   quarter-circle falloff at the corners
//!
//! ## Algorithm
//!
//! Masks hold u8 values from 0 (fully transparent) to 255 (fully opaque).
//! Gradients are shaped by a power curve applied to the normalized distance,
//! and finished masks can be softened with a separable Gaussian blur.

pub mod blur;
pub mod rounded;
pub mod square;

pub use blur::gaussian_blur;
pub use rounded::rounded_mask;
pub use square::apply_square_fade;

/// A W×H single-channel opacity buffer.
///
/// 0 = fully transparent, 255 = fully opaque. Row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Opacity values, one byte per pixel.
    pub data: Vec<u8>,
}

impl AlphaMask {
    /// Create a fully opaque mask (all 255).
    pub fn opaque(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255; (width as usize) * (height as usize)],
        }
    }

    /// Create a mask from raw single-channel data.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "Mask buffer size mismatch"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Opacity at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set opacity at (x, y).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Multiply this mask with another, pixel-wise.
    ///
    /// Each output value is `round(a * b / 255)`. The result is never more
    /// opaque than either input, which is what makes this the right way to
    /// combine a fade mask with an image's existing alpha.
    pub fn multiply(&self, other: &AlphaMask) -> AlphaMask {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| (((a as u32) * (b as u32) + 127) / 255) as u8)
            .collect();
        AlphaMask {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Convert a normalized distance (0.0 to 1.0) to an opacity value.
///
/// Applies the fade curve exponent and scales to 0-255 with rounding.
/// At 0.0 the result is 0 (transparent); at 1.0 it is 255 (opaque).
/// A curve of 1.0 is linear; larger exponents push transparency toward
/// the edge, smaller ones keep the edge more opaque.
#[inline]
pub fn fade_alpha(normalized: f32, curve: f32) -> u8 {
    let t = normalized.clamp(0.0, 1.0);
    (255.0 * t.powf(curve)).round() as u8
}
