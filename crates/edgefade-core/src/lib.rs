//! Edgefade Core - Edge-fade alpha compositing library
//!
//! This crate computes per-pixel alpha masks that fade an image toward
//! transparency at its edges, and applies them to the image's alpha channel.
//! Two fade geometries are supported: independent per-edge linear gradients
//! (square) and a rounded-corner distance field (rounded). The mask can be
//! softened with a Gaussian blur and either replaces or multiplies with any
//! alpha the image already carries. Color data is never modified.

pub mod decode;
pub mod encode;
pub mod fade;
pub mod image_buf;
pub mod mask;

pub use fade::{apply_edge_fade, compute_alpha_mask, resolve_fade_pixels};
pub use image_buf::FadeImage;
pub use mask::AlphaMask;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for edge-fade operations.
///
/// Configuration and image errors are reported synchronously before any
/// output is produced; there is no partial or degraded result.
#[derive(Debug, Error)]
pub enum FadeError {
    /// The fade curve exponent is not a positive finite number.
    #[error("Invalid fade curve {0}: exponent must be finite and > 0")]
    InvalidCurve(f32),

    /// The image has a zero width or height.
    #[error("Invalid image dimensions: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// The pixel buffer length does not match the declared dimensions.
    #[error("Pixel buffer length {actual} does not match expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The input bytes could not be decoded as an image.
    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    /// The output image could not be encoded.
    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}

/// How the fade distance is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeMode {
    /// Distance is a percentage of the smaller image dimension.
    #[default]
    Percentage,
    /// Distance is an absolute pixel count.
    Pixels,
}

/// Shape of the fade zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeShape {
    /// Straight fade bands, one per selected edge.
    #[default]
    Square,
    /// Distance-field fade with quarter-circle corners.
    Rounded,
}

/// Which edges of the image receive fade.
///
/// Unselected edges stay fully opaque at their border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSet {
    /// All four edges selected.
    pub fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    /// No edges selected.
    pub fn none() -> Self {
        Self {
            top: false,
            bottom: false,
            left: false,
            right: false,
        }
    }

    /// Returns true if at least one edge is selected.
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration for an edge-fade computation.
///
/// An immutable value bundle; one config describes one mask. Defaults match
/// a gentle all-edge fade: 5% distance, blur radius 10, quadratic curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FadeConfig {
    /// How `distance` is interpreted.
    pub mode: FadeMode,
    /// Fade distance; percent of the smaller dimension or absolute pixels.
    pub distance: u32,
    /// Gaussian blur radius applied to the finished mask (0 = no blur).
    pub blur_radius: u32,
    /// Gradient exponent: 1.0 = linear, > 1.0 biases transparency toward
    /// the edge, < 1.0 biases opacity toward the edge.
    pub curve: f32,
    /// Square bands or rounded-corner distance field.
    pub shape: EdgeShape,
    /// If true the computed mask replaces any existing alpha; if false the
    /// two are multiplied together.
    pub replace_alpha: bool,
    /// Edges that receive fade.
    pub edges: EdgeSet,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            mode: FadeMode::Percentage,
            distance: 5,
            blur_radius: 10,
            curve: 2.0,
            shape: EdgeShape::Square,
            replace_alpha: false,
            edges: EdgeSet::all(),
        }
    }
}

impl FadeConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the config for values that cannot produce a valid mask.
    ///
    /// # Errors
    ///
    /// Returns `FadeError::InvalidCurve` if the curve exponent is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), FadeError> {
        if !self.curve.is_finite() || self.curve <= 0.0 {
            return Err(FadeError::InvalidCurve(self.curve));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FadeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, FadeMode::Percentage);
        assert_eq!(config.distance, 5);
        assert_eq!(config.blur_radius, 10);
        assert!(!config.replace_alpha);
        assert!(config.edges.any());
    }

    #[test]
    fn test_invalid_curve_rejected() {
        let mut config = FadeConfig::default();

        config.curve = 0.0;
        assert!(matches!(config.validate(), Err(FadeError::InvalidCurve(_))));

        config.curve = -1.5;
        assert!(config.validate().is_err());

        config.curve = f32::NAN;
        assert!(config.validate().is_err());

        config.curve = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_edge_set_any() {
        assert!(EdgeSet::all().any());
        assert!(!EdgeSet::none().any());

        let mut edges = EdgeSet::none();
        edges.right = true;
        assert!(edges.any());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = FadeConfig {
            mode: FadeMode::Pixels,
            distance: 42,
            blur_radius: 0,
            curve: 0.75,
            shape: EdgeShape::Rounded,
            replace_alpha: true,
            edges: EdgeSet::none(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: FadeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_enum_serde_names() {
        // Wire names match the host's string parameter values
        assert_eq!(
            serde_json::to_string(&FadeMode::Percentage).unwrap(),
            "\"percentage\""
        );
        assert_eq!(
            serde_json::to_string(&EdgeShape::Rounded).unwrap(),
            "\"rounded\""
        );
    }
}
