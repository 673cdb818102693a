//! Edge-fade engine: mask computation and alpha compositing.
//!
//! The entry point is [`apply_edge_fade`], a pure function of an image and
//! a [`FadeConfig`]. It resolves the fade distance to pixels, builds the
//! mask for the configured shape, optionally blurs it, combines it with
//! the image's existing alpha unless replacement is requested, and returns
//! a new image whose color bytes are identical to the input.
//!
//! [`compute_alpha_mask`] is exposed separately for callers that want to
//! inspect or compose masks without an image.

use crate::image_buf::FadeImage;
use crate::mask::{apply_square_fade, gaussian_blur, rounded_mask, AlphaMask};
use crate::{EdgeShape, FadeConfig, FadeError, FadeMode};

/// Resolve the configured fade distance to an absolute pixel count.
///
/// Percentage mode measures against the smaller image dimension and
/// truncates; pixel mode passes the distance through.
pub fn resolve_fade_pixels(config: &FadeConfig, width: u32, height: u32) -> u32 {
    match config.mode {
        FadeMode::Percentage => {
            let reference_dim = width.min(height) as u64;
            (reference_dim * config.distance as u64 / 100) as u32
        }
        FadeMode::Pixels => config.distance,
    }
}

/// Compute the alpha mask an edge fade would apply to a width × height image.
///
/// The mask starts fully opaque, gets the configured shape's gradient, and
/// is blurred if a blur radius is set. Existing image alpha is not consulted
/// here; combination happens in [`apply_edge_fade`].
///
/// # Errors
///
/// Returns `FadeError::InvalidCurve` for a bad curve exponent and
/// `FadeError::EmptyImage` for zero-sized geometry.
pub fn compute_alpha_mask(
    width: u32,
    height: u32,
    config: &FadeConfig,
) -> Result<AlphaMask, FadeError> {
    config.validate()?;
    if width == 0 || height == 0 {
        return Err(FadeError::EmptyImage { width, height });
    }

    let fade_pixels = resolve_fade_pixels(config, width, height);

    let mut mask = match config.shape {
        EdgeShape::Square => {
            let mut mask = AlphaMask::opaque(width, height);
            apply_square_fade(&mut mask, fade_pixels, config.curve, &config.edges);
            mask
        }
        EdgeShape::Rounded => rounded_mask(width, height, fade_pixels, config.curve, &config.edges),
    };

    // Blur comes after gradient construction, never before
    if config.blur_radius > 0 {
        mask = gaussian_blur(&mask, config.blur_radius);
    }

    Ok(mask)
}

/// Apply an edge fade to an image, returning a new image.
///
/// Color data passes through byte-identical; only the alpha channel is
/// rewritten. With `replace_alpha` false the computed mask is multiplied
/// with the image's existing alpha, so the result is never more opaque
/// than either; with `replace_alpha` true the mask is used verbatim.
///
/// # Errors
///
/// Fails fast on invalid config or zero-sized images; no partial output.
pub fn apply_edge_fade(image: &FadeImage, config: &FadeConfig) -> Result<FadeImage, FadeError> {
    let mut mask = compute_alpha_mask(image.width, image.height, config)?;

    if !config.replace_alpha {
        mask = image.alpha_plane().multiply(&mask);
    }

    image.with_alpha(&mask)
}
