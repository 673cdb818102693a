//! Square-shape edge fade: independent gradient bands per edge.
//!
//! Each selected edge overwrites a band of `fade_pixels` rows or columns
//! with a power-curve gradient, combined into the mask by pixel-wise
//! minimum. Where two bands overlap at a corner, the more transparent of
//! the two wins; that is the intended corner behavior for this shape.
//! An edge whose fade distance exceeds half the relevant image dimension
//! is skipped entirely, so opposite bands never cross the midline.

use super::{fade_alpha, AlphaMask};
use crate::EdgeSet;

/// Darken an entire mask row to at most `value`.
fn min_row(mask: &mut AlphaMask, y: u32, value: u8) {
    let w = mask.width as usize;
    let start = (y as usize) * w;
    for a in &mut mask.data[start..start + w] {
        *a = (*a).min(value);
    }
}

/// Darken an entire mask column to at most `value`.
fn min_col(mask: &mut AlphaMask, x: u32, value: u8) {
    let w = mask.width as usize;
    for row in mask.data.chunks_exact_mut(w) {
        row[x as usize] = row[x as usize].min(value);
    }
}

/// Apply square-shape fade bands to `mask` in place.
///
/// Rows and columns are 0-indexed from their edge; the outermost row of a
/// band gets the most transparent value and opacity rises inward, reaching
/// full opacity just past the band.
pub fn apply_square_fade(mask: &mut AlphaMask, fade_pixels: u32, curve: f32, edges: &EdgeSet) {
    if fade_pixels == 0 {
        return;
    }

    let width = mask.width;
    let height = mask.height;
    // Hard gate: a band wider than half the dimension is dropped outright
    // rather than clamped, so opposite edges cannot overlap inconsistently.
    let max_fade_width = width / 2;
    let max_fade_height = height / 2;
    let fade = fade_pixels as f32;

    if edges.top && fade_pixels <= max_fade_height {
        for y in 0..fade_pixels.min(height) {
            let value = fade_alpha(y as f32 / fade, curve);
            min_row(mask, y, value);
        }
    }

    if edges.bottom && fade_pixels <= max_fade_height {
        for y in height.saturating_sub(fade_pixels)..height {
            let distance_from_bottom = height - y;
            let value = fade_alpha(distance_from_bottom as f32 / fade, curve);
            min_row(mask, y, value);
        }
    }

    if edges.left && fade_pixels <= max_fade_width {
        for x in 0..fade_pixels.min(width) {
            let value = fade_alpha(x as f32 / fade, curve);
            min_col(mask, x, value);
        }
    }

    if edges.right && fade_pixels <= max_fade_width {
        for x in width.saturating_sub(fade_pixels)..width {
            let distance_from_right = width - x;
            let value = fade_alpha(distance_from_right as f32 / fade, curve);
            min_col(mask, x, value);
        }
    }
}
