//! Rounded-shape edge fade: a distance field around an inner safe zone.
//!
//! The safe zone is the inner rectangle left after subtracting each
//! selected edge's fade margin. Pixels inside it are fully opaque. Outside,
//! opacity falls off with the distance to the zone: linear distance to the
//! nearest boundary when the pixel is past it on one axis, Euclidean
//! distance to the nearest safe-zone corner when past it on both. The
//! Euclidean corner term is what produces the quarter-circle fade.

use super::{fade_alpha, AlphaMask};
use crate::EdgeSet;

/// Horizontal distance from column `x` to the safe zone, 0.0 inside.
///
/// The left boundary is measured to `safe_left`, the right to one past
/// `safe_right - 1`; the left region takes priority if the margins overlap.
#[inline]
fn axis_distance(coord: i64, safe_lo: i64, safe_hi: i64) -> f32 {
    if coord < safe_lo {
        (safe_lo - coord) as f32
    } else if coord >= safe_hi {
        (coord - safe_hi + 1) as f32
    } else {
        0.0
    }
}

/// Build a rounded-corner fade mask.
///
/// Each selected edge contributes a margin of `fade_pixels` to the safe
/// zone; unselected edges contribute zero, keeping their border opaque.
/// Distances of `fade_pixels` or more map to full transparency.
pub fn rounded_mask(
    width: u32,
    height: u32,
    fade_pixels: u32,
    curve: f32,
    edges: &EdgeSet,
) -> AlphaMask {
    if fade_pixels == 0 {
        return AlphaMask::opaque(width, height);
    }

    let fade = fade_pixels as i64;
    let safe_left = if edges.left { fade } else { 0 };
    let safe_right = (width as i64) - if edges.right { fade } else { 0 };
    let safe_top = if edges.top { fade } else { 0 };
    let safe_bottom = (height as i64) - if edges.bottom { fade } else { 0 };

    // Precompute per-column and per-row axis distances; a pixel's distance
    // is then a pure combination of the two, one sqrt per corner pixel.
    let dx: Vec<f32> = (0..width as i64)
        .map(|x| axis_distance(x, safe_left, safe_right))
        .collect();
    let dy: Vec<f32> = (0..height as i64)
        .map(|y| axis_distance(y, safe_top, safe_bottom))
        .collect();

    let fade = fade_pixels as f32;
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for &row_dist in &dy {
        for &col_dist in &dx {
            let dist = if row_dist == 0.0 {
                col_dist
            } else if col_dist == 0.0 {
                row_dist
            } else {
                (col_dist * col_dist + row_dist * row_dist).sqrt()
            };

            let alpha = if dist <= 0.0 {
                255
            } else if dist >= fade {
                0
            } else {
                fade_alpha(1.0 - dist / fade, curve)
            };
            data.push(alpha);
        }
    }

    AlphaMask::from_raw(width, height, data)
}
