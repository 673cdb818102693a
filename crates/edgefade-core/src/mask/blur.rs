//! Separable Gaussian blur over a single-channel mask.
//!
//! Kernel weights are Q16 fixed point and corrected to sum to exactly one,
//! so a constant mask passes through unchanged. Sampling clamps to the
//! mask edge. The blur radius is the Gaussian standard deviation, with the
//! kernel truncated at two standard deviations per side.

use super::AlphaMask;

/// Blur a mask with a Gaussian of the given radius.
///
/// A radius of 0 returns the mask unchanged.
pub fn gaussian_blur(mask: &AlphaMask, radius: u32) -> AlphaMask {
    if radius == 0 || mask.data.is_empty() {
        return mask.clone();
    }

    let kernel = gaussian_kernel_q16(radius);
    let mut tmp = vec![0u8; mask.data.len()];
    let mut out = vec![0u8; mask.data.len()];

    horizontal_pass(&mask.data, &mut tmp, mask.width, mask.height, &kernel);
    vertical_pass(&tmp, &mut out, mask.width, mask.height, &kernel);

    AlphaMask {
        width: mask.width,
        height: mask.height,
        data: out,
    }
}

/// Build a normalized Gaussian kernel in Q16 fixed point.
///
/// Sigma equals the radius; taps span two sigma per side. The rounding
/// residue is folded into the center tap so the weights sum to 1 << 16.
fn gaussian_kernel_q16(radius: u32) -> Vec<u32> {
    let sigma = radius as f64;
    let half = (2 * radius) as i32;

    let mut weights_f = Vec::<f64>::with_capacity((2 * half + 1) as usize);
    let mut sum = 0.0f64;
    let denom = 2.0 * sigma * sigma;
    for i in -half..=half {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        weights[mid] = (mid_val + delta).clamp(0, 65536) as u32;
    }

    weights
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let half = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let dx = ki as i32 - half;
                let sx = (x + dx).clamp(0, w - 1);
                acc += (kw as u64) * (src[(y * w + sx) as usize] as u64);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let half = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let dy = ki as i32 - half;
                let sy = (y + dy).clamp(0, h - 1);
                acc += (kw as u64) * (src[(sy * w + x) as usize] as u64);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

#[inline]
fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}
