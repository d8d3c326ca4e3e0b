use rayon::prelude::*;

use crate::foundation::core::{Dims, Raster};
use crate::foundation::error::{WispError, WispResult};

/// Kernel radius used for a given `sigma`: `ceil(3 * sigma)`, saturating at `u32::MAX`.
pub fn kernel_radius(sigma: f32) -> u32 {
    (3.0 * sigma).ceil().max(0.0) as u32
}

/// Validate `sigma` for a raster of size `dims` and return its kernel radius.
///
/// The radius may not exceed the longer side of the raster.
pub fn blur_radius(sigma: f32, dims: Dims) -> WispResult<u32> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(WispError::validation(format!(
            "blur sigma must be finite and >= 0, got {sigma}"
        )));
    }
    let radius = kernel_radius(sigma);
    let longest = dims.width.max(dims.height);
    if radius > longest {
        return Err(WispError::validation(format!(
            "blur sigma {sigma} needs a kernel radius of {radius}, more than the {}x{} raster",
            dims.width, dims.height
        )));
    }
    Ok(radius)
}

/// Separable Gaussian blur of an RGB8 raster with clamped edges.
///
/// `sigma == 0` returns an unchanged copy.
#[tracing::instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn gaussian_blur(src: &Raster, sigma: f32) -> WispResult<Raster> {
    let radius = blur_radius(sigma, src.dims())?;
    if radius == 0 {
        return Ok(src.clone());
    }

    let kernel = kernel_q16(radius, sigma);
    let (w, h) = (src.width(), src.height());
    let mut tmp = vec![0u8; src.as_bytes().len()];
    let mut out = vec![0u8; src.as_bytes().len()];

    horizontal_pass(src.as_bytes(), &mut tmp, w, &kernel);
    vertical_pass(&tmp, &mut out, w, h, &kernel);
    Raster::from_raw(w, h, out)
}

const Q16_ONE: i64 = 1 << 16;

// Taps for `-radius..=radius` in Q16; they sum to exactly `Q16_ONE`. `radius > 0` implies
// `sigma > 0`, and the center tap alone keeps the float sum at or above 1.
fn kernel_q16(radius: u32, sigma: f32) -> Vec<u32> {
    let r = i64::from(radius);
    let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
    let taps: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = i as f64;
            (-(x * x) / two_sigma_sq).exp()
        })
        .collect();
    let total: f64 = taps.iter().sum();

    let mut kernel: Vec<u32> = taps
        .iter()
        .map(|t| ((t / total) * Q16_ONE as f64).round() as u32)
        .collect();
    let drift = Q16_ONE - kernel.iter().map(|&k| i64::from(k)).sum::<i64>();
    let mid = kernel.len() / 2;
    kernel[mid] = (i64::from(kernel[mid]) + drift).clamp(0, Q16_ONE) as u32;
    kernel
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    let stride = width as usize * 3;
    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(out_row, in_row)| {
            for x in 0..w {
                let mut acc = [0u64; 3];
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i64 - radius).clamp(0, w - 1) as usize * 3;
                    for c in 0..3 {
                        acc[c] += u64::from(kw) * u64::from(in_row[sx + c]);
                    }
                }
                let o = x as usize * 3;
                for c in 0..3 {
                    out_row[o + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let h = i64::from(height);
    let stride = width as usize * 3;
    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (i, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0u64;
                for (ki, &kw) in k.iter().enumerate() {
                    let sy = (y as i64 + ki as i64 - radius).clamp(0, h - 1) as usize;
                    acc += u64::from(kw) * u64::from(src[sy * stride + i]);
                }
                *out = q16_to_u8(acc);
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
