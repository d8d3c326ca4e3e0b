use rayon::prelude::*;

use crate::foundation::core::{Dims, Raster, Rgb8};
use crate::foundation::error::{WispError, WispResult};

/// Fraction of the height where the segmented gradient switches from `top→mid` to `mid→horizon`.
pub const HORIZON_FRACTION: f64 = 0.80;

/// Vertical sky color stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SkyStops {
    /// One linear blend from the first row to the last.
    Linear {
        /// Color of row 0.
        top: Rgb8,
        /// Color of the last row.
        bottom: Rgb8,
    },
    /// `top→mid` over the upper 80% of rows, then `mid→horizon` below.
    Segmented {
        /// Color of row 0.
        top: Rgb8,
        /// Color at the horizon line.
        mid: Rgb8,
        /// Color the bottom segment fades towards.
        horizon: Rgb8,
    },
}

impl SkyStops {
    /// Reject heights the stops cannot interpolate over.
    pub fn validate_height(&self, height: u32) -> WispResult<()> {
        match self {
            Self::Linear { .. } if height <= 1 => Err(WispError::validation(
                "linear sky gradient needs a height of at least 2",
            )),
            _ if height == 0 => Err(WispError::validation("sky gradient height must be > 0")),
            _ => Ok(()),
        }
    }

    /// Color of row `y` in a gradient `height` rows tall.
    pub fn row_color(&self, y: u32, height: u32) -> Rgb8 {
        let y = f64::from(y);
        match *self {
            Self::Linear { top, bottom } => {
                let t = y / f64::from(height - 1);
                lerp_offset(top, bottom, t)
            }
            Self::Segmented { top, mid, horizon } => {
                let horizon_line = horizon_line(height);
                if y < f64::from(horizon_line) {
                    mix(top, mid, y / f64::from(horizon_line))
                } else {
                    let span = f64::from(height - horizon_line);
                    let blend = ((y - f64::from(horizon_line)) / span).clamp(0.0, 1.0);
                    mix(mid, horizon, blend)
                }
            }
        }
    }
}

/// First row of the lower segment in a segmented gradient.
pub fn horizon_line(height: u32) -> u32 {
    (f64::from(height) * HORIZON_FRACTION) as u32
}

/// Build a `width x height` raster whose rows follow `stops`.
///
/// Each row is horizontally constant.
#[tracing::instrument(skip(stops))]
pub fn generate_gradient(width: u32, height: u32, stops: &SkyStops) -> WispResult<Raster> {
    let dims = Dims::new(width, height)?;
    stops.validate_height(height)?;
    dims.byte_len()?;
    let rows: Vec<[u8; 3]> = (0..height)
        .map(|y| stops.row_color(y, height).channels())
        .collect();

    let mut raster = Raster::filled(width, height, Rgb8::new(0, 0, 0))?;
    let stride = raster.stride();
    raster
        .bytes_mut()
        .par_chunks_mut(stride)
        .zip(rows.par_iter())
        .for_each(|(row, color)| {
            for px in row.chunks_exact_mut(3) {
                px.copy_from_slice(color);
            }
        });
    Ok(raster)
}

// `a + (b - a) * t`, truncated.
fn lerp_offset(a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
    let ch = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
    Rgb8::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

// `a * (1 - t) + b * t`, truncated.
fn mix(a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
    let ch = |a: u8, b: u8| (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8;
    Rgb8::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

#[cfg(test)]
#[path = "../../tests/unit/sky/gradient.rs"]
mod tests;
