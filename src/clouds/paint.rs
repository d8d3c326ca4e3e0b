use std::f64::consts::PI;

use crate::clouds::cluster::{ClusterDescriptor, ScaledCluster};
use crate::foundation::core::{Raster, Rgb8};
use crate::foundation::error::{WispError, WispResult};
use crate::foundation::rng::RandomSource;

/// Opacity cap for a single sublump, so clouds never fully hide the sky.
pub const MAX_OPACITY: f64 = 0.6;

/// Minimum brightness inside a sublump for [`Shading::FlatFloor`].
pub const FLAT_FLOOR: f64 = 0.2;

/// How far sublumps wander from their cluster center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadMode {
    /// Offsets in `[-spread, spread]`.
    #[default]
    Full,
    /// Offsets in `[floor(-spread / 2), floor(spread / 2)]`, giving tighter clusters.
    Half,
}

/// Maps the feather value of a pixel to its brightness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Brightness equals the feather.
    #[default]
    Plain,
    /// Slightly brighter towards the top of the frame.
    Altitude,
    /// Feather clamped to at least [`FLAT_FLOOR`], giving hard-edged lumps.
    FlatFloor,
}

impl Shading {
    /// Brightness for `feather` at row `y` of a raster `height` rows tall.
    pub fn brightness(self, feather: f64, y: u32, height: u32) -> f64 {
        match self {
            Self::Plain => feather,
            Self::Altitude => {
                let altitude = 1.0 - f64::from(y) / f64::from(height);
                feather * (0.95 + 0.05 * altitude)
            }
            Self::FlatFloor => feather.clamp(FLAT_FLOOR, 1.0),
        }
    }
}

/// Stylistic knobs of the cloud painter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CloudStyle {
    /// Sublump offset range.
    pub spread: SpreadMode,
    /// Brightness curve.
    pub shading: Shading,
}

/// Raised-cosine falloff: `1` at the center (`0.0`), `0` at the edge (`1.0`).
pub fn feather(normalized_dist: f64) -> f64 {
    (0.5 * (1.0 + (normalized_dist * PI).cos())).clamp(0.0, 1.0)
}

/// `base * alpha + old * (1 - alpha)`, truncated toward zero and saturated to `u8`.
///
/// Truncation (not rounding) is kept on purpose; it matches previously generated images.
pub fn blend_channel(base: u8, old: u8, alpha: f64) -> u8 {
    (f64::from(base) * alpha + f64::from(old) * (1.0 - alpha)) as u8
}

/// A single soft disc, sampled from a cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sublump {
    pub(crate) cx: i64,
    pub(crate) cy: i64,
    pub(crate) radius: i64,
}

impl Sublump {
    /// Draw order is `dx`, `dy`, `radius`.
    pub(crate) fn sample<R: RandomSource + ?Sized>(
        cluster: &ScaledCluster,
        spread: SpreadMode,
        rng: &mut R,
    ) -> Self {
        let (lo, hi) = match spread {
            SpreadMode::Full => (-cluster.spread_radius, cluster.spread_radius),
            SpreadMode::Half => (
                (-cluster.spread_radius).div_euclid(2),
                cluster.spread_radius.div_euclid(2),
            ),
        };
        let dx = rng.int_inclusive(lo, hi);
        let dy = rng.int_inclusive(lo, hi);
        let radius = rng.int_inclusive(cluster.max_lump_radius / 2, cluster.max_lump_radius);
        Self {
            cx: cluster.center_x + dx,
            cy: cluster.center_y + dy,
            radius,
        }
    }

    pub(crate) fn composite(
        &self,
        raster: &mut Raster,
        base: Rgb8,
        opacity: f64,
        shading: Shading,
    ) {
        let width = raster.width();
        let height = raster.height();
        let x0 = (self.cx - self.radius).max(0);
        let x1 = (self.cx + self.radius).min(i64::from(width));
        let y0 = (self.cy - self.radius).max(0);
        let y1 = (self.cy + self.radius).min(i64::from(height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let r = self.radius as f64;
        let stride = raster.stride();
        let base = base.channels();
        let data = raster.bytes_mut();
        for y in y0..y1 {
            let dy = (y - self.cy) as f64;
            let row = y as usize * stride;
            for x in x0..x1 {
                let dx = (x - self.cx) as f64;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > r {
                    continue;
                }
                let brightness = shading.brightness(feather(dist / r), y as u32, height);
                let alpha = brightness * MAX_OPACITY * opacity;

                let i = row + x as usize * 3;
                for (c, &b) in data[i..i + 3].iter_mut().zip(base.iter()) {
                    *c = blend_channel(b, *c, alpha);
                }
            }
        }
    }
}

/// Paint every cluster into `raster` in place.
///
/// Each sublump blends against the current pixel values, so later sublumps partially cover earlier
/// ones and repeated calls stack up. Bounds are enforced by clipping, never by per-pixel checks.
#[tracing::instrument(skip(raster, clusters, rng), fields(cluster_count = clusters.len()))]
pub fn paint_clusters<R: RandomSource + ?Sized>(
    raster: &mut Raster,
    clusters: &[ClusterDescriptor],
    base: Rgb8,
    opacity: f64,
    style: CloudStyle,
    rng: &mut R,
) -> WispResult<()> {
    if !opacity.is_finite() || opacity < 0.0 {
        return Err(WispError::validation(format!(
            "cloud opacity multiplier must be finite and >= 0, got {opacity}"
        )));
    }
    let scaled = clusters
        .iter()
        .map(ClusterDescriptor::scaled)
        .collect::<WispResult<Vec<_>>>()?;

    let mut painted = 0u64;
    for cluster in &scaled {
        for _ in 0..cluster.sublump_count {
            let lump = Sublump::sample(cluster, style.spread, rng);
            lump.composite(raster, base, opacity, style.shading);
            painted += 1;
        }
    }
    tracing::debug!(painted, "cloud pass done");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/clouds/paint.rs"]
mod tests;
