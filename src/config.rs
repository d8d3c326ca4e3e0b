//! Render configuration and the built-in presets.

use std::io::Read;
use std::path::Path;

use crate::clouds::cluster::{ClusterAnchor, ClusterDescriptor, DEFAULT_LAYOUT, resolve_layout};
use crate::clouds::paint::{CloudStyle, Shading, SpreadMode};
use crate::effects::blur::blur_radius;
use crate::foundation::core::{Dims, Rgb8};
use crate::foundation::error::{WispError, WispResult};
use crate::render::resize::UpscaleKernel;
use crate::sky::gradient::SkyStops;

/// Default output width.
pub const DEFAULT_WIDTH: u32 = 2400;
/// Default output height.
pub const DEFAULT_HEIGHT: u32 = 3200;
/// Default ratio between output and working resolution.
pub const DEFAULT_SCALE_FACTOR: u32 = 6;

/// Named looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Pale two-color sky, one pass of plain lumps, blocky nearest-neighbor upscale.
    Retro,
    /// Deep three-band sky, hazy under-layer plus a sharper top layer, altitude shading.
    #[default]
    Layered,
    /// Like `Layered` with tighter clusters and flat-floored lumps.
    Billow,
}

/// Everything needed to render one image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkyConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Working canvas is `width / scale_factor` by `height / scale_factor`.
    pub scale_factor: u32,
    /// Sky gradient.
    pub sky: SkyStops,
    /// Color clouds blend towards.
    pub cloud_color: Rgb8,
    /// Sublump spread and shading.
    pub style: CloudStyle,
    /// One cloud pass per entry, painted in order with that opacity multiplier.
    pub passes: Vec<f64>,
    /// Upscale kernel.
    pub kernel: UpscaleKernel,
    /// Gaussian blur sigma applied after upscaling; `None` disables it.
    pub blur_sigma: Option<f32>,
    /// Cluster placement relative to the working canvas.
    pub clusters: Vec<ClusterAnchor>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl SkyConfig {
    /// Configuration for a named preset at the default resolution.
    pub fn preset(preset: Preset) -> Self {
        let layered = Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale_factor: DEFAULT_SCALE_FACTOR,
            sky: SkyStops::Segmented {
                top: Rgb8::new(70, 130, 180),
                mid: Rgb8::new(173, 216, 230),
                horizon: Rgb8::new(250, 250, 250),
            },
            cloud_color: Rgb8::new(255, 255, 245),
            style: CloudStyle {
                spread: SpreadMode::Full,
                shading: Shading::Altitude,
            },
            passes: vec![0.4, 1.0],
            kernel: UpscaleKernel::Bicubic,
            blur_sigma: Some(0.3),
            clusters: DEFAULT_LAYOUT.to_vec(),
        };

        match preset {
            Preset::Layered => layered,
            Preset::Billow => Self {
                style: CloudStyle {
                    spread: SpreadMode::Half,
                    shading: Shading::FlatFloor,
                },
                blur_sigma: Some(0.2),
                ..layered
            },
            Preset::Retro => Self {
                sky: SkyStops::Linear {
                    top: Rgb8::new(173, 216, 230),
                    bottom: Rgb8::new(240, 240, 240),
                },
                cloud_color: Rgb8::WHITE,
                style: CloudStyle {
                    spread: SpreadMode::Full,
                    shading: Shading::Plain,
                },
                passes: vec![1.0],
                kernel: UpscaleKernel::Nearest,
                blur_sigma: None,
                ..layered
            },
        }
    }

    /// Parse a JSON configuration. Missing fields fall back to the `layered` preset.
    pub fn from_reader<R: Read>(reader: R) -> WispResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| WispError::serde(format!("invalid sky config: {e}")))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: &Path) -> WispResult<Self> {
        let f = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Pretty JSON form of this configuration.
    pub fn to_json_pretty(&self) -> WispResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WispError::serde(e.to_string()))
    }

    /// Output dimensions.
    pub fn output_dims(&self) -> WispResult<Dims> {
        Dims::new(self.width, self.height)
    }

    /// Working (low-resolution) dimensions.
    pub fn working_dims(&self) -> WispResult<Dims> {
        let out = self.output_dims()?;
        if self.scale_factor == 0 {
            return Err(WispError::validation("scale factor must be > 0"));
        }
        Dims::new(out.width / self.scale_factor, out.height / self.scale_factor).map_err(|_| {
            WispError::validation(format!(
                "{}x{} divided by scale factor {} leaves an empty working canvas",
                out.width, out.height, self.scale_factor
            ))
        })
    }

    /// Clusters placed on the working canvas.
    pub fn resolved_clusters(&self) -> WispResult<Vec<ClusterDescriptor>> {
        let work = self.working_dims()?;
        Ok(resolve_layout(&self.clusters, work.width, work.height))
    }

    /// Check every value before anything is allocated. Returns the working dimensions.
    pub fn validate(&self) -> WispResult<Dims> {
        let work = self.working_dims()?;
        self.sky.validate_height(work.height)?;

        for (i, &opacity) in self.passes.iter().enumerate() {
            if !opacity.is_finite() || opacity < 0.0 {
                return Err(WispError::validation(format!(
                    "pass {i}: opacity must be finite and >= 0, got {opacity}"
                )));
            }
        }
        if let Some(sigma) = self.blur_sigma {
            blur_radius(sigma, self.output_dims()?)?;
        }
        for (i, anchor) in self.clusters.iter().enumerate() {
            if !anchor.fx.is_finite() || !anchor.fy.is_finite() {
                return Err(WispError::validation(format!(
                    "cluster {i}: anchor fractions must be finite"
                )));
            }
            anchor
                .resolve(work.width, work.height)
                .scaled()
                .map_err(|e| WispError::validation(format!("cluster {i}: {e}")))?;
        }
        Ok(work)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
