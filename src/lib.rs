//! Wisp procedurally paints a sky with soft, wispy clouds.
//!
//! A render is a one-way pipeline:
//!
//! - build a small vertical sky gradient ([`generate_gradient`])
//! - paint clusters of feathered discs into it ([`paint_clusters`])
//! - upscale to the output size ([`resize`]) and optionally blur ([`gaussian_blur`])
//! - hand the finished [`Raster`] to a [`RasterSink`]
//!
//! [`render_sky`] runs all of it from a [`SkyConfig`]. Randomness always comes from a caller-owned
//! [`RandomSource`], so a fixed seed reproduces an image byte for byte.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Cluster layout and the cloud painter.
pub mod clouds;
pub mod config;
/// Post-filters.
pub mod effects;
/// Output sinks.
pub mod encode;
/// Pipeline orchestration and resampling.
pub mod render;
/// Sky gradients.
pub mod sky;

pub use crate::foundation::core::{Dims, Raster, Rgb8};
pub use crate::foundation::error::{WispError, WispResult};
pub use crate::foundation::rng::{RandomSource, entropy_seed, seeded};

pub use crate::clouds::cluster::{
    CLOUD_SCALE, ClusterAnchor, ClusterDescriptor, DEFAULT_LAYOUT, resolve_layout,
};
pub use crate::clouds::paint::{
    CloudStyle, FLAT_FLOOR, MAX_OPACITY, Shading, SpreadMode, blend_channel, feather,
    paint_clusters,
};
pub use crate::config::{Preset, SkyConfig};
pub use crate::effects::blur::gaussian_blur;
pub use crate::encode::sink::{InMemorySink, PngSink, PngTarget, RasterSink, unique_path};
pub use crate::render::pipeline::{render_sky, render_to_sink};
pub use crate::render::resize::{UpscaleKernel, resize};
pub use crate::sky::gradient::{SkyStops, generate_gradient};
