//! Rendering pipeline: gradient, clouds, upscale, blur.

/// Orchestrates a full sky render.
pub mod pipeline;
/// Raster resampling.
pub mod resize;
