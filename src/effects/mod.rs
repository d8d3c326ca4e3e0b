//! Post-filters applied after upscaling.

/// Separable Gaussian blur.
pub mod blur;
