//! Wispy cloud compositing.
//!
//! Clouds are built from clusters; each cluster paints a number of randomly placed, feathered
//! discs ("sublumps") straight into the sky raster.

/// Cluster descriptors and the default layout.
pub mod cluster;
/// The sublump painter.
pub mod paint;
