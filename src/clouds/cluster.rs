use crate::foundation::error::{WispError, WispResult};

/// Factor applied to every cluster's spread, sublump count and max radius before painting.
pub const CLOUD_SCALE: u32 = 2;

/// One cloud formation in low-resolution pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClusterDescriptor {
    /// Cluster center, x.
    pub center_x: i32,
    /// Cluster center, y.
    pub center_y: i32,
    /// Maximum sublump offset from the center, per axis.
    pub spread_radius: u32,
    /// Number of sublumps to paint.
    pub sublump_count: u32,
    /// Upper bound of a sublump radius; the lower bound is half of it.
    pub max_lump_radius: u32,
}

/// A descriptor after [`CLOUD_SCALE`] has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaledCluster {
    pub(crate) center_x: i64,
    pub(crate) center_y: i64,
    pub(crate) spread_radius: i64,
    pub(crate) sublump_count: u64,
    pub(crate) max_lump_radius: i64,
}

impl ClusterDescriptor {
    /// Create a descriptor.
    pub const fn new(
        center_x: i32,
        center_y: i32,
        spread_radius: u32,
        sublump_count: u32,
        max_lump_radius: u32,
    ) -> Self {
        Self {
            center_x,
            center_y,
            spread_radius,
            sublump_count,
            max_lump_radius,
        }
    }

    /// Apply [`CLOUD_SCALE`], rejecting descriptors that could draw a zero radius.
    pub fn scaled(&self) -> WispResult<ScaledCluster> {
        let scale = i64::from(CLOUD_SCALE);
        let max_lump_radius = i64::from(self.max_lump_radius) * scale;
        if max_lump_radius / 2 <= 0 {
            return Err(WispError::validation(format!(
                "cluster at ({}, {}) has a non-positive lump radius after scaling",
                self.center_x, self.center_y
            )));
        }
        Ok(ScaledCluster {
            center_x: i64::from(self.center_x),
            center_y: i64::from(self.center_y),
            spread_radius: i64::from(self.spread_radius) * scale,
            sublump_count: u64::from(self.sublump_count) * u64::from(CLOUD_SCALE),
            max_lump_radius,
        })
    }
}

/// Resolution-independent cluster placement: center as fractions of the working canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClusterAnchor {
    /// Center x as a fraction of the working width.
    pub fx: f64,
    /// Center y as a fraction of the working height.
    pub fy: f64,
    /// See [`ClusterDescriptor::spread_radius`].
    pub spread_radius: u32,
    /// See [`ClusterDescriptor::sublump_count`].
    pub sublump_count: u32,
    /// See [`ClusterDescriptor::max_lump_radius`].
    pub max_lump_radius: u32,
}

impl ClusterAnchor {
    const fn new(
        fx: f64,
        fy: f64,
        spread_radius: u32,
        sublump_count: u32,
        max_lump_radius: u32,
    ) -> Self {
        Self {
            fx,
            fy,
            spread_radius,
            sublump_count,
            max_lump_radius,
        }
    }

    /// Place this anchor on a `width x height` canvas. Centers are truncated to whole pixels.
    pub fn resolve(&self, width: u32, height: u32) -> ClusterDescriptor {
        ClusterDescriptor::new(
            (f64::from(width) * self.fx) as i32,
            (f64::from(height) * self.fy) as i32,
            self.spread_radius,
            self.sublump_count,
            self.max_lump_radius,
        )
    }
}

/// The hand-authored 14-cluster composition shared by every preset.
pub const DEFAULT_LAYOUT: [ClusterAnchor; 14] = [
    ClusterAnchor::new(0.15, 0.10, 16, 14, 9),
    ClusterAnchor::new(0.30, 0.20, 20, 18, 10),
    ClusterAnchor::new(0.70, 0.18, 18, 16, 9),
    ClusterAnchor::new(0.85, 0.25, 24, 22, 12),
    ClusterAnchor::new(0.10, 0.40, 14, 12, 8),
    ClusterAnchor::new(0.50, 0.30, 22, 20, 11),
    ClusterAnchor::new(0.30, 0.60, 20, 18, 10),
    ClusterAnchor::new(0.85, 0.50, 25, 22, 13),
    ClusterAnchor::new(0.60, 0.65, 18, 15, 9),
    ClusterAnchor::new(0.35, 0.80, 26, 24, 14),
    ClusterAnchor::new(0.75, 0.75, 22, 20, 11),
    ClusterAnchor::new(0.50, 0.90, 28, 26, 15),
    ClusterAnchor::new(0.95, 0.85, 16, 14, 9),
    ClusterAnchor::new(0.20, 0.95, 25, 23, 12),
];

/// Resolve a layout against a working canvas.
pub fn resolve_layout(layout: &[ClusterAnchor], width: u32, height: u32) -> Vec<ClusterDescriptor> {
    layout.iter().map(|a| a.resolve(width, height)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/clouds/cluster.rs"]
mod tests;
