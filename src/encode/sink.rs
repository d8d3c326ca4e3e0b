use std::path::{Path, PathBuf};

use crate::foundation::core::Raster;
use crate::foundation::error::{WispError, WispResult};

/// Consumer of a finished raster: a file writer, a display surface, a test buffer.
pub trait RasterSink {
    /// Take the finished image.
    fn consume(&mut self, raster: &Raster) -> WispResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    rasters: Vec<Raster>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasters received so far, in order.
    pub fn rasters(&self) -> &[Raster] {
        &self.rasters
    }
}

impl RasterSink for InMemorySink {
    fn consume(&mut self, raster: &Raster) -> WispResult<()> {
        self.rasters.push(raster.clone());
        Ok(())
    }
}

/// Where a [`PngSink`] writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PngTarget {
    /// Always this path; existing files are overwritten.
    Exact(PathBuf),
    /// First free `<dir>/<stem><n>.png` for `n = 1, 2, ...`.
    Numbered {
        /// Output folder, created on demand.
        dir: PathBuf,
        /// File name prefix.
        stem: String,
    },
}

/// Encodes rasters as PNG files.
#[derive(Debug)]
pub struct PngSink {
    target: PngTarget,
    written: Vec<PathBuf>,
}

impl PngSink {
    /// Sink writing to `target`.
    pub fn new(target: PngTarget) -> Self {
        Self {
            target,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn next_path(&self) -> WispResult<PathBuf> {
        match &self.target {
            PngTarget::Exact(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                Ok(path.clone())
            }
            PngTarget::Numbered { dir, stem } => unique_path(dir, stem, "png"),
        }
    }
}

impl RasterSink for PngSink {
    #[tracing::instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
    fn consume(&mut self, raster: &Raster) -> WispResult<()> {
        let path = self.next_path()?;
        image::save_buffer_with_format(
            &path,
            raster.as_bytes(),
            raster.width(),
            raster.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|e| WispError::encode(format!("write png '{}': {e}", path.display())))?;

        tracing::info!(path = %path.display(), "saved image");
        self.written.push(path);
        Ok(())
    }
}

/// First path `<dir>/<stem><n>.<ext>` (n = 1, 2, ...) that does not exist yet.
///
/// Creates `dir` when missing.
pub fn unique_path(dir: &Path, stem: &str, ext: &str) -> WispResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    (1u64..)
        .map(|n| dir.join(format!("{stem}{n}.{ext}")))
        .find(|p| !p.exists())
        .ok_or_else(|| WispError::encode("no free output file name"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
