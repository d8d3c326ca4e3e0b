use image::imageops::FilterType;

use crate::foundation::core::{Dims, Raster};
use crate::foundation::error::WispResult;

/// Interpolation kernel for the final upscale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpscaleKernel {
    /// Center-sampled nearest neighbor; blocky, no blending.
    Nearest,
    /// Linear (triangle) filter.
    Bilinear,
    /// Catmull-Rom cubic.
    #[default]
    Bicubic,
}

impl UpscaleKernel {
    fn filter(self) -> Option<FilterType> {
        match self {
            Self::Nearest => None,
            Self::Bilinear => Some(FilterType::Triangle),
            Self::Bicubic => Some(FilterType::CatmullRom),
        }
    }
}

/// Resample `src` to `width x height`.
#[tracing::instrument(skip(src), fields(from_w = src.width(), from_h = src.height()))]
pub fn resize(src: Raster, width: u32, height: u32, kernel: UpscaleKernel) -> WispResult<Raster> {
    let dims = Dims::new(width, height)?;
    if dims == src.dims() {
        return Ok(src);
    }
    match kernel.filter() {
        None => resize_nearest(&src, dims),
        Some(filter) => {
            let img = src.into_rgb_image()?;
            Raster::from_rgb_image(image::imageops::resize(&img, width, height, filter))
        }
    }
}

fn resize_nearest(src: &Raster, dims: Dims) -> WispResult<Raster> {
    let (sw, sh) = (u64::from(src.width()), u64::from(src.height()));
    let (dw, dh) = (u64::from(dims.width), u64::from(dims.height));
    // Sample at the source pixel under each destination pixel center.
    let sample = |d: u64, s_len: u64, d_len: u64| ((2 * d + 1) * s_len / (2 * d_len)) as usize;
    let cols: Vec<usize> = (0..dw).map(|x| sample(x, sw, dw) * 3).collect();

    let src_bytes = src.as_bytes();
    let src_stride = src.stride();
    let mut out = Vec::with_capacity(dims.byte_len()?);
    for y in 0..dh {
        let row = &src_bytes[sample(y, sh, dh) * src_stride..][..src_stride];
        for &c in &cols {
            out.extend_from_slice(&row[c..c + 3]);
        }
    }
    Raster::from_raw(dims.width, dims.height, out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/resize.rs"]
mod tests;
