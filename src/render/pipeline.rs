use crate::clouds::paint::paint_clusters;
use crate::config::SkyConfig;
use crate::effects::blur::gaussian_blur;
use crate::encode::sink::RasterSink;
use crate::foundation::core::Raster;
use crate::foundation::error::WispResult;
use crate::foundation::rng::RandomSource;
use crate::render::resize::resize;
use crate::sky::gradient::generate_gradient;

/// Render a full sky image.
///
/// Stages run in a fixed order: gradient on the working canvas, one cloud pass per entry of
/// `cfg.passes` (all drawing from the same `rng`), upscale to the output size, optional blur.
#[tracing::instrument(skip_all, fields(width = cfg.width, height = cfg.height))]
pub fn render_sky<R: RandomSource + ?Sized>(cfg: &SkyConfig, rng: &mut R) -> WispResult<Raster> {
    let work = cfg.validate()?;
    let clusters = cfg.resolved_clusters()?;
    tracing::debug!(
        work_w = work.width,
        work_h = work.height,
        clusters = clusters.len(),
        passes = ?cfg.passes,
        "working canvas"
    );

    let mut raster = generate_gradient(work.width, work.height, &cfg.sky)?;
    for &opacity in &cfg.passes {
        paint_clusters(
            &mut raster,
            &clusters,
            cfg.cloud_color,
            opacity,
            cfg.style,
            rng,
        )?;
    }

    let raster = resize(raster, cfg.width, cfg.height, cfg.kernel)?;
    match cfg.blur_sigma {
        Some(sigma) => gaussian_blur(&raster, sigma),
        None => Ok(raster),
    }
}

/// [`render_sky`], then hand the result to `sink`.
pub fn render_to_sink<R, S>(cfg: &SkyConfig, rng: &mut R, sink: &mut S) -> WispResult<()>
where
    R: RandomSource + ?Sized,
    S: RasterSink + ?Sized,
{
    let raster = render_sky(cfg, rng)?;
    sink.consume(&raster)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
