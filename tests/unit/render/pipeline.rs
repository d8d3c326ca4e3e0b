use super::*;
use crate::clouds::cluster::ClusterAnchor;
use crate::config::Preset;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Rgb8;
use crate::foundation::rng::seeded;
use crate::render::resize::UpscaleKernel;
use crate::sky::gradient::SkyStops;

fn small(preset: Preset) -> SkyConfig {
    SkyConfig {
        width: 120,
        height: 160,
        scale_factor: 4,
        ..SkyConfig::preset(preset)
    }
}

#[test]
fn output_has_requested_size() {
    for preset in [Preset::Retro, Preset::Layered, Preset::Billow] {
        let out = render_sky(&small(preset), &mut seeded(1)).unwrap();
        assert_eq!((out.width(), out.height()), (120, 160));
    }
}

#[test]
fn no_passes_renders_plain_upscaled_gradient() {
    let cfg = SkyConfig {
        passes: vec![],
        kernel: UpscaleKernel::Nearest,
        blur_sigma: None,
        ..small(Preset::Retro)
    };
    let out = render_sky(&cfg, &mut seeded(1)).unwrap();
    let grad = generate_gradient(30, 40, &cfg.sky).unwrap();
    let expected = resize(grad, 120, 160, UpscaleKernel::Nearest).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn clouds_brighten_the_sky() {
    let with = render_sky(&small(Preset::Layered), &mut seeded(5)).unwrap();
    let without = render_sky(
        &SkyConfig {
            passes: vec![],
            ..small(Preset::Layered)
        },
        &mut seeded(5),
    )
    .unwrap();
    let sum = |r: &Raster| r.as_bytes().iter().map(|&b| u64::from(b)).sum::<u64>();
    assert!(sum(&with) > sum(&without));
}

#[test]
fn nearest_output_is_blocky() {
    let cfg = small(Preset::Retro);
    let out = render_sky(&cfg, &mut seeded(9)).unwrap();
    for y in (0..160).step_by(4) {
        for x in (0..120).step_by(4) {
            let p = out.pixel(x, y);
            assert_eq!(out.pixel(x + 3, y + 3), p);
        }
    }
}

#[test]
fn invalid_config_fails_before_rendering() {
    let cfg = SkyConfig {
        width: 3,
        ..small(Preset::Layered)
    };
    let mut sink = InMemorySink::new();
    assert!(render_to_sink(&cfg, &mut seeded(0), &mut sink).is_err());
    assert!(sink.rasters().is_empty());
}

#[test]
fn sink_receives_rendered_raster() {
    let cfg = SkyConfig {
        clusters: vec![ClusterAnchor {
            fx: 0.5,
            fy: 0.5,
            spread_radius: 2,
            sublump_count: 3,
            max_lump_radius: 4,
        }],
        sky: SkyStops::Linear {
            top: Rgb8::new(0, 0, 80),
            bottom: Rgb8::new(0, 0, 160),
        },
        ..small(Preset::Retro)
    };
    let mut sink = InMemorySink::new();
    render_to_sink(&cfg, &mut seeded(3), &mut sink).unwrap();
    assert_eq!(sink.rasters().len(), 1);
    assert_eq!(sink.rasters()[0], render_sky(&cfg, &mut seeded(3)).unwrap());
}
