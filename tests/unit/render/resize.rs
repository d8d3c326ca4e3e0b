use super::*;
use crate::foundation::core::Rgb8;

fn checker() -> Raster {
    let mut r = Raster::filled(2, 2, Rgb8::new(0, 0, 0)).unwrap();
    r.set_pixel(0, 0, Rgb8::new(255, 0, 0));
    r.set_pixel(1, 0, Rgb8::new(0, 255, 0));
    r.set_pixel(0, 1, Rgb8::new(0, 0, 255));
    r.set_pixel(1, 1, Rgb8::new(255, 255, 255));
    r
}

#[test]
fn nearest_2x_replicates_blocks() {
    let src = checker();
    let out = resize(src.clone(), 4, 4, UpscaleKernel::Nearest).unwrap();
    assert_eq!((out.width(), out.height()), (4, 4));
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), src.pixel(x / 2, y / 2), "({x}, {y})");
        }
    }
}

#[test]
fn nearest_handles_non_integer_ratios() {
    let src = checker();
    let out = resize(src.clone(), 3, 5, UpscaleKernel::Nearest).unwrap();
    assert_eq!(out.pixel(0, 0), src.pixel(0, 0));
    assert_eq!(out.pixel(2, 4), src.pixel(1, 1));
    // Downscale picks the pixel under each center.
    let down = resize(out, 1, 1, UpscaleKernel::Nearest).unwrap();
    assert_eq!(down.as_bytes().len(), 3);
}

#[test]
fn same_size_is_passthrough() {
    let src = checker();
    for k in [
        UpscaleKernel::Nearest,
        UpscaleKernel::Bilinear,
        UpscaleKernel::Bicubic,
    ] {
        assert_eq!(resize(src.clone(), 2, 2, k).unwrap(), src);
    }
}

#[test]
fn smooth_kernels_keep_flat_regions_flat() {
    let src = Raster::filled(3, 4, Rgb8::new(90, 140, 210)).unwrap();
    for k in [UpscaleKernel::Bilinear, UpscaleKernel::Bicubic] {
        let out = resize(src.clone(), 12, 16, k).unwrap();
        assert_eq!(out, Raster::filled(12, 16, Rgb8::new(90, 140, 210)).unwrap());
    }
}

#[test]
fn bicubic_blends_between_neighbors() {
    let mut src = Raster::filled(2, 1, Rgb8::new(0, 0, 0)).unwrap();
    src.set_pixel(1, 0, Rgb8::WHITE);
    let out = resize(src, 8, 1, UpscaleKernel::Bicubic).unwrap();
    let mid = out.pixel(4, 0).r;
    assert!(mid > 0 && mid < 255);
}

#[test]
fn zero_target_is_rejected() {
    assert!(resize(checker(), 0, 4, UpscaleKernel::Nearest).is_err());
}

#[test]
fn kernel_names_are_snake_case() {
    let s = serde_json::to_string(&UpscaleKernel::Nearest).unwrap();
    assert_eq!(s, "\"nearest\"");
}
