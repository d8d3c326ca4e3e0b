use super::*;

#[test]
fn dims_reject_zero() {
    assert!(Dims::new(0, 4).is_err());
    assert!(Dims::new(4, 0).is_err());
    assert_eq!(Dims::new(4, 2).unwrap().byte_len().unwrap(), 24);
}

#[test]
fn filled_raster_has_uniform_pixels() {
    let c = Rgb8::new(1, 2, 3);
    let r = Raster::filled(3, 2, c).unwrap();
    assert_eq!(r.as_bytes().len(), 18);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(r.pixel(x, y), c);
        }
    }
}

#[test]
fn set_pixel_is_row_major() {
    let mut r = Raster::filled(2, 2, Rgb8::new(0, 0, 0)).unwrap();
    r.set_pixel(1, 0, Rgb8::new(9, 8, 7));
    assert_eq!(&r.as_bytes()[3..6], &[9, 8, 7]);
    assert_eq!(r.stride(), 6);
}

#[test]
fn from_raw_checks_length() {
    assert!(Raster::from_raw(2, 2, vec![0; 11]).is_err());
    assert!(Raster::from_raw(2, 2, vec![0; 12]).is_ok());
}

#[test]
fn image_round_trip_keeps_bytes() {
    let mut r = Raster::filled(2, 1, Rgb8::WHITE).unwrap();
    r.set_pixel(0, 0, Rgb8::new(10, 20, 30));
    let img = r.clone().into_rgb_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
    assert_eq!(Raster::from_rgb_image(img).unwrap(), r);
}

#[test]
fn rgb8_serializes_as_array() {
    let s = serde_json::to_string(&Rgb8::new(70, 130, 180)).unwrap();
    assert_eq!(s, "[70,130,180]");
    let c: Rgb8 = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));
}
