use super::*;

#[test]
fn scaling_doubles_spread_count_and_radius() {
    let s = ClusterDescriptor::new(5, 6, 16, 14, 9).scaled().unwrap();
    assert_eq!((s.center_x, s.center_y), (5, 6));
    assert_eq!(s.spread_radius, 32);
    assert_eq!(s.sublump_count, 28);
    assert_eq!(s.max_lump_radius, 18);
}

#[test]
fn zero_lump_radius_is_rejected() {
    let err = ClusterDescriptor::new(0, 0, 4, 4, 0).scaled().unwrap_err();
    assert!(err.to_string().contains("lump radius"));
}

#[test]
fn zero_spread_is_allowed() {
    assert!(ClusterDescriptor::new(0, 0, 0, 1, 1).scaled().is_ok());
}

#[test]
fn anchors_truncate_to_pixels() {
    // 400 x 533 is the working canvas of a 2400 x 3200 output at scale 6.
    let d = DEFAULT_LAYOUT[0].resolve(400, 533);
    assert_eq!((d.center_x, d.center_y), (60, 53));
    assert_eq!(
        (d.spread_radius, d.sublump_count, d.max_lump_radius),
        (16, 14, 9)
    );
}

#[test]
fn default_layout_resolves_all_clusters_on_canvas() {
    let clusters = resolve_layout(&DEFAULT_LAYOUT, 400, 533);
    assert_eq!(clusters.len(), 14);
    for c in &clusters {
        assert!((0..400).contains(&c.center_x));
        assert!((0..533).contains(&c.center_y));
        assert!(c.scaled().is_ok());
    }
}
