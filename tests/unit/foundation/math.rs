use super::*;

#[test]
fn clamp_progress_bounds_and_nan() {
    assert_eq!(clamp_progress(-0.5), 0.0);
    assert_eq!(clamp_progress(0.25), 0.25);
    assert_eq!(clamp_progress(7.0), 1.0);
    assert_eq!(clamp_progress(f64::NAN), 0.0);
    assert_eq!(clamp_progress(f64::INFINITY), 1.0);
}

#[test]
fn snap_only_within_epsilon() {
    assert_eq!(snap_to_integer(2.0 + 1e-12), 2.0);
    assert_eq!(snap_to_integer(3.0 - 1e-12), 3.0);
    assert_eq!(snap_to_integer(2.5), 2.5);
    assert_eq!(snap_to_integer(2.001), 2.001);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
}
