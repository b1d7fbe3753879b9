use super::*;
use crate::curve::builder::build_smooth_path;

const TOL: f64 = 1e-3;

fn close(a: Point, b: Point) -> bool {
    (a - b).length() < TOL
}

fn zigzag() -> Vec<Point> {
    vec![
        Point::new(0.0, 100.0),
        Point::new(50.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(150.0, 10.0),
        Point::new(200.0, 90.0),
    ]
}

#[test]
fn empty_path_samples_to_origin() {
    let path = BezPath::new();
    assert_eq!(point_at_progress(&path, 0.0), Point::ORIGIN);
    assert_eq!(point_at_progress(&path, 0.7), Point::ORIGIN);
    assert_eq!(path_length(&path), 0.0);
    assert!(PathMeasure::new(&path).knot_lengths().is_empty());
    assert!(segment_between(&path, 0.0, 1.0).elements().is_empty());
}

#[test]
fn single_point_path_samples_to_that_point() {
    let p = Point::new(12.0, 34.0);
    let path = build_smooth_path(&[p]);
    for progress in [0.0, 0.5, 1.0] {
        assert_eq!(point_at_progress(&path, progress), p);
    }
    assert_eq!(path_length(&path), 0.0);
    assert_eq!(PathMeasure::new(&path).knot_lengths(), vec![0.0]);
}

#[test]
fn endpoints_match_first_and_last_points() {
    let points = zigzag();
    let path = build_smooth_path(&points);
    assert!(close(point_at_progress(&path, 0.0), points[0]));
    assert!(close(point_at_progress(&path, 1.0), points[4]));
    // Out of range progress is clamped.
    assert!(close(point_at_progress(&path, -3.0), points[0]));
    assert!(close(point_at_progress(&path, 3.0), points[4]));
}

#[test]
fn knots_are_hit_at_their_arc_lengths() {
    let points = zigzag();
    let measure = PathMeasure::new(&build_smooth_path(&points));
    let knots = measure.knot_lengths();
    assert_eq!(knots.len(), points.len());
    for (d, p) in knots.iter().zip(&points) {
        assert!(close(measure.position_at_length(*d), *p), "knot {p:?}");
    }
}

#[test]
fn arc_length_exceeds_chord_length_on_deflected_curves() {
    let points = zigzag();
    let measured = path_length(&build_smooth_path(&points));
    let chords: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    assert!(measured > chords);
}

#[test]
fn straight_line_progress_is_uniform() {
    let path = build_smooth_path(&[Point::new(0.0, 5.0), Point::new(100.0, 5.0)]);
    let measure = PathMeasure::new(&path);
    assert!((measure.length() - 100.0).abs() < TOL);
    assert!(close(measure.position_at_progress(0.25), Point::new(25.0, 5.0)));
    assert!(close(measure.position_at_progress(0.5), Point::new(50.0, 5.0)));
}

#[test]
fn full_segment_preserves_length() {
    let path = build_smooth_path(&zigzag());
    let full = segment_between(&path, 0.0, 1.0);
    assert!((path_length(&full) - path_length(&path)).abs() < 1e-2);
    assert_eq!(full.segments().count(), path.segments().count());
}

#[test]
fn inverted_or_empty_range_yields_empty_path() {
    let path = build_smooth_path(&zigzag());
    for (a, b) in [(0.5, 0.5), (0.8, 0.2), (1.0, 0.0), (2.0, 1.5)] {
        let seg = segment_between(&path, a, b);
        assert!(seg.elements().is_empty(), "({a}, {b})");
        assert_eq!(path_length(&seg), 0.0);
    }
}

#[test]
fn middle_segment_has_proportional_length_and_matching_ends() {
    let path = build_smooth_path(&zigzag());
    let measure = PathMeasure::new(&path);
    let seg = measure.segment_between(0.3, 0.65);
    let expected = 0.35 * measure.length();
    assert!((path_length(&seg) - expected).abs() < 1e-2);

    let seg_measure = PathMeasure::new(&seg);
    assert!(close(seg_measure.start_point(), measure.position_at_progress(0.3)));
    assert!(close(
        seg_measure.position_at_progress(1.0),
        measure.position_at_progress(0.65)
    ));
    assert_eq!(
        seg.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count(),
        1
    );
}

#[test]
fn animated_prefix_grows_with_progress() {
    let path = build_smooth_path(&zigzag());
    let mut last = 0.0;
    for step in 1..=10 {
        let len = path_length(&animated_prefix(&path, step as f64 / 10.0));
        assert!(len > last);
        last = len;
    }
    assert!((last - path_length(&path)).abs() < 1e-2);
    assert!(animated_prefix(&path, 0.0).elements().is_empty());
}

#[test]
fn tangent_follows_direction_of_travel() {
    let path = build_smooth_path(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    let t = PathMeasure::new(&path).tangent_at_progress(0.5);
    assert!((t - Vec2::new(1.0, 0.0)).length() < 1e-9);

    assert_eq!(
        PathMeasure::new(&BezPath::new()).tangent_at_progress(0.5),
        Vec2::ZERO
    );
}

#[test]
fn invalid_accuracy_falls_back_to_default() {
    let path = build_smooth_path(&zigzag());
    let bad = PathMeasure::with_settings(&path, CurveSettings { accuracy: -1.0 });
    let good = PathMeasure::new(&path);
    assert_eq!(bad.length(), good.length());
}
