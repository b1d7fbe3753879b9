use super::*;

fn series(values: &[f64]) -> Vec<Sample> {
    values.iter().map(|&v| Sample::unlabeled(v)).collect()
}

#[test]
fn range_of_empty_is_none() {
    assert_eq!(ValueRange::of(&[]), None);
    assert!(map_to_viewport(&[], Size::new(100.0, 50.0)).is_empty());
}

#[test]
fn range_tracks_min_and_max() {
    let r = ValueRange::of(&series(&[3.0, -1.0, 8.0, 2.0])).unwrap();
    assert_eq!(r, ValueRange { min: -1.0, max: 8.0 });
    assert_eq!(r.normalize(-1.0), 0.0);
    assert_eq!(r.normalize(8.0), 1.0);
}

#[test]
fn flat_series_sits_at_mid_height() {
    let points = map_to_viewport(&series(&[5.0, 5.0, 5.0]), Size::new(100.0, 40.0));
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 20.0),
            Point::new(50.0, 20.0),
            Point::new(100.0, 20.0)
        ]
    );
}

#[test]
fn larger_values_are_drawn_higher() {
    let points = map_to_viewport(&series(&[0.0, 10.0, 5.0]), Size::new(200.0, 100.0));
    assert_eq!(points[0], Point::new(0.0, 100.0));
    assert_eq!(points[1], Point::new(100.0, 0.0));
    assert_eq!(points[2], Point::new(200.0, 50.0));
}

#[test]
fn lone_sample_sits_at_left_edge_mid_height() {
    let points = map_to_viewport(&series(&[42.0]), Size::new(300.0, 80.0));
    assert_eq!(points, vec![Point::new(0.0, 40.0)]);
}
