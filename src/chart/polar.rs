//! Radar, donut and gauge geometry.
//!
//! Angles are in degrees, measured clockwise on screen (y points down) with
//! `-90` at twelve o'clock, matching the usual canvas `drawArc` convention.

use kurbo::Arc;

use crate::foundation::core::{BezPath, Point, Vec2};

/// Flattening tolerance for arc approximation, in path units.
const ARC_TOLERANCE: f64 = 0.1;

/// Angle of the first radar axis and of the first donut slice.
pub const TOP_DEGREES: f64 = -90.0;

/// One slice of a donut chart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DonutSlice {
    /// Index of the value this slice represents.
    pub index: usize,
    /// Start angle, clockwise from three o'clock.
    pub start_degrees: f64,
    /// Clockwise sweep.
    pub sweep_degrees: f64,
}

fn on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    center + Vec2::new(cos, sin) * radius
}

/// Vertices of a radar polygon, one per value, clockwise from the top.
///
/// Each vertex sits at `radius * value / max` from `center`, clamped to
/// `[0, radius]`. A non-positive `max` collapses every vertex onto the center.
pub fn radar_vertices(values: &[f64], max: f64, center: Point, radius: f64) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }
    let step = 360.0 / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let fraction = if max > 0.0 {
                (v / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            on_circle(center, radius * fraction, TOP_DEGREES + step * i as f64)
        })
        .collect()
}

/// Closed radar polygon through [`radar_vertices`].
pub fn radar_path(values: &[f64], max: f64, center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    let vertices = radar_vertices(values, max, center, radius);
    let Some((&first, rest)) = vertices.split_first() else {
        return path;
    };
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }
    path.close_path();
    path
}

/// Donut slices proportional to each value's share of the total.
///
/// Negative values count as zero. `gap_degrees` is split evenly on both sides of
/// every slice; slices smaller than the gap collapse to zero sweep. A zero total
/// gives no slices.
pub fn donut_sweeps(values: &[f64], gap_degrees: f64) -> Vec<DonutSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let gap = gap_degrees.max(0.0);
    let mut cursor = TOP_DEGREES;
    values
        .iter()
        .enumerate()
        .map(|(index, v)| {
            let share = v.max(0.0) / total * 360.0;
            let slice = DonutSlice {
                index,
                start_degrees: cursor + gap * 0.5,
                sweep_degrees: (share - gap).max(0.0),
            };
            cursor += share;
            slice
        })
        .collect()
}

/// Sweep of a gauge needle/arc for `value` within `[min, max]`.
pub fn gauge_sweep(value: f64, min: f64, max: f64, total_sweep_degrees: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0) * total_sweep_degrees
}

/// Open circular arc as cubic Béziers.
pub fn arc_path(center: Point, radius: f64, start_degrees: f64, sweep_degrees: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(on_circle(center, radius, start_degrees));
    if sweep_degrees == 0.0 || radius <= 0.0 {
        return path;
    }
    let arc = Arc::new(
        center,
        Vec2::new(radius, radius),
        start_degrees.to_radians(),
        sweep_degrees.to_radians(),
        0.0,
    );
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path
}

#[cfg(test)]
#[path = "../../tests/unit/chart/polar.rs"]
mod tests;
