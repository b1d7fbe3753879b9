//! Smooth line paths through chart points.

use crate::foundation::core::{BezPath, Point};

/// Build a smooth path that passes through every point in order.
///
/// Each pair of neighbours is joined by a cubic whose control points both sit at
/// the horizontal midpoint, the first at the previous point's height and the
/// second at the current point's height. The curve goes through every knot
/// exactly; tangents at the knots are horizontal, so slopes only approximately
/// match across a knot.
///
/// - no points: empty path
/// - one point: a lone `MoveTo`
/// - `n` points: a `MoveTo` followed by `n - 1` cubics
#[tracing::instrument(level = "trace", skip_all, fields(points = points.len()))]
pub fn build_smooth_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };

    path.move_to(first);
    let mut prev = first;
    for &curr in rest {
        let mid_x = (prev.x + curr.x) * 0.5;
        path.curve_to(Point::new(mid_x, prev.y), Point::new(mid_x, curr.y), curr);
        prev = curr;
    }
    path
}

/// Build the closed area under a smooth line, down to `baseline_y`.
///
/// Used for gradient fills below a line chart. Fewer than two points produce an
/// empty path since there is no area to enclose.
pub fn build_fill_path(points: &[Point], baseline_y: f64) -> BezPath {
    let [first, .., last] = points else {
        return BezPath::new();
    };

    let mut path = build_smooth_path(points);
    path.line_to(Point::new(last.x, baseline_y));
    path.line_to(Point::new(first.x, baseline_y));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/curve/builder.rs"]
mod tests;
