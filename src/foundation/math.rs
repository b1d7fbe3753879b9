/// Distance below which a fractional sample index is treated as sitting on a knot.
pub(crate) const KNOT_SNAP_EPSILON: f64 = 1e-9;

/// Clamp a progress fraction into `[0, 1]`. NaN maps to `0.0`.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Snap `x` to the nearest integer when it is within [`KNOT_SNAP_EPSILON`] of it.
pub(crate) fn snap_to_integer(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() <= KNOT_SNAP_EPSILON {
        r
    } else {
        x
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
