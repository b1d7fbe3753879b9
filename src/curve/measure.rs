//! Arc-length measurement and sampling of paths.
//!
//! Lengths come from [`ParamCurveArclen`], which subdivides each segment until
//! the requested accuracy is reached; chord distance is never used.

use kurbo::{ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathEl, PathSeg};

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::math::clamp_progress;
use crate::foundation::settings::{CurveSettings, DEFAULT_ACCURACY};

#[derive(Clone, Copy, Debug)]
struct MeasuredSeg {
    seg: PathSeg,
    /// Arc length from the path start to this segment's start.
    start: f64,
    len: f64,
}

impl MeasuredSeg {
    fn end(&self) -> f64 {
        self.start + self.len
    }
}

/// A measured path: per-segment arc lengths plus the total.
///
/// Building one measures every segment once; all queries afterwards are
/// lookups plus a single inverse arc-length solve.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    origin: Option<Point>,
    segs: Vec<MeasuredSeg>,
    length: f64,
    accuracy: f64,
}

impl PathMeasure {
    /// Measure `path` with the default accuracy.
    pub fn new(path: &BezPath) -> Self {
        Self::with_settings(path, CurveSettings::default())
    }

    /// Measure `path` with explicit settings.
    ///
    /// Invalid settings fall back to [`DEFAULT_ACCURACY`] so sampling stays total.
    pub fn with_settings(path: &BezPath, settings: CurveSettings) -> Self {
        let accuracy = match settings.validate() {
            Ok(()) => settings.accuracy,
            Err(err) => {
                tracing::warn!(%err, "falling back to default arc-length accuracy");
                DEFAULT_ACCURACY
            }
        };

        let origin = path.elements().iter().find_map(|el| match el {
            PathEl::MoveTo(p) => Some(*p),
            _ => None,
        });

        let mut segs = Vec::new();
        let mut length = 0.0;
        for seg in path.segments() {
            let len = seg.arclen(accuracy);
            segs.push(MeasuredSeg {
                seg,
                start: length,
                len,
            });
            length += len;
        }

        tracing::trace!(segments = segs.len(), length, "measured path");
        Self {
            origin,
            segs,
            length,
            accuracy,
        }
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of drawable segments (the initial `MoveTo` is not one).
    pub fn segment_count(&self) -> usize {
        self.segs.len()
    }

    /// Arc length at the start of the path and at the end of every segment.
    ///
    /// For a smooth chart path these are the positions of the knots.
    pub fn knot_lengths(&self) -> Vec<f64> {
        if self.origin.is_none() && self.segs.is_empty() {
            return Vec::new();
        }
        std::iter::once(0.0)
            .chain(self.segs.iter().map(MeasuredSeg::end))
            .collect()
    }

    /// First point of the path, or [`Point::ORIGIN`] for an empty path.
    pub fn start_point(&self) -> Point {
        self.origin.unwrap_or(Point::ORIGIN)
    }

    /// Point at arc length `distance` from the start, clamped to the path.
    pub fn position_at_length(&self, distance: f64) -> Point {
        match self.locate(distance) {
            Some((s, t)) => s.seg.eval(t),
            None => self.start_point(),
        }
    }

    /// Point at `progress` (clamped to `[0, 1]`) of the total arc length.
    pub fn position_at_progress(&self, progress: f64) -> Point {
        self.position_at_length(clamp_progress(progress) * self.length)
    }

    /// Unit direction of travel at `progress`; zero for paths without segments.
    pub fn tangent_at_progress(&self, progress: f64) -> Vec2 {
        let Some((s, t)) = self.locate(clamp_progress(progress) * self.length) else {
            return Vec2::ZERO;
        };
        let d = match s.seg {
            PathSeg::Line(l) => l.p1 - l.p0,
            PathSeg::Quad(q) => q.deriv().eval(t).to_vec2(),
            PathSeg::Cubic(c) => c.deriv().eval(t).to_vec2(),
        };
        // Cubic derivatives vanish where a control point coincides with an endpoint.
        let d = if d.length() > f64::EPSILON {
            d
        } else {
            s.seg.end() - s.seg.start()
        };
        if d.length() > f64::EPSILON {
            d.normalize()
        } else {
            Vec2::ZERO
        }
    }

    /// Sub-path between two progress fractions of the total arc length.
    ///
    /// Both bounds are clamped; `to <= from` yields an empty path.
    pub fn segment_between(&self, from: f64, to: f64) -> BezPath {
        let from = clamp_progress(from);
        let to = clamp_progress(to);
        if to <= from {
            return BezPath::new();
        }
        self.slice(from * self.length, to * self.length)
    }

    fn slice(&self, d0: f64, d1: f64) -> BezPath {
        let mut out = BezPath::new();
        let mut pen: Option<Point> = None;
        for s in &self.segs {
            if s.len <= 0.0 || s.end() <= d0 || s.start >= d1 {
                continue;
            }
            let t0 = self.param_at(s, d0 - s.start);
            let t1 = self.param_at(s, d1 - s.start);
            let piece = s.seg.subsegment(t0..t1);
            let start = piece.start();
            if pen != Some(start) {
                out.move_to(start);
            }
            out.push(piece.as_path_el());
            pen = Some(piece.end());
        }
        if out.elements().is_empty() {
            if let Some(origin) = self.origin {
                out.move_to(origin);
            }
        }
        out
    }

    fn locate(&self, distance: f64) -> Option<(&MeasuredSeg, f64)> {
        let last = self.segs.len().checked_sub(1)?;
        // `clamp` panics on a NaN bound.
        let d = if distance.is_nan() {
            0.0
        } else {
            distance.max(0.0).min(self.length)
        };
        let idx = self.segs.partition_point(|s| s.end() < d).min(last);
        let s = &self.segs[idx];
        Some((s, self.param_at(s, d - s.start)))
    }

    fn param_at(&self, s: &MeasuredSeg, local: f64) -> f64 {
        if local <= 0.0 || s.len <= 0.0 {
            0.0
        } else if local >= s.len {
            1.0
        } else {
            s.seg.inv_arclen(local, self.accuracy)
        }
    }
}

/// Total arc length of `path`.
pub fn path_length(path: &BezPath) -> f64 {
    PathMeasure::new(path).length()
}

/// Point at `progress` along `path`'s arc length.
///
/// Empty paths return [`Point::ORIGIN`]; single-point paths return that point.
pub fn point_at_progress(path: &BezPath, progress: f64) -> Point {
    PathMeasure::new(path).position_at_progress(progress)
}

/// Sub-path spanning `[from, to]` of `path`'s arc length.
pub fn segment_between(path: &BezPath, from: f64, to: f64) -> BezPath {
    PathMeasure::new(path).segment_between(from, to)
}

/// The revealed part of a left-to-right draw-in animation.
pub fn animated_prefix(path: &BezPath, progress: f64) -> BezPath {
    segment_between(path, 0.0, progress)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/measure.rs"]
mod tests;
