//! chartpath is the geometry layer behind line, area, radar, donut and gauge charts.
//!
//! It turns an ordered series of samples into smooth paths, measures those paths by
//! arc length, and interpolates the logical values a tooltip should show while a
//! user scrubs across the chart.
//!
//! # Pipeline overview
//!
//! 1. **Map**: `[Sample] + Size -> [Point]` ([`map_to_viewport`])
//! 2. **Build**: `[Point] -> BezPath` of midpoint-controlled cubics ([`build_smooth_path`])
//! 3. **Measure**: `BezPath -> PathMeasure` for positions, reveal prefixes and
//!    highlighted ranges by arc length ([`point_at_progress`], [`segment_between`],
//!    [`animated_prefix`])
//! 4. **Read out**: `[Sample] + progress -> value/label` by sample index
//!    ([`interpolate_value`], [`closest_sample_index`], [`scrub`])
//!
//! Design constraints:
//!
//! - **Total functions**: geometry and interpolation never fail. Empty and
//!   single-sample inputs return documented sentinels so a render pass is never
//!   interrupted.
//! - **Stateless**: everything is recomputed from fresh inputs each frame; nothing
//!   is cached between calls, so every function is reentrant.
//! - **Two notions of progress**: positions use arc length along the drawn curve,
//!   values use sample index. They agree only at the ends.
//! - **No unsafe**: `unsafe` is forbidden in this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod curve;
mod foundation;
mod reorder;

pub use chart::mapping::{ValueRange, map_to_viewport};
pub use chart::polar::{
    DonutSlice, TOP_DEGREES, arc_path, donut_sweeps, gauge_sweep, radar_path, radar_vertices,
};
pub use chart::scrub::{ScrubReadout, scrub, scrub_with_settings};
pub use curve::builder::{build_fill_path, build_smooth_path};
pub use curve::interpolate::{
    closest_label, closest_sample_index, interpolate_value, interpolate_values,
};
pub use curve::measure::{
    PathMeasure, animated_prefix, path_length, point_at_progress, segment_between,
};
pub use foundation::core::{BezPath, Point, Sample, SampleSeries, Size, Vec2};
pub use foundation::error::{ChartPathError, ChartPathResult};
pub use foundation::math::clamp_progress;
pub use foundation::settings::{CurveSettings, DEFAULT_ACCURACY};
pub use reorder::state::{DragEvent, DragState, ReorderList, Transition, drop_target};
