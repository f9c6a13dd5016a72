//! Progress geometry for ring and bar indicators.
//!
//! Pure conversions from solved/total counts to percentages, stroke dash
//! offsets and bar widths. None of these can fail: degenerate inputs
//! (zero totals, over-full buckets) are clamped.

use std::f64::consts::PI;

/// Percentage of `total` covered by `solved`, in `[0, 100]`.
///
/// Returns 0 when `total` is 0. Solved counts above the total are clamped
/// to 100 rather than reported as more than complete.
pub fn progress_percent(solved: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (solved as f64 / total as f64 * 100.0).min(100.0)
}

/// Circumference of a circle with the given radius
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Stroke dash offset that leaves `percent` of a ring drawn.
///
/// 0% yields the full circumference (empty ring), 100% yields 0 (full ring).
pub fn circular_offset(percent: f64, radius: f64) -> f64 {
    (100.0 - clamp_percent(percent)) / 100.0 * circumference(radius)
}

/// Filled width of a linear progress track
pub fn bar_width(percent: f64, track_width: f64) -> f64 {
    percent / 100.0 * track_width
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}
