//! Pure geometry for the inline-SVG chart panels.
//!
//! Angles are measured in degrees, clockwise from 12 o'clock, matching the
//! on-screen orientation of the pie chart.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

/// Upper bound for the bar chart's value axis: the dataset maximum rounded up
/// to a whole number, never below 1.
pub fn value_axis_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .fold(0.0_f64, f64::max)
        .ceil()
        .max(1.0)
}

/// Fraction of the plot height a bar occupies, clamped to `0.0..=1.0`.
pub fn bar_fraction(value: f64, axis_max: f64) -> f64 {
    if axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max).clamp(0.0, 1.0)
}

/// Start/end angle pairs for pie slices, proportional to each value.
///
/// Returns an empty list when the values sum to zero, so an all-zero dataset
/// renders no slices rather than dividing by zero.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angles = Vec::with_capacity(values.len());
    let mut cursor = 0.0;
    for value in values {
        let sweep = (value.max(0.0) / total) * 360.0;
        angles.push((cursor, cursor + sweep));
        cursor += sweep;
    }
    angles
}

/// Point on a circle of radius `r` around `(cx, cy)` at the given angle.
pub fn polar_point(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + r * rad.sin(), cy - r * rad.cos())
}

/// SVG path for a filled pie slice from `start_deg` to `end_deg`.
pub fn arc_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    // A full-circle arc collapses to nothing in SVG; hold just short of 360.
    let end_deg = end_deg.min(start_deg + 359.99);
    let (x1, y1) = polar_point(cx, cy, r, start_deg);
    let (x2, y2) = polar_point(cx, cy, r, end_deg);
    let large_arc = i32::from(end_deg - start_deg > 180.0);
    format!("M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
}

/// Midpoint angle of a slice, for positioning its label.
pub fn mid_angle(start_deg: f64, end_deg: f64) -> f64 {
    (start_deg + end_deg) / 2.0
}

/// Whole-percent label for a slice value, e.g. `"33%"`.
pub fn percent_label(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0%".to_owned();
    }
    format!("{:.0}%", (value / total) * 100.0)
}
