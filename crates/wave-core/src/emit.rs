//! Rounding and serialization of the final point sequence.

use kurbo::{BezPath, Point};
use std::fmt::Write;

/// Round `value` to `decimals` places, half away from zero.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    if !factor.is_finite() {
        // Beyond f64 precision rounding is a no-op.
        return value;
    }
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round both coordinates of every point. `None` or `Some(0)` leaves the
/// points untouched.
pub fn round_points(points: &[Point], decimals: Option<u32>) -> Vec<Point> {
    match decimals {
        Some(decimals) if decimals > 0 => points
            .iter()
            .map(|p| {
                Point::new(
                    round_to_decimals(p.x, decimals),
                    round_to_decimals(p.y, decimals),
                )
            })
            .collect(),
        _ => points.to_vec(),
    }
}

/// Print -0 as 0.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Serialize points as `M x,y L x,y ...` path data, one space between commands.
pub fn to_path_data(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let command = if i == 0 { 'M' } else { 'L' };
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{}{},{}",
            command,
            normalize_zero(p.x),
            normalize_zero(p.y)
        );
    }
    out
}

/// Build a polyline `BezPath` through the points.
pub fn to_bez_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}
