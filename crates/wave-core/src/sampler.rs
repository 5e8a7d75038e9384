//! Walks a path by arc length and collects sample points.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::measure::ArcLengthPath;

/// Smallest spacing accepted in resolution mode. Keeps the walk bounded for
/// zero, negative or tiny resolutions.
pub const MIN_RESOLUTION: f64 = 0.1;

/// Smallest subdivision count accepted in subdivision mode.
pub const MIN_SUBDIVISIONS: i64 = 2;

/// How the sampler spaces points along the path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Fixed arc-length spacing between samples, in path units
    Resolution(f64),
    /// Fixed number of equal subdivisions of the whole path
    Subdivisions(i64),
}

impl Default for SamplingMode {
    fn default() -> Self {
        SamplingMode::Resolution(2.0)
    }
}

/// Sample `path` according to `mode`.
///
/// Returns an empty vec when the path has no (finite) length.
pub fn sample_path<P>(path: &P, mode: SamplingMode) -> Vec<Point>
where
    P: ArcLengthPath + ?Sized,
{
    let length = path.total_length();
    if !(length > 0.0 && length.is_finite()) {
        return Vec::new();
    }

    match mode {
        SamplingMode::Resolution(resolution) => sample_by_resolution(path, length, resolution),
        SamplingMode::Subdivisions(subdivisions) => {
            sample_by_subdivisions(path, length, subdivisions)
        }
    }
}

fn sample_by_resolution<P>(path: &P, length: f64, resolution: f64) -> Vec<Point>
where
    P: ArcLengthPath + ?Sized,
{
    // f64::max also maps NaN to the floor; an infinite step covers the path at once.
    let step = if resolution.is_infinite() {
        length
    } else {
        resolution.max(MIN_RESOLUTION)
    };
    let mut points = Vec::with_capacity(initial_capacity(length, step));

    // Runs one step past the end; the final query saturates at the last point.
    let mut distance = 0.0;
    while distance <= length + step {
        points.push(path.point_at_length(distance));
        distance += step;
    }
    points
}

/// Upper bound for pre-sizing the sample buffer; longer walks grow as needed.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

fn initial_capacity(length: f64, step: f64) -> usize {
    ((length / step) as usize)
        .saturating_add(2)
        .min(MAX_PREALLOCATED_SAMPLES)
}

fn sample_by_subdivisions<P>(path: &P, length: f64, subdivisions: i64) -> Vec<Point>
where
    P: ArcLengthPath + ?Sized,
{
    let count = subdivisions.max(MIN_SUBDIVISIONS);
    (0..=count)
        .map(|i| path.point_at_length((i as f64 / count as f64) * length))
        .collect()
}
