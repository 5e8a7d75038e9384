//! Wave outlines for arbitrary 2D paths
//!
//! A path is sampled by arc length, every sample is pushed along the path
//! normal by a periodic waveform, and the displaced points are emitted as a
//! polyline. The stages are plain functions and can be used on their own:
//!
//! 1. [`sample_path`] walks an [`ArcLengthPath`]
//! 2. [`displace`] moves samples along their normals
//! 3. [`terminal_point`] decides how the wave ends
//! 4. [`round_points`] and [`to_path_data`] produce the output string

pub mod displace;
pub mod emit;
pub mod error;
pub mod measure;
pub mod modifiers;
pub mod sampler;
pub mod settings;
pub mod waveform;

pub use displace::{displace, terminal_point, CLOSED_PATH_THRESHOLD};
pub use emit::{round_points, round_to_decimals, to_bez_path, to_path_data};
pub use error::{Result, WaveError};
pub use kurbo::Point;
pub use measure::{ArcLengthPath, PathMeasure};
pub use modifiers::{GeometryModifier, WaveModifier};
pub use sampler::{sample_path, SamplingMode, MIN_RESOLUTION, MIN_SUBDIVISIONS};
pub use settings::WaveSettings;
pub use waveform::{WaveShape, Waveform};

/// Run the whole pipeline and return the final points, terminal point and
/// rounding included. Empty when the path has no length.
pub fn compute_wave_points<P, W>(path: &P, settings: &WaveSettings<W>) -> Vec<Point>
where
    P: ArcLengthPath + ?Sized,
    W: Waveform,
{
    let samples = sample_path(path, settings.sampling);
    if samples.is_empty() {
        tracing::debug!("path has no length, nothing to wave");
        return Vec::new();
    }

    let mut points = displace(
        &samples,
        settings.frequency,
        settings.phase,
        settings.max_amplitude,
        &settings.waveform,
    );
    let terminal = terminal_point(&samples, &points);
    points.extend(terminal);

    tracing::debug!(
        samples = samples.len(),
        points = points.len(),
        "computed wave points"
    );

    round_points(&points, settings.point_decimals)
}

/// Compute the wave outline of `path` as `M x,y L x,y ...` path data.
///
/// Degenerate paths produce an empty string.
pub fn compute_wave_outline<P, W>(path: &P, settings: &WaveSettings<W>) -> String
where
    P: ArcLengthPath + ?Sized,
    W: Waveform,
{
    to_path_data(&compute_wave_points(path, settings))
}
