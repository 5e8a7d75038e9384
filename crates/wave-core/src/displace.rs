//! Moves sampled points along the path normal, and decides where the wave ends.

use kurbo::{Point, Vec2};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::waveform::Waveform;

/// Endpoints closer than this (in path units) mark the source path as closed.
pub const CLOSED_PATH_THRESHOLD: f64 = 2.0;

/// Displace every sample but the last along its normal.
///
/// The tangent at `samples[i]` is estimated from the chord to `samples[i + 1]`
/// and rotated a quarter turn clockwise. The wave phase comes from the sample
/// index, not its arc length, so the result has `samples.len() - 1` points.
/// Fewer than two samples give an empty result.
pub fn displace<W>(
    samples: &[Point],
    frequency: f64,
    phase: f64,
    max_amplitude: f64,
    waveform: &W,
) -> Vec<Point>
where
    W: Waveform + ?Sized,
{
    if samples.len() < 2 {
        return Vec::new();
    }
    let last_index = (samples.len() - 1) as f64;

    samples
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, to) = (pair[0], pair[1]);
            let tangent = (to.y - from.y).atan2(to.x - from.x);
            let normal = tangent - FRAC_PI_2;

            let point_phase = ((i as f64 / last_index) * frequency + phase) * TAU;
            let amplitude = waveform.amplitude(point_phase, max_amplitude);

            let (sin, cos) = normal.sin_cos();
            from + Vec2::new(cos * amplitude, sin * amplitude)
        })
        .collect()
}

/// Pick the point that ends the wave.
///
/// A closed source path closes the wave onto its first displaced point; an
/// open one ends exactly on the last sample. Returns `None` without samples.
pub fn terminal_point(samples: &[Point], displaced: &[Point]) -> Option<Point> {
    let first = *samples.first()?;
    let last = *samples.last()?;

    if first.distance(last) < CLOSED_PATH_THRESHOLD {
        tracing::trace!("source path is closed, closing the wave");
        Some(displaced.first().copied().unwrap_or(first))
    } else {
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::WaveShape;
    use std::cell::RefCell;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            a.distance(b) < EPS,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    fn line(n: usize, step: f64) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * step, 0.0)).collect()
    }

    #[test]
    fn test_output_has_one_point_per_pair() {
        let samples = line(6, 10.0);
        let out = displace(&samples, 1.0, 0.0, 5.0, &WaveShape::Sine);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_short_inputs_short_circuit() {
        assert!(displace(&[], 1.0, 0.0, 5.0, &WaveShape::Sine).is_empty());
        assert!(displace(&[Point::new(1.0, 1.0)], 1.0, 0.0, 5.0, &WaveShape::Sine).is_empty());
    }

    #[test]
    fn test_zero_amplitude_keeps_samples() {
        let samples = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(10.0, -2.0),
            Point::new(12.0, 7.0),
        ];
        let out = displace(&samples, 3.0, 0.25, 0.0, &WaveShape::Square);
        for (d, s) in out.iter().zip(&samples) {
            assert_close(*d, *s);
        }
    }

    #[test]
    fn test_positive_amplitude_moves_clockwise_of_travel() {
        // Travelling along +x, the normal points towards -y.
        let samples = line(3, 10.0);
        let constant = |_phase: f64, amp: f64| amp;
        let out = displace(&samples, 1.0, 0.0, 2.0, &constant);
        assert_close(out[0], Point::new(0.0, -2.0));
        assert_close(out[1], Point::new(10.0, -2.0));

        // Travelling along +y, the normal points towards +x.
        let up = vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)];
        let out = displace(&up, 1.0, 0.0, 2.0, &constant);
        assert_close(out[0], Point::new(2.0, 0.0));
    }

    #[test]
    fn test_phase_follows_sample_index() {
        let samples = line(5, 1.0);
        let seen = RefCell::new(Vec::new());
        let recorder = |phase: f64, _amp: f64| {
            seen.borrow_mut().push(phase);
            0.0
        };
        displace(&samples, 2.0, 0.5, 1.0, &recorder);
        let seen = seen.into_inner();

        let expected: Vec<f64> = (0..4)
            .map(|i| ((i as f64 / 4.0) * 2.0 + 0.5) * TAU)
            .collect();
        assert_eq!(seen.len(), expected.len());
        for (got, want) in seen.iter().zip(&expected) {
            assert!((got - want).abs() < EPS);
        }
    }

    #[test]
    fn test_degenerate_pair_uses_zero_tangent() {
        let samples = vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
        let constant = |_phase: f64, amp: f64| amp;
        let out = displace(&samples, 1.0, 0.0, 1.0, &constant);
        assert_close(out[0], Point::new(5.0, 4.0));
    }

    #[test]
    fn test_terminal_point_for_open_path() {
        let samples = line(3, 10.0);
        let displaced = vec![Point::new(0.0, -1.0), Point::new(10.0, 1.0)];
        assert_eq!(
            terminal_point(&samples, &displaced),
            Some(Point::new(20.0, 0.0))
        );
    }

    #[test]
    fn test_terminal_point_for_closed_path() {
        let samples = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(1.0, 1.0),
        ];
        let displaced = vec![Point::new(0.0, -3.0), Point::new(13.0, 0.0)];
        assert_eq!(
            terminal_point(&samples, &displaced),
            Some(Point::new(0.0, -3.0))
        );
    }

    #[test]
    fn test_terminal_point_threshold_is_exclusive() {
        let samples = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
        let displaced = vec![Point::new(0.0, 5.0)];
        assert_eq!(
            terminal_point(&samples, &displaced),
            Some(Point::new(2.0, 0.0))
        );
    }

    #[test]
    fn test_terminal_point_edge_cases() {
        assert_eq!(terminal_point(&[], &[]), None);
        let single = [Point::new(4.0, 2.0)];
        assert_eq!(terminal_point(&single, &[]), Some(Point::new(4.0, 2.0)));
    }
}
