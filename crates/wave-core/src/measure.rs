//! Arc-length measurement for paths
//!
//! The wave engine only needs two things from a path: its total length and the
//! point found after walking a given distance along it. [`ArcLengthPath`] is that
//! capability; [`PathMeasure`] implements it for kurbo paths.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point};

use crate::error::{Result, WaveError};

/// Accuracy passed to kurbo's arc-length solvers, in path units.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

/// A path that can be walked by arc length.
///
/// Implementations must saturate instead of failing: lengths below zero map to
/// the start point and lengths past [`total_length`](Self::total_length) map to
/// the final point. The sampler relies on this when it overshoots the end.
pub trait ArcLengthPath {
    fn total_length(&self) -> f64;

    fn point_at_length(&self, length: f64) -> Point;
}

impl<T: ArcLengthPath + ?Sized> ArcLengthPath for &T {
    fn total_length(&self) -> f64 {
        (**self).total_length()
    }

    fn point_at_length(&self, length: f64) -> Point {
        (**self).point_at_length(length)
    }
}

#[derive(Clone, Debug)]
struct MeasuredSegment {
    seg: PathSeg,
    /// Distance along the whole path where this segment begins
    offset: f64,
    length: f64,
}

/// Path measurement utility for calculating positions along a path
#[derive(Clone, Debug)]
pub struct PathMeasure {
    segments: Vec<MeasuredSegment>,
    total_length: f64,
    origin: Point,
}

impl PathMeasure {
    /// Create a new path measurer from a Bezier path
    pub fn new(path: &BezPath) -> Self {
        let origin = match path.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => Point::ZERO,
        };

        let mut segments = Vec::new();
        let mut total_length = 0.0;
        for seg in path.segments() {
            let length = seg.arclen(ARCLEN_ACCURACY);
            segments.push(MeasuredSegment {
                seg,
                offset: total_length,
                length,
            });
            total_length += length;
        }

        Self {
            segments,
            total_length,
            origin,
        }
    }

    /// Parse SVG path data and measure it.
    pub fn from_svg(data: &str) -> Result<Self> {
        let path = BezPath::from_svg(data).map_err(|e| WaveError::InvalidPath(e.to_string()))?;
        Ok(Self::new(&path))
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Point where the path starts (first MoveTo).
    pub fn start(&self) -> Point {
        self.origin
    }

    fn locate(seg: &MeasuredSegment, local: f64) -> Point {
        if seg.length <= 0.0 {
            return seg.seg.eval(0.0);
        }
        match seg.seg {
            // Lines are walked exactly instead of through the solver.
            PathSeg::Line(line) => line.p0.lerp(line.p1, local / seg.length),
            _ => {
                let t = seg.seg.inv_arclen(local, ARCLEN_ACCURACY);
                seg.seg.eval(t)
            }
        }
    }
}

impl ArcLengthPath for PathMeasure {
    fn total_length(&self) -> f64 {
        self.total_length
    }

    fn point_at_length(&self, length: f64) -> Point {
        let Some(last) = self.segments.last() else {
            return self.origin;
        };
        // max/min instead of clamp: a NaN total must not panic.
        let length = length.max(0.0).min(self.total_length);

        // First segment whose end reaches the requested distance
        let idx = self
            .segments
            .partition_point(|s| s.offset + s.length < length);
        match self.segments.get(idx) {
            Some(seg) => Self::locate(seg, length - seg.offset),
            None => last.seg.eval(1.0),
        }
    }
}
