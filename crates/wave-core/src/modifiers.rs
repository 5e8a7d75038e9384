use kurbo::BezPath;

use crate::emit::to_bez_path;
use crate::measure::PathMeasure;
use crate::settings::WaveSettings;
use crate::waveform::{WaveShape, Waveform};

pub trait GeometryModifier {
    fn modify(&self, path: &mut BezPath);
}

// ================================================================================================
// Wave
// ================================================================================================

/// Replaces a path with its wave outline, as a polyline.
///
/// The whole path is measured as one, so subpaths are joined into a single
/// wave the same way [`compute_wave_outline`](crate::compute_wave_outline)
/// joins them.
#[derive(Clone, Debug)]
pub struct WaveModifier<W = WaveShape> {
    pub settings: WaveSettings<W>,
}

impl Default for WaveModifier {
    fn default() -> Self {
        Self::new(WaveSettings::default())
    }
}

impl<W> WaveModifier<W> {
    pub fn new(settings: WaveSettings<W>) -> Self {
        Self { settings }
    }
}

impl<W: Waveform> GeometryModifier for WaveModifier<W> {
    fn modify(&self, path: &mut BezPath) {
        let measure = PathMeasure::new(path);
        let points = crate::compute_wave_points(&measure, &self.settings);
        *path = to_bez_path(&points);
    }
}
