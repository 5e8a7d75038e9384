use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sampler::SamplingMode;
use crate::waveform::WaveShape;

/// Parameters of one wave outline.
///
/// `W` is the waveform; the default is the named [`WaveShape`] set, which is
/// also what the JSON form stores. Use [`WaveSettings::with_waveform`] to swap
/// in a custom shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveSettings<W = WaveShape> {
    /// Wave cycles over one full traversal of the path
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Amplitude scale passed to the waveform, in path units
    #[serde(default = "default_max_amplitude")]
    pub max_amplitude: f64,
    /// Phase offset as a fraction of one cycle, conventionally in `0..1`
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub sampling: SamplingMode,
    /// Decimal places to round output coordinates to
    #[serde(default)]
    pub point_decimals: Option<u32>,
    #[serde(default)]
    pub waveform: W,
}

fn default_frequency() -> f64 {
    10.0
}

fn default_max_amplitude() -> f64 {
    3.0
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            max_amplitude: default_max_amplitude(),
            phase: 0.0,
            sampling: SamplingMode::default(),
            point_decimals: None,
            waveform: WaveShape::default(),
        }
    }
}

impl<W> WaveSettings<W> {
    pub fn with_waveform<V>(self, waveform: V) -> WaveSettings<V> {
        WaveSettings {
            frequency: self.frequency,
            max_amplitude: self.max_amplitude,
            phase: self.phase,
            sampling: self.sampling,
            point_decimals: self.point_decimals,
            waveform,
        }
    }
}

impl WaveSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
