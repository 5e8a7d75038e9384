//! Periodic waveforms used to displace sampled points
//!
//! A waveform maps a phase in radians and a maximum amplitude to a signed
//! amplitude. Every waveform repeats with a period of 2π.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::WaveError;

pub trait Waveform {
    fn amplitude(&self, phase: f64, max_amplitude: f64) -> f64;
}

/// Any `Fn(phase, max_amplitude) -> amplitude` closure is a waveform, so
/// custom shapes can be passed straight to the engine.
impl<F> Waveform for F
where
    F: Fn(f64, f64) -> f64,
{
    fn amplitude(&self, phase: f64, max_amplitude: f64) -> f64 {
        self(phase, max_amplitude)
    }
}

/// The built-in waveforms, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveShape {
    #[default]
    #[serde(alias = "sin")]
    Sine,
    #[serde(alias = "sawtooth")]
    Saw,
    Square,
}

impl WaveShape {
    pub const ALL: [WaveShape; 3] = [WaveShape::Sine, WaveShape::Saw, WaveShape::Square];

    pub fn name(self) -> &'static str {
        match self {
            WaveShape::Sine => "sine",
            WaveShape::Saw => "saw",
            WaveShape::Square => "square",
        }
    }
}

/// Position within the current period, in `[0, 1)`.
fn cycle_fraction(phase: f64) -> f64 {
    (phase / TAU).rem_euclid(1.0)
}

impl Waveform for WaveShape {
    fn amplitude(&self, phase: f64, max_amplitude: f64) -> f64 {
        match self {
            WaveShape::Sine => phase.sin() * max_amplitude,
            // Ramp from -amp up to +amp, then drop back.
            WaveShape::Saw => -max_amplitude + cycle_fraction(phase) * max_amplitude * 2.0,
            WaveShape::Square => {
                if cycle_fraction(phase) > 0.5 {
                    -max_amplitude
                } else {
                    max_amplitude
                }
            }
        }
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveShape {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveShape::Sine),
            "saw" | "sawtooth" => Ok(WaveShape::Saw),
            "square" => Ok(WaveShape::Square),
            _ => Err(WaveError::UnknownWaveform(s.to_string())),
        }
    }
}
