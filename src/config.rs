//! Settings resolution for the CLI: defaults, then an optional JSON file,
//! then command-line overrides.

use anyhow::{Context, Result};
use std::path::Path;
use wave_core::{SamplingMode, WaveSettings, WaveShape};

/// Values given on the command line. `None` keeps the file/default value.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub frequency: Option<f64>,
    pub amplitude: Option<f64>,
    pub phase: Option<f64>,
    pub resolution: Option<f64>,
    pub subdivisions: Option<i64>,
    pub decimals: Option<u32>,
    pub wave: Option<WaveShape>,
}

pub fn load_settings(path: Option<&Path>) -> Result<WaveSettings> {
    let Some(path) = path else {
        return Ok(WaveSettings::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let settings = WaveSettings::from_json(&json)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn apply_overrides(mut settings: WaveSettings, overrides: &Overrides) -> WaveSettings {
    if let Some(frequency) = overrides.frequency {
        settings.frequency = frequency;
    }
    if let Some(amplitude) = overrides.amplitude {
        settings.max_amplitude = amplitude;
    }
    if let Some(phase) = overrides.phase {
        settings.phase = phase;
    }
    // clap keeps these two exclusive
    if let Some(resolution) = overrides.resolution {
        settings.sampling = SamplingMode::Resolution(resolution);
    }
    if let Some(subdivisions) = overrides.subdivisions {
        settings.sampling = SamplingMode::Subdivisions(subdivisions);
    }
    if let Some(decimals) = overrides.decimals {
        settings.point_decimals = Some(decimals);
    }
    if let Some(wave) = overrides.wave {
        settings.waveform = wave;
    }
    settings
}

pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<WaveSettings> {
    Ok(apply_overrides(load_settings(path)?, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let settings = resolve(None, &Overrides::default()).unwrap();
        assert_eq!(settings, WaveSettings::default());
    }

    #[test]
    fn test_file_values_are_loaded() {
        let file = write_settings(r#"{ "frequency": 3, "sampling": { "subdivisions": 40 } }"#);
        let settings = resolve(Some(file.path()), &Overrides::default()).unwrap();
        assert_eq!(settings.frequency, 3.0);
        assert_eq!(settings.sampling, SamplingMode::Subdivisions(40));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = write_settings(
            r#"{ "frequency": 3, "max_amplitude": 1, "sampling": { "subdivisions": 40 } }"#,
        );
        let overrides = Overrides {
            frequency: Some(7.5),
            resolution: Some(0.5),
            decimals: Some(2),
            wave: Some(WaveShape::Saw),
            ..Overrides::default()
        };
        let settings = resolve(Some(file.path()), &overrides).unwrap();
        assert_eq!(settings.frequency, 7.5);
        assert_eq!(settings.max_amplitude, 1.0);
        assert_eq!(settings.sampling, SamplingMode::Resolution(0.5));
        assert_eq!(settings.point_decimals, Some(2));
        assert_eq!(settings.waveform, WaveShape::Saw);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = resolve(Some(Path::new("/nonexistent/wave.json")), &Overrides::default())
            .unwrap_err();
        assert!(format!("{:?}", err).contains("Failed to read settings file: /nonexistent/wave.json"));
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let file = write_settings(r#"{ "waveform": "triangle" }"#);
        let err = resolve(Some(file.path()), &Overrides::default()).unwrap_err();
        let msg = format!("{:?}", err);
        assert!(msg.contains("Failed to parse settings file"));
        assert!(msg.contains("invalid wave settings"));
    }
}
