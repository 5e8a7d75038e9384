use thiserror::Error;

/// Errors raised at the fallible edges of the engine: parsing settings,
/// waveform names and path data. The outline computation itself never fails.
#[derive(Debug, Error)]
pub enum WaveError {
    #[error("unknown waveform '{0}' (expected one of: sine, saw, square)")]
    UnknownWaveform(String),

    #[error("invalid path data: {0}")]
    InvalidPath(String),

    #[error("invalid wave settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T, E = WaveError> = std::result::Result<T, E>;
