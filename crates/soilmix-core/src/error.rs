use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SoilmixError {
    #[error("no data available: take a sensor reading first")]
    MissingReading,

    #[error("invalid fertilizer amount: {0}. Enter a positive number of liters")]
    InvalidAmount(String),

    #[error("invalid nutrient reading: {0}")]
    InvalidReading(String),

    #[error("sensor read failed: {0}")]
    Sensor(String),

    #[error("failed to load reference data from {path}: {reason}")]
    ReferenceLoad { path: PathBuf, reason: String },

    #[error("invalid reference data: {0}")]
    ReferenceInvalid(String),

    #[error("unknown {kind} '{name}'")]
    UnknownEntry { kind: &'static str, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
