use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AquaprobeError {
    #[error("invalid sample '{sample}': {}", .fields.join(", "))]
    InvalidInput { sample: String, fields: Vec<String> },

    #[error("unknown source type '{0}' (expected tap, well, river or other)")]
    UnknownSourceType(String),

    #[error("failed to parse samples: {0}")]
    SampleParse(String),

    #[error("failed to load threshold table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid threshold table: {0}")]
    TableInvalid(String),

    #[error("unknown preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
