//! Engine errors
//!
//! Only boundary operations (config loading, level parsing, resolution
//! construction) can fail. The per-frame path reports through `bool`/`Option`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("marching resolution must be a finite value greater than zero, got {0}")]
    InvalidResolution(f32),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to parse config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid level layout: {0}")]
    InvalidLevel(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
