//! Error types for the generation domain

use crate::scaffold::ScaffoldError;
use thiserror::Error;

/// Errors that abort construct generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Unknown parameter type '{kind}' for parameter '{name}'")]
    UnknownParameterType { name: String, kind: String },

    #[error("Scaffold error: {0}")]
    Scaffold(#[from] ScaffoldError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
