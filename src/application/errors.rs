//! Application layer error types

use thiserror::Error;

use crate::generation::GenerationError;
use crate::infrastructure::templates::TemplateError;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Core(#[from] crate::core::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    #[error("Generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}
