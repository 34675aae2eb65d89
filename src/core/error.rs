//! Error handling for the ssmgen code generation library.
//!
//! This module defines the main error type `Error` used by the loading and
//! configuration layers, along with a convenient `Result` type alias. It uses
//! `thiserror` and implements conversions from the common parser error types.
//!
//! # Examples
//!
//! ```
//! use ssmgen::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for ssmgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ssmgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
