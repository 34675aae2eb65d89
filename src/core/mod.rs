//! Shared building blocks: the crate error type and run configuration.

pub mod config;
pub mod error;

pub use config::{Config, ConfigOverrides, TemplateOverrides};
pub use error::{Error, Result};
