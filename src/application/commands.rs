//! Request and response types for the application layer

use std::path::PathBuf;

use crate::core::Config;
use crate::generation::GeneratedConstruct;

/// Request to generate a construct from a report
#[derive(Debug, Clone)]
pub struct GenerateConstructRequest {
    pub config: Config,
}

impl GenerateConstructRequest {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn validate(&self) -> crate::core::Result<()> {
        self.config.validate()
    }
}

/// Response from construct generation
#[derive(Debug, Clone)]
pub struct GenerateConstructResponse {
    pub construct: GeneratedConstruct,
    /// File the source was written to, if any
    pub output_path: Option<PathBuf>,
}
