//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::core::TemplateOverrides;
use crate::generation::TemplateSet;
use crate::report::Report;

/// Source of parameter reports
#[async_trait]
pub trait ReportLoader: Send + Sync {
    /// Load the report at `path`, or from standard input when there is none
    async fn load(&self, path: Option<&Path>) -> Result<Report, ApplicationError>;
}

/// Source of the templates a generation run uses
#[async_trait]
pub trait TemplateLoader: Send + Sync {
    async fn load(&self, overrides: &TemplateOverrides) -> Result<TemplateSet, ApplicationError>;
}

/// Service for writing generated source to its destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write `content` to `path`, creating parent directories as needed
    async fn write_source(&self, path: &Path, content: &str) -> Result<(), ApplicationError>;
}
