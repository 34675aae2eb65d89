//! File and stdin based report loader
//!
//! This loader handles only I/O and picks the format. The report shape is
//! defined by [`Report`].

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::application::{ApplicationError, ReportLoader};
use crate::report::Report;

/// Encoding of a report document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
}

impl ReportFormat {
    /// YAML for `.yaml` and `.yml` files, JSON for everything else
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ReportFormat::Yaml,
            _ => ReportFormat::Json,
        }
    }
}

/// Parse report text in the given format
pub fn parse_report(content: &str, format: ReportFormat) -> crate::core::Result<Report> {
    let report = match format {
        ReportFormat::Json => Report::from_json(content)?,
        ReportFormat::Yaml => Report::from_yaml(content)?,
    };
    Ok(report)
}

/// Loads reports from a file, or from stdin when no file is given
pub struct FileReportLoader;

impl FileReportLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReportLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportLoader for FileReportLoader {
    async fn load(&self, path: Option<&Path>) -> Result<Report, ApplicationError> {
        let (content, format, source) = match path {
            Some(path) => {
                let content = fs::read_to_string(path).await.map_err(|e| {
                    ApplicationError::InputError(format!(
                        "Failed to read report {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                (content, ReportFormat::from_path(path), path.display().to_string())
            }
            None => {
                let mut content = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut content)
                    .await
                    .map_err(|e| {
                        ApplicationError::InputError(format!("Failed to read report from stdin: {e}"))
                    })?;
                (content, ReportFormat::Json, "stdin".to_string())
            }
        };

        let report = parse_report(&content, format)?;
        info!(source = %source, parameters = report.len(), "Loaded parameter report");
        Ok(report)
    }
}
