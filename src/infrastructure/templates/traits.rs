//! Traits for template sources

use std::io;
use std::path::Path;

use crate::infrastructure::templates::{TemplateError, TemplateKind};
use crate::template::Template;

/// A source of default templates
pub trait TemplateRepository: Send + Sync {
    /// Kinds this repository can provide
    fn list(&self) -> Vec<TemplateKind>;

    /// Load the template for `kind`
    fn get(&self, kind: TemplateKind) -> Result<Template, TemplateError>;
}

/// Writes templates out so they can be customised
pub trait TemplateExporter: Send + Sync {
    /// Export every template into `output_dir`, returning how many were written
    fn export_all_templates(&self, output_dir: &Path) -> io::Result<usize>;
}
