//! Embedded template repository implementation

use rust_embed::RustEmbed;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use super::{TemplateError, TemplateExporter, TemplateKind, TemplateRepository};
use crate::template::Template;

/// Container for the default templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template repository backed by the embedded defaults
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }

    fn contents(&self, kind: TemplateKind) -> Result<String, TemplateError> {
        let file = EmbeddedTemplates::get(kind.file_name())
            .ok_or_else(|| TemplateError::not_found(kind.file_name()))?;

        String::from_utf8(file.data.into_owned())
            .map_err(|_| TemplateError::InvalidEncoding(kind.file_name().to_string()))
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRepository for EmbeddedTemplateRepository {
    fn list(&self) -> Vec<TemplateKind> {
        TemplateKind::all()
            .into_iter()
            .filter(|kind| EmbeddedTemplates::get(kind.file_name()).is_some())
            .collect()
    }

    fn get(&self, kind: TemplateKind) -> Result<Template, TemplateError> {
        debug!(template = %kind, "Loading embedded template");
        Ok(Template::new(self.contents(kind)?))
    }
}

impl TemplateExporter for EmbeddedTemplateRepository {
    fn export_all_templates(&self, output_dir: &Path) -> io::Result<usize> {
        std::fs::create_dir_all(output_dir)?;

        let mut exported = 0;
        for kind in self.list() {
            let contents = self
                .contents(kind)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            let target = output_dir.join(kind.file_name());
            std::fs::write(&target, contents)?;
            debug!(path = %target.display(), "Exported template");
            exported += 1;
        }

        info!(count = exported, dir = %output_dir.display(), "Exported templates");
        Ok(exported)
    }
}
