//! Template management use cases

use std::path::Path;

use crate::application::ApplicationError;
use crate::infrastructure::templates::{TemplateExporter, TemplateKind, TemplateRepository};

/// Use case for listing the embedded templates
pub struct ListTemplatesUseCase<R: TemplateRepository> {
    repository: R,
}

impl<R: TemplateRepository> ListTemplatesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> String {
        let mut output = String::from("Available embedded templates:\n");

        for kind in self.repository.list() {
            output.push_str(&format!("  {}\n", kind.file_name()));
            output.push_str(&format!("    {}\n", kind.description()));
        }

        output.push_str("\nUse 'ssmgen templates export <dir>' to customise them");
        output
    }
}

/// Use case for exporting templates
pub struct ExportTemplatesUseCase<E: TemplateExporter, R: TemplateRepository> {
    exporter: E,
    repository: R,
}

impl<E: TemplateExporter, R: TemplateRepository> ExportTemplatesUseCase<E, R> {
    pub fn new(exporter: E, repository: R) -> Self {
        Self {
            exporter,
            repository,
        }
    }

    pub fn execute_all(&self, output_dir: &Path) -> Result<usize, ApplicationError> {
        self.exporter
            .export_all_templates(output_dir)
            .map_err(|e| ApplicationError::ExportError(e.to_string()))
    }

    /// Export the template stored under `file_name`
    pub fn execute_single(&self, file_name: &str, output_dir: &Path) -> Result<(), ApplicationError> {
        let kind: TemplateKind = file_name.parse()?;
        let template = self.repository.get(kind)?;

        std::fs::create_dir_all(output_dir)
            .and_then(|_| std::fs::write(output_dir.join(kind.file_name()), template.source()))
            .map_err(|e| ApplicationError::ExportError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::templates::{EmbeddedTemplateRepository, TemplateError};
    use tempfile::TempDir;

    #[test]
    fn test_list_names_every_template() {
        let listing = ListTemplatesUseCase::new(EmbeddedTemplateRepository::new()).execute();

        for kind in TemplateKind::all() {
            assert!(listing.contains(kind.file_name()), "missing {kind}");
            assert!(listing.contains(kind.description()));
        }
    }

    #[test]
    fn test_export_all() {
        let temp_dir = TempDir::new().unwrap();
        let use_case = ExportTemplatesUseCase::new(
            EmbeddedTemplateRepository::new(),
            EmbeddedTemplateRepository::new(),
        );

        assert_eq!(use_case.execute_all(temp_dir.path()).unwrap(), 4);
        assert!(temp_dir.path().join("scaffold.ts.txt").exists());
    }

    #[test]
    fn test_export_single() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("custom");
        let use_case = ExportTemplatesUseCase::new(
            EmbeddedTemplateRepository::new(),
            EmbeddedTemplateRepository::new(),
        );

        use_case
            .execute_single("parameter-store.txt", &target)
            .unwrap();

        assert!(target.join("parameter-store.txt").exists());
        assert!(!target.join("scaffold.ts.txt").exists());
    }

    #[test]
    fn test_export_unknown_template() {
        let temp_dir = TempDir::new().unwrap();
        let use_case = ExportTemplatesUseCase::new(
            EmbeddedTemplateRepository::new(),
            EmbeddedTemplateRepository::new(),
        );

        let err = use_case
            .execute_single("pms.txt", temp_dir.path())
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::TemplateError(TemplateError::TemplateNotFound(_))
        ));
    }
}
