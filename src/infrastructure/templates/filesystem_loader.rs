//! Filesystem-based template loader
//!
//! Every template comes from its override file when one is configured and
//! from the default repository otherwise.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::application::{ApplicationError, TemplateLoader};
use crate::core::TemplateOverrides;
use crate::generation::TemplateSet;
use crate::infrastructure::templates::{TemplateError, TemplateKind, TemplateRepository};
use crate::template::{Template, placeholders};

/// Template loader that layers override files over a default repository
pub struct FileSystemTemplateLoader {
    defaults: Arc<dyn TemplateRepository>,
}

impl FileSystemTemplateLoader {
    pub fn new(defaults: Arc<dyn TemplateRepository>) -> Self {
        Self { defaults }
    }

    async fn load_one(
        &self,
        kind: TemplateKind,
        path: Option<&Path>,
    ) -> Result<Template, TemplateError> {
        match path {
            Some(path) => {
                info!(template = %kind, path = %path.display(), "Using template override");
                let template = load_template_file(path).await?;
                check_placeholders(kind, &template);
                Ok(template)
            }
            None => self.defaults.get(kind),
        }
    }
}

#[async_trait]
impl TemplateLoader for FileSystemTemplateLoader {
    async fn load(&self, overrides: &TemplateOverrides) -> Result<TemplateSet, ApplicationError> {
        Ok(TemplateSet {
            store: self
                .load_one(TemplateKind::Store, overrides.store.as_deref())
                .await?,
            secret: self
                .load_one(TemplateKind::Secret, overrides.secret.as_deref())
                .await?,
            secret_strkey: self
                .load_one(TemplateKind::SecretStrKey, overrides.secret_strkey.as_deref())
                .await?,
            scaffold: self
                .load_one(TemplateKind::Scaffold, overrides.scaffold.as_deref())
                .await?,
        })
    }
}

/// Warn about an override that leaves out the placeholder its kind depends on
fn check_placeholders(kind: TemplateKind, template: &Template) {
    let keys = placeholders(template.source());
    debug!(template = %kind, placeholders = ?keys, "Template override placeholders");

    let required = kind.required_placeholder();
    if !keys.contains(&required) {
        warn!(
            template = %kind,
            placeholder = required,
            "Template override does not reference its required placeholder"
        );
    }
}

/// Read a single template file
pub async fn load_template_file(path: &Path) -> Result<Template, TemplateError> {
    if !path.exists() {
        return Err(TemplateError::not_found(path.to_string_lossy()));
    }

    let content = fs::read_to_string(path).await?;
    Ok(Template::new(content))
}
