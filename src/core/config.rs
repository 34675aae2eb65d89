//! Run configuration for construct generation.
//!
//! A [`Config`] can be read from a TOML file and is then overlaid with the
//! values given on the command line. None of these settings change how
//! parameters are rendered, only which report and templates are used and
//! where the result goes.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Class name used when neither the config file nor the CLI names one
pub const DEFAULT_CLASS_NAME: &str = "SsmParamsConstruct";

static CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid class name regex"));

/// Optional replacements for the embedded default templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateOverrides {
    /// Statement template for parameter store parameters
    pub store: Option<PathBuf>,
    /// Statement template for secrets addressed without a string key
    pub secret: Option<PathBuf>,
    /// Statement template for secrets generated into a string key
    pub secret_strkey: Option<PathBuf>,
    /// Skeleton for the generated class file
    pub scaffold: Option<PathBuf>,
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report file; stdin is read when absent
    pub input: Option<PathBuf>,
    /// File the generated construct is written to
    pub output: Option<PathBuf>,
    /// Name of the generated class
    pub class_name: String,
    /// Echo the generated construct on stdout
    pub stdout: bool,
    pub templates: TemplateOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            stdout: false,
            templates: TemplateOverrides::default(),
        }
    }
}

/// Values supplied on the command line. `None` leaves the file value untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub class_name: Option<String>,
    pub stdout: bool,
    pub templates: TemplateOverrides,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML configuration file
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Overlay command line values on top of this configuration
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.input.is_some() {
            self.input = overrides.input;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        if let Some(class_name) = overrides.class_name {
            self.class_name = class_name;
        }
        self.stdout |= overrides.stdout;

        let t = overrides.templates;
        if t.store.is_some() {
            self.templates.store = t.store;
        }
        if t.secret.is_some() {
            self.templates.secret = t.secret;
        }
        if t.secret_strkey.is_some() {
            self.templates.secret_strkey = t.secret_strkey;
        }
        if t.scaffold.is_some() {
            self.templates.scaffold = t.scaffold;
        }
        self
    }

    /// The class name ends up in `export class <name>`, so it must be an identifier
    pub fn validate(&self) -> Result<()> {
        if self.class_name.is_empty() {
            return Err(Error::config("Class name cannot be empty"));
        }
        if !CLASS_NAME_RE.is_match(&self.class_name) {
            return Err(Error::config(format!(
                "Class name '{}' is not a valid identifier",
                self.class_name
            )));
        }
        Ok(())
    }
}
