//! Template kinds known to the generator

use std::fmt;
use std::str::FromStr;

use crate::infrastructure::templates::TemplateError;
use crate::template::INDEX_KEY;

/// The templates one construct is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Skeleton class file
    Scaffold,
    /// Parameter store statement
    Store,
    /// Secret statement
    Secret,
    /// Secret statement with a generated string key
    SecretStrKey,
}

impl TemplateKind {
    /// All kinds in the order they are listed
    pub fn all() -> [TemplateKind; 4] {
        [
            TemplateKind::Scaffold,
            TemplateKind::Store,
            TemplateKind::Secret,
            TemplateKind::SecretStrKey,
        ]
    }

    /// File name of the embedded default
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Scaffold => "scaffold.ts.txt",
            TemplateKind::Store => "parameter-store.txt",
            TemplateKind::Secret => "secrets-manager.txt",
            TemplateKind::SecretStrKey => "secrets-manager-strkey.txt",
        }
    }

    /// Placeholder a template of this kind has to reference to produce
    /// usable source
    pub fn required_placeholder(&self) -> &'static str {
        match self {
            TemplateKind::Scaffold => "classname",
            _ => INDEX_KEY,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Scaffold => "Construct class with SetupParameters and SetupSecrets",
            TemplateKind::Store => "ssm.CfnParameter statement for parameter-store entries",
            TemplateKind::Secret => "secretsmanager.CfnSecret statement for secrets-manager entries",
            TemplateKind::SecretStrKey => {
                "secretsmanager.CfnSecret statement generating a secret into a string key"
            }
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::all()
            .into_iter()
            .find(|kind| kind.file_name() == s)
            .ok_or_else(|| TemplateError::not_found(s))
    }
}
