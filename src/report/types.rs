//! Parameter report model
//!
//! The report is produced by the parameter reflection tooling and is trusted:
//! nothing here validates more than the JSON shape itself.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The complete parameter inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub parameters: Vec<Parameter>,
}

impl Report {
    /// Parse a JSON report
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse a YAML report with the same shape as the JSON one
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Kinds of parameters the emitter knows how to provision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// SSM Parameter Store parameter
    ParameterStore,
    /// Secrets Manager secret
    SecretsManager,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::ParameterStore => "parameter-store",
            ParameterKind::SecretsManager => "secrets-manager",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `type` value that is not one of the [`ParameterKind`]s
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter type '{0}'")]
pub struct UnknownParameterKind(pub String);

impl FromStr for ParameterKind {
    type Err = UnknownParameterKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parameter-store" => Ok(ParameterKind::ParameterStore),
            "secrets-manager" => Ok(ParameterKind::SecretsManager),
            _ => Err(UnknownParameterKind(s.to_string())),
        }
    }
}

/// Report key the reflection tool writes the parameter name under
pub const FQNAME_KEY: &str = "fqname";
/// Detail selecting the string key secret template
pub const STRKEY_DETAIL: &str = "strkey";

/// One configuration entry of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Raw kind discriminator, see [`Parameter::kind`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Parameter name. Reports from the reflection tool carry `fqname`
    /// instead, which stays in `extra`; see [`Parameter::qualified_name`].
    #[serde(default)]
    pub name: String,
    /// Key ARN used for encryption, empty for the account default key
    #[serde(rename = "keyid", default)]
    pub key_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeMap<String, String>,
    /// Current value, empty when the report was produced without values
    #[serde(default)]
    pub value: String,
    /// For example `String` or `SecureString`
    #[serde(rename = "valuetype", default)]
    pub value_type: String,
    /// Kind specific settings such as `tier`, `pattern` or `strkey`, kept as
    /// they appear in the report
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
    /// Fields this model does not know about. Templates can still reference them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Parameter {
    /// Resolve the `type` discriminator
    pub fn kind(&self) -> Result<ParameterKind, UnknownParameterKind> {
        self.kind.parse()
    }

    /// `name`, or `fqname` when the report only carries that
    pub fn qualified_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.extra
            .get(FQNAME_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// A single entry of `details`
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }

    /// The `strkey` detail, if present in a recognised shape
    pub fn string_key(&self) -> Option<StringKey> {
        self.detail(STRKEY_DETAIL)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Whether a secret is generated into a JSON string key
    pub fn uses_string_key(&self) -> bool {
        self.string_key().is_some_and(|key| key.is_set())
    }

    /// Every field except `tags`, borrowed from this parameter
    pub fn untagged_view(&self) -> UntaggedParameter<'_> {
        UntaggedParameter {
            kind: &self.kind,
            name: self.qualified_name(),
            key_id: &self.key_id,
            description: &self.description,
            value: &self.value,
            value_type: &self.value_type,
            details: &self.details,
            extra: &self.extra,
        }
    }
}

/// Serializable projection of a [`Parameter`] without its tags
#[derive(Debug, Serialize)]
pub struct UntaggedParameter<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    #[serde(rename = "keyid")]
    key_id: &'a str,
    description: &'a str,
    value: &'a str,
    #[serde(rename = "valuetype")]
    value_type: &'a str,
    details: &'a Option<Map<String, Value>>,
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

/// The `strkey` flag. Reports carry either a boolean or the key name itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringKey {
    Flag(bool),
    Name(String),
}

impl StringKey {
    pub fn is_set(&self) -> bool {
        match self {
            StringKey::Flag(flag) => *flag,
            StringKey::Name(name) => !name.is_empty(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
