//! Core types for the generation domain

use crate::template::Template;

/// The templates one generation run works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Statement for a parameter store parameter
    pub store: Template,
    /// Statement for a secret without a string key
    pub secret: Template,
    /// Statement for a secret generated into a string key
    pub secret_strkey: Template,
    /// Skeleton of the generated class, rendered with `{classname}`
    pub scaffold: Template,
}

/// Result of a successful emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConstruct {
    pub class_name: String,
    /// Final source text
    pub source: String,
    /// Statements emitted into the parameter method
    pub parameter_count: usize,
    /// Statements emitted into the secret method
    pub secret_count: usize,
}
