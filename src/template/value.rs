//! Values stored in a flattened view

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A derived placeholder, evaluated against the whole view at substitution time
pub type ComputeFn = dyn Fn(&FlatView) -> Value + Send + Sync;

/// A single entry of a [`FlatView`]
#[derive(Clone)]
pub enum FlatValue {
    /// String, number, boolean or null
    Scalar(Value),
    /// Object or array, interpolated as JSON text
    Structured(Value),
    Computed(Arc<ComputeFn>),
}

impl FlatValue {
    /// Classify a JSON value
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => FlatValue::Structured(value),
            scalar => FlatValue::Scalar(scalar),
        }
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&FlatView) -> Value + Send + Sync + 'static,
    {
        FlatValue::Computed(Arc::new(f))
    }

    /// The text a placeholder referring to this value is replaced with
    pub fn resolve(&self, view: &FlatView) -> String {
        match self {
            FlatValue::Scalar(value) | FlatValue::Structured(value) => stringify(value),
            FlatValue::Computed(f) => stringify(&f(view)),
        }
    }
}

/// Strings are inserted bare, everything else in its compact JSON form
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Debug for FlatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatValue::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            FlatValue::Structured(v) => f.debug_tuple("Structured").field(v).finish(),
            FlatValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl PartialEq for FlatValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FlatValue::Scalar(a), FlatValue::Scalar(b)) => a == b,
            (FlatValue::Structured(a), FlatValue::Structured(b)) => a == b,
            (FlatValue::Computed(a), FlatValue::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Value> for FlatValue {
    fn from(value: Value) -> Self {
        FlatValue::from_json(value)
    }
}

/// Dotted path to value lookup table used for placeholder substitution.
///
/// Enumeration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatView {
    entries: HashMap<String, FlatValue>,
}

impl FlatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<FlatValue>) {
        self.entries.insert(path.into(), value.into());
    }

    /// Register a derived placeholder
    pub fn insert_computed<F>(&mut self, path: impl Into<String>, f: F)
    where
        F: Fn(&FlatView) -> Value + Send + Sync + 'static,
    {
        self.entries.insert(path.into(), FlatValue::computed(f));
    }

    pub fn get(&self, path: &str) -> Option<&FlatValue> {
        self.entries.get(path)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
