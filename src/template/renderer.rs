//! Parameter aware template rendering

use serde_json::{Value, json};

use super::flatten::{flatten, flatten_value};
use super::substitute::{placeholders, substitute};
use super::value::{FlatValue, FlatView};
use crate::report::Parameter;

/// Key under which the caller supplied counter is exposed to templates
pub const INDEX_KEY: &str = "index";
/// Key under which a parameter's tags are exposed to templates
pub const TAGS_KEY: &str = "tags";
/// Suffix selecting the quoted form of a value, e.g. `{description|json}`
/// renders `"it's"` where `{description}` renders `it's`. A quoted key whose
/// value is null or missing renders `null`.
pub const QUOTED_SUFFIX: &str = "|json";

/// How tags are handed to a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// `{"env":"prod"}`, as parameter store resources expect
    Object,
    /// `[{"key":"env","value":"prod"}]`, as CloudFormation tag lists expect
    KeyValueList,
}

/// An immutable text template with `{placeholder}` markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    fallback: String,
}

impl Template {
    /// Create a template whose missing keys render as empty text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fallback: String::new(),
        }
    }

    /// Replace the text used for keys missing from the view
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flatten `data` and substitute it
    pub fn render(&self, data: &Value) -> String {
        self.render_view(&flatten_value(data))
    }

    /// Substitute an already built view
    pub fn render_view(&self, view: &FlatView) -> String {
        substitute(&self.source, view, &self.fallback)
    }

    /// Render a parameter store parameter. Tags are available as an object.
    pub fn render_indexed(
        &self,
        param: &Parameter,
        index: usize,
    ) -> Result<String, serde_json::Error> {
        let mut view = indexed_view(param, index, TagShape::Object)?;
        self.add_quoted(&mut view);
        Ok(self.render_view(&view))
    }

    /// Render a secret. Tags are available as a list of key/value records.
    pub fn render_indexed_tag_list(
        &self,
        param: &Parameter,
        index: usize,
    ) -> Result<String, serde_json::Error> {
        let mut view = indexed_view(param, index, TagShape::KeyValueList)?;
        self.add_quoted(&mut view);
        Ok(self.render_view(&view))
    }

    /// Register the `|json` keys this template references
    fn add_quoted(&self, view: &mut FlatView) {
        for key in placeholders(&self.source) {
            let Some(source_key) = key.strip_suffix(QUOTED_SUFFIX) else {
                continue;
            };
            if view.contains_key(key) {
                continue;
            }
            let source_key = source_key.to_string();
            view.insert_computed(key, move |view| quoted(view, &source_key));
        }
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::new(source)
    }
}

/// Build the lookup table for an indexed render.
///
/// Everything but the tags is flattened. `index` is added at the top level
/// and the tags are attached whole under `tags`, only when there is at least
/// one of them.
pub fn indexed_view(
    param: &Parameter,
    index: usize,
    shape: TagShape,
) -> Result<FlatView, serde_json::Error> {
    let mut view = match serde_json::to_value(param.untagged_view())? {
        Value::Object(record) => flatten(&record),
        _ => FlatView::new(),
    };

    view.insert(INDEX_KEY, json!(index));

    if !param.tags.is_empty() {
        let tags = match shape {
            TagShape::Object => json!(param.tags),
            TagShape::KeyValueList => Value::Array(
                param
                    .tags
                    .iter()
                    .map(|(key, value)| json!({ "key": key, "value": value }))
                    .collect(),
            ),
        };
        view.insert(TAGS_KEY, FlatValue::Structured(tags));
    }

    Ok(view)
}

/// Double quoted string literal holding the text of `key`, so free text can
/// be pasted into source code without breaking it. `null` stays `null`.
fn quoted(view: &FlatView, key: &str) -> Value {
    match view.get(key) {
        None | Some(FlatValue::Scalar(Value::Null)) => Value::Null,
        Some(value) => Value::String(Value::String(value.resolve(view)).to_string()),
    }
}
