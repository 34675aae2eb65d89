//! Placeholder substitution
//!
//! Placeholders look like `{name}` or `{details.tier}`. Whitespace around the
//! key inside the braces is ignored. Keys may contain word characters, `.`
//! and `|`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::value::FlatView;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[ \t]*([\w.|]+)[ \t]*\}").expect("valid placeholder regex"));

/// Replace every placeholder in `template` with its value from `view`.
///
/// Keys missing from the view are replaced by `fallback`. Replacement is a
/// single pass, inserted text is never scanned again.
pub fn substitute(template: &str, view: &FlatView, fallback: &str) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match view.get(&caps[1]) {
            Some(value) => value.resolve(view),
            None => fallback.to_string(),
        })
        .into_owned()
}

/// Keys referenced by the placeholders of `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view() -> FlatView {
        let mut view = FlatView::new();
        view.insert("name", json!("/prod/db"));
        view.insert("index", json!(2));
        view.insert("details.tier", json!("Standard"));
        view.insert("tags", json!({"env": "prod"}));
        view
    }

    #[test]
    fn test_no_placeholders_pass_through() {
        let template = "const x = 1;\nfunction f() {\n  return {};\n}\n";
        assert_eq!(substitute(template, &view(), ""), template);
    }

    #[test]
    fn test_basic_substitution() {
        assert_eq!(
            substitute("const p{index} = '{name}'; // { details.tier }", &view(), ""),
            "const p2 = '/prod/db'; // Standard"
        );
    }

    #[test]
    fn test_missing_key_uses_fallback() {
        assert_eq!(substitute("kms: '{keyid}'", &view(), ""), "kms: ''");
        assert_eq!(substitute("kms: {keyid}", &view(), "undefined"), "kms: undefined");
    }

    #[test]
    fn test_structured_value_is_json() {
        assert_eq!(substitute("tags: {tags}", &view(), ""), r#"tags: {"env":"prod"}"#);
    }

    #[test]
    fn test_computed_value() {
        let mut view = view();
        view.insert_computed("id", |v| {
            json!(format!("Param{}", v.get("index").map(|i| i.resolve(v)).unwrap_or_default()))
        });
        assert_eq!(substitute("'{id}'", &view, ""), "'Param2'");
    }

    #[test]
    fn test_single_pass() {
        let mut view = FlatView::new();
        view.insert("value", json!("{name}"));
        view.insert("name", json!("leak"));
        assert_eq!(substitute("v={value}", &view, ""), "v={name}");
    }

    #[test]
    fn test_is_pure() {
        let template = "{name}-{index}-{missing}";
        let view = view();
        assert_eq!(substitute(template, &view, ""), substitute(template, &view, ""));
    }

    #[test]
    fn test_multiline_braces_are_not_placeholders() {
        let template = "SetupParameters() {\n  name\n}";
        assert_eq!(substitute(template, &view(), ""), template);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("{a} { b.c } {} {d|e}"),
            vec!["a", "b.c", "d|e"]
        );
    }
}
