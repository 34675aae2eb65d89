//! Emits the construct source for a parameter report

use serde_json::json;
use tracing::{debug, error, info};

use crate::generation::{GeneratedConstruct, GenerationError, KindCounters, TemplateSet};
use crate::report::{Parameter, ParameterKind, Report};
use crate::scaffold::{MarkerScaffold, SourceScaffold};

/// Scaffold method collecting parameter store statements
pub const PARAMETERS_METHOD: &str = "SetupParameters";
/// Scaffold method collecting secret statements
pub const SECRETS_METHOD: &str = "SetupSecrets";

/// Turns a report into the source of one construct class
#[derive(Debug, Clone)]
pub struct Emitter {
    templates: TemplateSet,
    class_name: String,
}

impl Emitter {
    pub fn new(templates: TemplateSet, class_name: impl Into<String>) -> Self {
        Self {
            templates,
            class_name: class_name.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Render the scaffold for this class name
    pub fn scaffold_source(&self) -> String {
        self.templates
            .scaffold
            .render(&json!({ "classname": self.class_name }))
    }

    /// Generate the construct for `report`.
    ///
    /// Counters start over on every call, so emitting the same report twice
    /// yields the same source.
    pub fn emit(&self, report: &Report) -> Result<GeneratedConstruct, GenerationError> {
        let mut scaffold = MarkerScaffold::new(self.scaffold_source());
        let counters = self.emit_into(report, &mut scaffold)?;

        let construct = GeneratedConstruct {
            class_name: self.class_name.clone(),
            source: scaffold.to_source(),
            parameter_count: counters.count(ParameterKind::ParameterStore),
            secret_count: counters.count(ParameterKind::SecretsManager),
        };

        info!(
            class_name = %construct.class_name,
            parameters = construct.parameter_count,
            secrets = construct.secret_count,
            "Emitted construct"
        );
        Ok(construct)
    }

    /// Append one statement per parameter to `scaffold`, in report order
    pub fn emit_into<S: SourceScaffold>(
        &self,
        report: &Report,
        scaffold: &mut S,
    ) -> Result<KindCounters, GenerationError> {
        let parameters_method = scaffold.method(PARAMETERS_METHOD)?;
        let secrets_method = scaffold.method(SECRETS_METHOD)?;
        let mut counters = KindCounters::new();

        for param in &report.parameters {
            let kind = param.kind().map_err(|e| {
                error!(parameter = %param.qualified_name(), kind = %param.kind, "{e}");
                GenerationError::UnknownParameterType {
                    name: param.qualified_name().to_string(),
                    kind: param.kind.clone(),
                }
            })?;

            let statement = self.render_parameter(param, kind, &mut counters)?;
            let method = match kind {
                ParameterKind::ParameterStore => parameters_method,
                ParameterKind::SecretsManager => secrets_method,
            };
            scaffold.add_statements(method, vec![statement]);
        }

        Ok(counters)
    }

    /// Render the statement for one parameter, taking its index from `counters`
    pub fn render_parameter(
        &self,
        param: &Parameter,
        kind: ParameterKind,
        counters: &mut KindCounters,
    ) -> Result<String, GenerationError> {
        let index = counters.next(kind);
        debug!(parameter = %param.qualified_name(), %kind, index, "Rendering parameter");

        let statement = match kind {
            ParameterKind::ParameterStore => self.templates.store.render_indexed(param, index)?,
            ParameterKind::SecretsManager => {
                let template = if param.uses_string_key() {
                    &self.templates.secret_strkey
                } else {
                    &self.templates.secret
                };
                template.render_indexed_tag_list(param, index)?
            }
        };

        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::ScaffoldError;
    use crate::template::Template;

    const SCAFFOLD: &str = "export class {classname} {
  constructor() {
    this.SetupParameters();
    this.SetupSecrets();
  }

  private SetupParameters() {
  }

  private SetupSecrets() {
  }
}
";

    fn templates() -> TemplateSet {
        TemplateSet {
            store: Template::new("pms{index}({name}, {tags});"),
            secret: Template::new("asm{index}({name}, {tags});"),
            secret_strkey: Template::new("asmgk{index}({name}, {details.strkey}, {tags});"),
            scaffold: Template::new(SCAFFOLD),
        }
    }

    fn report(json: &str) -> Report {
        Report::from_json(json).unwrap()
    }

    #[test]
    fn test_emit_dispatches_by_kind() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(
            r#"{"parameters": [
                {"type": "parameter-store", "name": "A", "tags": {}},
                {"type": "secrets-manager", "name": "B", "details": {"strkey": true}, "tags": {"k": "v"}}
            ]}"#,
        );

        let construct = emitter.emit(&report).unwrap();

        assert_eq!(construct.parameter_count, 1);
        assert_eq!(construct.secret_count, 1);
        assert_eq!(
            construct.source,
            r#"export class Params {
  constructor() {
    this.SetupParameters();
    this.SetupSecrets();
  }

  private SetupParameters() {
    pms0(A, );
  }

  private SetupSecrets() {
    asmgk0(B, true, [{"key":"k","value":"v"}]);
  }
}
"#
        );
    }

    #[test]
    fn test_indices_are_kind_local_and_ordered() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(
            r#"{"parameters": [
                {"type": "secrets-manager", "name": "s1"},
                {"type": "parameter-store", "name": "p1"},
                {"type": "secrets-manager", "name": "s2", "details": {"strkey": ""}},
                {"type": "parameter-store", "name": "p2"},
                {"type": "secrets-manager", "name": "s3"}
            ]}"#,
        );

        let source = emitter.emit(&report).unwrap().source;

        for expected in [
            "pms0(p1, );\n    pms1(p2, );",
            "asm0(s1, );\n    asm1(s2, );\n    asm2(s3, );",
        ] {
            assert!(source.contains(expected), "missing {expected:?} in\n{source}");
        }
    }

    #[test]
    fn test_emit_is_repeatable() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(
            r#"{"parameters": [{"type": "parameter-store", "name": "p1"}, {"type": "parameter-store", "name": "p2"}]}"#,
        );

        assert_eq!(emitter.emit(&report).unwrap(), emitter.emit(&report).unwrap());
    }

    #[test]
    fn test_unknown_kind_aborts() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(
            r#"{"parameters": [
                {"type": "parameter-store", "name": "ok"},
                {"type": "unknown-kind", "name": "bad"}
            ]}"#,
        );

        match emitter.emit(&report).unwrap_err() {
            GenerationError::UnknownParameterType { name, kind } => {
                assert_eq!(name, "bad");
                assert_eq!(kind, "unknown-kind");
            }
            other => panic!("Expected UnknownParameterType, got {other:?}"),
        }
    }

    #[test]
    fn test_scaffold_without_secret_method() {
        let mut set = templates();
        set.scaffold = Template::new("export class {classname} {\n  SetupParameters() {\n  }\n}\n");
        let emitter = Emitter::new(set, "Params");

        let err = emitter.emit(&report(r#"{"parameters": []}"#)).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Scaffold(ScaffoldError::MethodNotFound(ref m)) if m == SECRETS_METHOD
        ));
    }

    #[test]
    fn test_empty_report_keeps_scaffold() {
        let emitter = Emitter::new(templates(), "Params");
        let construct = emitter.emit(&report(r#"{"parameters": []}"#)).unwrap();
        assert_eq!(construct.source, emitter.scaffold_source());
        assert!(construct.source.starts_with("export class Params {"));
    }

    #[test]
    fn test_string_key_next_to_other_details_selects_strkey_template() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(
            r#"{"parameters": [
                {"type": "secrets-manager", "fqname": "/db", "details": {"strkey": "pw", "tier": "Standard"}}
            ]}"#,
        );

        let source = emitter.emit(&report).unwrap().source;
        assert!(source.contains("asmgk0(/db, pw, );"), "{source}");
    }

    #[test]
    fn test_unknown_kind_error_names_fqname() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(r#"{"parameters": [{"type": "sqs", "fqname": "/queue"}]}"#);

        match emitter.emit(&report).unwrap_err() {
            GenerationError::UnknownParameterType { name, .. } => assert_eq!(name, "/queue"),
            other => panic!("Expected UnknownParameterType, got {other:?}"),
        }
    }

    #[test]
    fn test_render_parameter_advances_counter() {
        let emitter = Emitter::new(templates(), "Params");
        let report = report(r#"{"parameters": [{"type": "parameter-store", "name": "p"}]}"#);
        let mut counters = KindCounters::new();
        counters.next(ParameterKind::ParameterStore);

        let statement = emitter
            .render_parameter(&report.parameters[0], ParameterKind::ParameterStore, &mut counters)
            .unwrap();

        assert_eq!(statement, "pms1(p, );");
        assert_eq!(counters.count(ParameterKind::ParameterStore), 2);
        assert_eq!(counters.count(ParameterKind::SecretsManager), 0);
    }
}
