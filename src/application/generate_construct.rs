//! Use case for generating a construct from a parameter report

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{
    ApplicationError, GenerateConstructRequest, GenerateConstructResponse, OutputService,
    ReportLoader, TemplateLoader,
};
use crate::generation::Emitter;

/// Use case for generating construct source
pub struct GenerateConstructUseCase {
    report_loader: Arc<dyn ReportLoader>,
    template_loader: Arc<dyn TemplateLoader>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateConstructUseCase {
    pub fn new(
        report_loader: Arc<dyn ReportLoader>,
        template_loader: Arc<dyn TemplateLoader>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            report_loader,
            template_loader,
            output_service,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateConstructRequest,
    ) -> Result<GenerateConstructResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;
        let config = request.config;

        // 2. Load report
        let report = self.report_loader.load(config.input.as_deref()).await?;
        if report.is_empty() {
            warn!("Report contains no parameters");
        }

        // 3. Load templates
        let templates = self.template_loader.load(&config.templates).await?;

        // 4. Emit the whole construct before anything is written
        let construct = Emitter::new(templates, &config.class_name).emit(&report)?;

        // 5. Write output
        if let Some(path) = &config.output {
            self.output_service
                .write_source(path, &construct.source)
                .await?;
            info!(path = %path.display(), "Wrote construct");
        }

        Ok(GenerateConstructResponse {
            construct,
            output_path: config.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, TemplateOverrides};
    use crate::generation::{GenerationError, TemplateSet};
    use crate::report::Report;
    use crate::template::Template;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tracing_test::traced_test;

    struct MockReportLoader(&'static str);

    #[async_trait]
    impl ReportLoader for MockReportLoader {
        async fn load(&self, _path: Option<&Path>) -> Result<Report, ApplicationError> {
            Ok(Report::from_json(self.0).map_err(crate::core::Error::from)?)
        }
    }

    struct MockTemplateLoader;

    #[async_trait]
    impl TemplateLoader for MockTemplateLoader {
        async fn load(
            &self,
            _overrides: &TemplateOverrides,
        ) -> Result<TemplateSet, ApplicationError> {
            Ok(TemplateSet {
                store: Template::new("pms{index}('{name}');"),
                secret: Template::new("asm{index}('{name}');"),
                secret_strkey: Template::new("asmgk{index}('{name}');"),
                scaffold: Template::new(
                    "class {classname} {\n  SetupParameters() {\n  }\n  SetupSecrets() {\n  }\n}\n",
                ),
            })
        }
    }

    #[derive(Default)]
    struct RecordingOutputService {
        written: Mutex<Vec<(PathBuf, String)>>,
    }

    #[async_trait]
    impl OutputService for RecordingOutputService {
        async fn write_source(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    fn use_case(
        report: &'static str,
        output: Arc<RecordingOutputService>,
    ) -> GenerateConstructUseCase {
        GenerateConstructUseCase::new(
            Arc::new(MockReportLoader(report)),
            Arc::new(MockTemplateLoader),
            output,
        )
    }

    fn config(output: Option<&str>) -> Config {
        Config {
            output: output.map(PathBuf::from),
            class_name: "Params".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_execute_writes_output() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(
            r#"{"parameters": [
                {"type": "parameter-store", "name": "/a"},
                {"type": "secrets-manager", "name": "/b"}
            ]}"#,
            output.clone(),
        );

        let response = use_case
            .execute(GenerateConstructRequest::new(config(Some("/out/params.ts"))))
            .await
            .unwrap();

        assert_eq!(response.output_path, Some(PathBuf::from("/out/params.ts")));
        assert_eq!(response.construct.parameter_count, 1);
        assert_eq!(response.construct.secret_count, 1);

        let written = output.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("/out/params.ts"));
        assert_eq!(
            written[0].1,
            "class Params {\n  SetupParameters() {\n    pms0('/a');\n  }\n  SetupSecrets() {\n    asm0('/b');\n  }\n}\n"
        );
    }

    #[tokio::test]
    async fn test_execute_without_output_path() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(r#"{"parameters": []}"#, output.clone());

        let response = use_case
            .execute(GenerateConstructRequest::new(config(None)))
            .await
            .unwrap();

        assert!(response.output_path.is_none());
        assert!(response.construct.source.starts_with("class Params {"));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_kind_writes_nothing() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(
            r#"{"parameters": [
                {"type": "parameter-store", "name": "/a"},
                {"type": "s3-bucket", "name": "/c"}
            ]}"#,
            output.clone(),
        );

        let err = use_case
            .execute(GenerateConstructRequest::new(config(Some("/out/params.ts"))))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::GenerationError(GenerationError::UnknownParameterType { .. })
        ));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_class_name_is_rejected() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(r#"{"parameters": []}"#, output.clone());
        let mut config = config(Some("/out/params.ts"));
        config.class_name = "not a class".to_string();

        let err = use_case
            .execute(GenerateConstructRequest::new(config))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Core(_)));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_empty_report_is_logged() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(r#"{"parameters": []}"#, output);

        use_case
            .execute(GenerateConstructRequest::new(config(None)))
            .await
            .unwrap();

        assert!(logs_contain("Report contains no parameters"));
    }
}
