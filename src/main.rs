//! ssmgen CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use ssmgen::application::{
    ExportTemplatesUseCase, GenerateConstructRequest, GenerateConstructUseCase,
    ListTemplatesUseCase,
};
use ssmgen::core::{Config, ConfigOverrides, TemplateOverrides};
use ssmgen::infrastructure::{
    EmbeddedTemplateRepository, FileReportLoader, FileSystemOutputService,
    FileSystemTemplateLoader,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ssmgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a CDK construct from a parameter report
    Generate {
        /// Report file to read instead of stdin (.json, .yaml or .yml)
        #[arg(short = 'i', long)]
        infile: Option<PathBuf>,
        /// File to write the generated construct to
        #[arg(short = 'o', long)]
        outfile: Option<PathBuf>,
        /// Print the generated construct to stdout. May be combined with --outfile
        #[arg(long)]
        stdout: bool,
        /// Class name of the generated construct
        #[arg(short = 'c', long)]
        clsname: Option<String>,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Template for parameter-store entries
        #[arg(long)]
        store_template: Option<PathBuf>,
        /// Template for secrets-manager entries
        #[arg(long)]
        secret_template: Option<PathBuf>,
        /// Template for secrets-manager entries with a string key
        #[arg(long)]
        secret_strkey_template: Option<PathBuf>,
        /// Template for the construct class
        #[arg(long)]
        scaffold_template: Option<PathBuf>,
    },
    /// Manage the default templates
    Templates {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum TemplateCommands {
    /// List the embedded templates
    List,
    /// Export the embedded templates for customisation
    Export {
        /// Directory to export into
        dir: PathBuf,
        /// Export only this template, e.g. parameter-store.txt
        #[arg(long)]
        template: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO. Logs go to stderr so the
    // generated source can be piped from stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "Parsed command line");

    match cli.command {
        Commands::Generate {
            infile,
            outfile,
            stdout,
            clsname,
            config,
            store_template,
            secret_template,
            secret_strkey_template,
            scaffold_template,
        } => {
            let base = match &config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            let config = base.merge(ConfigOverrides {
                input: infile,
                output: outfile,
                class_name: clsname,
                stdout,
                templates: TemplateOverrides {
                    store: store_template,
                    secret: secret_template,
                    secret_strkey: secret_strkey_template,
                    scaffold: scaffold_template,
                },
            });

            let print = config.stdout;
            if !print && config.output.is_none() {
                warn!("Neither --outfile nor --stdout given, nothing is written");
            }

            let use_case = GenerateConstructUseCase::new(
                Arc::new(FileReportLoader::new()),
                Arc::new(FileSystemTemplateLoader::new(Arc::new(
                    EmbeddedTemplateRepository::new(),
                ))),
                Arc::new(FileSystemOutputService::new()),
            );
            let response = use_case
                .execute(GenerateConstructRequest::new(config))
                .await
                .context("Failed to generate construct")?;

            if print {
                let mut out = std::io::stdout().lock();
                out.write_all(response.construct.source.as_bytes())
                    .context("Failed to write construct to stdout")?;
                out.flush()?;
            }

            info!(
                class_name = %response.construct.class_name,
                parameters = response.construct.parameter_count,
                secrets = response.construct.secret_count,
                "Generation complete"
            );
        }
        Commands::Templates { command } => match command {
            TemplateCommands::List => {
                let use_case = ListTemplatesUseCase::new(EmbeddedTemplateRepository::new());
                println!("{}", use_case.execute());
            }
            TemplateCommands::Export { dir, template } => {
                let use_case = ExportTemplatesUseCase::new(
                    EmbeddedTemplateRepository::new(),
                    EmbeddedTemplateRepository::new(),
                );
                match template {
                    Some(name) => {
                        use_case
                            .execute_single(&name, &dir)
                            .with_context(|| format!("Failed to export template {name}"))?;
                        println!("Exported {} to {}", name, dir.display());
                    }
                    None => {
                        let count = use_case
                            .execute_all(&dir)
                            .context("Failed to export templates")?;
                        println!("Exported {} templates to {}", count, dir.display());
                    }
                }
            }
        },
    }

    Ok(())
}
