//! Heapsight CLI
//!
//! Reads heap-dump analysis exports, asks an LLM for an OOM diagnosis and
//! writes the resulting HTML report.

use anyhow::{Context, Result};
use clap::Parser;
use heapsight_core::error::exit_codes;
use heapsight_core::{AnalysisConfig, HeapsightError, OpenAiClient, Pipeline};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod app;

use app::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<HeapsightError>()
                .map(HeapsightError::exit_code)
                .unwrap_or(exit_codes::GENERAL_ERROR);
            ExitCode::from(code as u8)
        }
    }
}

/// `RUST_LOG` wins when set and valid; otherwise `-v` picks info over warn
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback.as_str()))
}

async fn run(cli: Cli) -> Result<()> {
    let file_config = match cli.config {
        Some(ref path) => AnalysisConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::load_or_default()?,
    };
    let config = cli.apply(file_config);

    let client = OpenAiClient::new(&config.backend)?;

    let mut pipeline = Pipeline::new(config, client);
    if !cli.quiet {
        pipeline = pipeline.with_response_observer(|raw| println!("{}", raw));
    }

    let report = pipeline.run().await?;

    if report.extracted {
        eprintln!(
            "Report written to {} ({} input document(s))",
            report.output_path.display(),
            report.documents
        );
    } else {
        eprintln!(
            "No HTML document in response; raw output written to {}",
            report.output_path.display()
        );
    }

    Ok(())
}
