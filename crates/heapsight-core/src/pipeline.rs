//! End-to-end analysis run
//!
//! collect -> join -> prompt -> analyze -> extract -> write, strictly in
//! sequence. The output file is only touched after every earlier step
//! succeeded.

use crate::collector::{collect_documents, join_corpus};
use crate::config::AnalysisConfig;
use crate::error::{HeapsightError, Result};
use crate::extract::extract_report;
use crate::llm::{AnalysisClient, AnalysisRequest};
use crate::prompt::{analysis_prompt, PROMPT_VERSION};
use std::path::PathBuf;

/// Callback receiving the raw model response before extraction
pub type ResponseObserver = Box<dyn Fn(&str) + Send + Sync>;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Number of input documents in the corpus
    pub documents: usize,
    /// Where the report was written
    pub output_path: PathBuf,
    /// Unmodified backend response
    pub raw_response: String,
    /// Whether an HTML document span was found
    pub extracted: bool,
}

/// Analysis pipeline bound to one configuration and one client
pub struct Pipeline<C: AnalysisClient> {
    config: AnalysisConfig,
    client: C,
    observer: Option<ResponseObserver>,
}

impl<C: AnalysisClient> Pipeline<C> {
    pub fn new(config: AnalysisConfig, client: C) -> Self {
        Self {
            config,
            client,
            observer: None,
        }
    }

    /// Observe the raw response, e.g. to echo it on the console
    pub fn with_response_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Run the pipeline once; nothing is cached between runs
    pub async fn run(&self) -> Result<PipelineReport> {
        let documents = collect_documents(self.config.input_dir.as_deref())?;
        let corpus = join_corpus(&documents);

        let request = AnalysisRequest::new(corpus, analysis_prompt(), self.config.model.as_str());
        tracing::debug!(
            "Built analysis request: {} document(s), prompt v{}",
            documents.len(),
            PROMPT_VERSION
        );

        let raw_response = self.client.analyze(&request).await?;

        if let Some(ref observer) = self.observer {
            observer(&raw_response);
        }

        let extraction = extract_report(&raw_response);
        if !extraction.is_document() {
            tracing::warn!("No HTML document found in response, saving it verbatim");
        }

        let output_path = self.config.output_path.clone();
        std::fs::write(&output_path, extraction.as_str()).map_err(|source| {
            HeapsightError::Write {
                path: output_path.clone(),
                source,
            }
        })?;

        tracing::info!("Report written to {}", output_path.display());

        Ok(PipelineReport {
            documents: documents.len(),
            output_path,
            extracted: extraction.is_document(),
            raw_response,
        })
    }
}
