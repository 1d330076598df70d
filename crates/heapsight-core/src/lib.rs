//! Heapsight Core Library
//!
//! Turns a directory of heap-dump analysis exports into a single
//! LLM-synthesized OOM diagnostic report.
//!
//! # Pipeline
//! - Collect the `.html` reports exported by the memory analyzer
//! - Join them into one corpus and append the fixed analysis prompt
//! - Send a single chat completion request to an OpenAI-compatible backend
//! - Extract the HTML document from the response and write it out

pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod pipeline;
pub mod prompt;

pub use collector::{collect_documents, join_corpus, InputDocument};
pub use config::{AnalysisConfig, BackendConfig};
pub use error::{HeapsightError, Result};
pub use extract::{extract_report, Extraction};
pub use llm::{AnalysisClient, AnalysisRequest, ChatMessage, OpenAiClient};
pub use pipeline::{Pipeline, PipelineReport};
pub use prompt::{analysis_prompt, PROMPT_VERSION};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "heapsight";
