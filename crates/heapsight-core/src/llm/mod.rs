//! LLM integration
//!
//! Provides the analysis capability trait and an OpenAI-compatible
//! chat completion client.

mod client;
mod openai;

pub use client::{AnalysisClient, AnalysisRequest, ChatMessage};
pub use openai::{chat_completions_url, OpenAiClient};
