//! HTTP client for OpenAI-compatible chat completion services

use super::{AnalysisClient, AnalysisRequest, ChatMessage};
use crate::config::BackendConfig;
use crate::error::{HeapsightError, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// OpenAI-compatible client (OpenAI, DeepSeek, SiliconFlow, vLLM, ...)
pub struct OpenAiClient {
    http_client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl OpenAiClient {
    /// Create new client from configuration
    ///
    /// Fails when the API key is missing or the base URL is not a usable
    /// http(s) URL, so no request is attempted with incomplete settings.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| HeapsightError::Config("API key is required".to_string()))?
            .to_string();

        let endpoint = chat_completions_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| HeapsightError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
            api_key,
        })
    }
}

/// Resolve the chat completions endpoint from a base URL
///
/// `https://host` becomes `https://host/v1/chat/completions`, any other path
/// gets `/chat/completions` appended unless it already ends with it.
pub fn chat_completions_url(base: &str) -> Result<Url> {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return Err(HeapsightError::Config("base URL must not be empty".to_string()));
    }

    let mut url = Url::parse(trimmed)
        .map_err(|e| HeapsightError::Config(format!("invalid base URL {}: {}", trimmed, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(HeapsightError::Config(format!(
            "invalid base URL {}: expected http(s)://host",
            trimmed
        )));
    }

    let path = url.path().trim_end_matches('/').to_string();
    let resolved = if path.ends_with(CHAT_COMPLETIONS_PATH) {
        path
    } else if path.is_empty() {
        format!("/v1{}", CHAT_COMPLETIONS_PATH)
    } else {
        format!("{}{}", path, CHAT_COMPLETIONS_PATH)
    };
    url.set_path(&resolved);

    Ok(url)
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[async_trait]
impl AnalysisClient for OpenAiClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        let start = Instant::now();

        let body = ChatRequest {
            model: &request.model,
            messages: vec![ChatMessage::user(request.user_message())],
        };

        tracing::info!(
            "Requesting analysis from {} (model {}, {} corpus bytes)",
            self.endpoint,
            request.model,
            request.corpus.len()
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(HeapsightError::AnalysisFailed(format!(
                "backend returned HTTP {}: {}",
                status,
                text.trim()
            )));
        }

        let content = parse_chat_response(&text)?;

        tracing::info!(
            "Analysis completed in {} ms ({} response bytes)",
            start.elapsed().as_millis(),
            content.len()
        );

        Ok(content)
    }
}

fn parse_chat_response(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| {
        tracing::debug!("Raw backend response: {}", body);
        HeapsightError::AnalysisFailed(format!("unparsable backend response: {}", e))
    })?;

    if let Some(error) = parsed.error {
        let message = error.message.trim();
        if !message.is_empty() {
            return Err(HeapsightError::AnalysisFailed(format!(
                "backend error: {}",
                message
            )));
        }
    }

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| HeapsightError::AnalysisFailed("no choices in response".to_string()))?
        .message
        .content
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(HeapsightError::AnalysisFailed(
            "empty response content".to_string(),
        ));
    }

    Ok(content)
}
