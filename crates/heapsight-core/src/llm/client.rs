//! Analysis client abstraction

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single text-generation call: corpus plus instructions in, raw text out
///
/// Implementations make exactly one outbound request per call. Retry,
/// backoff and timeouts belong in wrappers around this trait.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Send the request and return the model's raw response text
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String>;
}

#[async_trait]
impl<T: AnalysisClient + ?Sized> AnalysisClient for Arc<T> {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        (**self).analyze(request).await
    }
}

#[async_trait]
impl<T: AnalysisClient + ?Sized> AnalysisClient for Box<T> {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        (**self).analyze(request).await
    }
}

/// One outbound analysis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub corpus: String,
    pub prompt: String,
    pub model: String,
}

impl AnalysisRequest {
    pub fn new(
        corpus: impl Into<String>,
        prompt: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            corpus: corpus.into(),
            prompt: prompt.into(),
            model: model.into(),
        }
    }

    /// Corpus followed directly by the instructions, sent as one user turn
    pub fn user_message(&self) -> String {
        let mut message = String::with_capacity(self.corpus.len() + self.prompt.len());
        message.push_str(&self.corpus);
        message.push_str(&self.prompt);
        message
    }
}

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    #[async_trait]
    impl AnalysisClient for Canned {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_user_message_concatenation() {
        let request = AnalysisRequest::new("<html>dump</html>", "\nAnalyze.", "m");
        assert_eq!(request.user_message(), "<html>dump</html>\nAnalyze.");
    }

    #[test]
    fn test_user_message_empty_corpus() {
        let request = AnalysisRequest::new("", "\nAnalyze.", "m");
        assert_eq!(request.user_message(), "\nAnalyze.");
    }

    #[tokio::test]
    async fn test_wrappers_delegate() {
        let request = AnalysisRequest::new("c", "p", "m");
        let shared: Arc<dyn AnalysisClient> = Arc::new(Canned("shared"));
        let boxed: Box<dyn AnalysisClient> = Box::new(Canned("boxed"));

        assert_eq!(shared.analyze(&request).await.unwrap(), "shared");
        assert_eq!(boxed.analyze(&request).await.unwrap(), "boxed");
    }
}
