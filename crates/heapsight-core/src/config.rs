//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default destination of the extracted report
pub const DEFAULT_OUTPUT_PATH: &str = "analysis.html";

/// Default chat model
pub const DEFAULT_MODEL: &str = "deepseek-ai/DeepSeek-R1";

/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory scanned for `.html` exports; unset means an empty corpus
    pub input_dir: Option<PathBuf>,

    /// Destination file for the extracted report
    pub output_path: PathBuf,

    /// Backend model name
    pub model: String,

    /// Backend connection settings
    pub backend: BackendConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_dir: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            model: DEFAULT_MODEL.to_string(),
            backend: BackendConfig::default(),
        }
    }
}

/// Connection settings for the chat completion backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; `/chat/completions` is appended when missing
    pub base_url: String,

    /// Bearer token, required before a request is attempted
    pub api_key: Option<String>,

    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl AnalysisConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_yaml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Load config from default path, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Treat blank values as unset and restore defaults for blank required fields
    pub fn normalized(mut self) -> Self {
        self.input_dir = self
            .input_dir
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty());
        if self.output_path.as_os_str().to_string_lossy().trim().is_empty() {
            self.output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
        }
        if self.model.trim().is_empty() {
            self.model = DEFAULT_MODEL.to_string();
        }
        if self.backend.base_url.trim().is_empty() {
            self.backend.base_url = DEFAULT_BASE_URL.to_string();
        }
        self.backend.api_key = self
            .backend
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }
}
