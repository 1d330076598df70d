//! CLI argument definitions

use clap::Parser;
use heapsight_core::AnalysisConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heapsight")]
#[command(
    author,
    version,
    about = "Generate an AI-written OOM diagnosis report from heap-dump analysis exports"
)]
pub struct Cli {
    /// Directory containing the analyzer's .html exports
    #[arg(short, long, env = "HTML_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Destination of the generated report [default: analysis.html]
    #[arg(short, long, env = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Backend model name [default: deepseek-ai/DeepSeek-R1]
    #[arg(short, long, env = "MODEL")]
    pub model: Option<String>,

    /// API key for the backend
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenAI-compatible base URL [default: https://api.openai.com/v1]
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long, env = "HEAPSIGHT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// YAML config file (defaults to the user config dir when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not echo the raw model response
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer flags and environment on top of a file-based config
    pub fn apply(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(ref dir) = self.input_dir {
            config.input_dir = Some(dir.clone());
        }
        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        if let Some(ref key) = self.api_key {
            config.backend.api_key = Some(key.clone());
        }
        if let Some(ref url) = self.base_url {
            config.backend.base_url = url.clone();
        }
        if self.timeout_secs.is_some() {
            config.backend.timeout_secs = self.timeout_secs;
        }
        config.normalized()
    }
}
