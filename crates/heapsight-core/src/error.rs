//! Error types for heapsight

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeapsightError
pub type Result<T> = std::result::Result<T, HeapsightError>;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
    pub const BACKEND_ERROR: i32 = 4;
}

/// Main error type for heapsight
#[derive(Debug, Error)]
pub enum HeapsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Input document is not valid UTF-8: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Analysis call failed: {0}")]
    AnalysisFailed(String),

    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl HeapsightError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => exit_codes::INVALID_INPUT,
            Self::AnalysisFailed(_) => exit_codes::BACKEND_ERROR,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}

impl From<reqwest::Error> for HeapsightError {
    fn from(err: reqwest::Error) -> Self {
        Self::AnalysisFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            HeapsightError::Config("missing".into()).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            HeapsightError::AnalysisFailed("boom".into()).exit_code(),
            exit_codes::BACKEND_ERROR
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            HeapsightError::Write {
                path: PathBuf::from("out.html"),
                source: io,
            }
            .exit_code(),
            exit_codes::GENERAL_ERROR
        );
    }

    #[test]
    fn test_decode_message_names_file() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = HeapsightError::Decode {
            path: PathBuf::from("/tmp/dump/leak_suspects.html"),
            source: err,
        };
        assert!(err.to_string().contains("leak_suspects.html"));
    }
}
