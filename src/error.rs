use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Failed to load keyword table from {origin}: {reason}")]
    DataLoad { origin: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Style oracle `{command}` could not be started: {source}")]
    OracleUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Style oracle timed out after {}s on {path}", .timeout.as_secs())]
    OracleTimeout { path: PathBuf, timeout: Duration },

    #[error("Style oracle failed on {path}: {message}")]
    OracleFailed { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GuardError {
    /// Shorthand for wrapping an I/O failure on a specific path.
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Returns the error type name for categorization.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::DataLoad { .. } => "DataLoad",
            Self::FileAccess { .. } => "FileAccess",
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::OracleUnavailable { .. } => "OracleUnavailable",
            Self::OracleTimeout { .. } => "OracleTimeout",
            Self::OracleFailed { .. } => "OracleFailed",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
