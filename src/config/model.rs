use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Corpus discovery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: false, every source file is checked)
    #[serde(default)]
    pub gitignore: bool,

    /// Glob patterns, relative to the library root, of files to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// How the style oracle is invoked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before `-style=...`.
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeywordsConfig {
    /// Replacement for the packaged keyword table.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub keywords: KeywordsConfig,
}

fn default_command() -> String {
    crate::oracle::DEFAULT_COMMAND.to_string()
}

const fn default_timeout_secs() -> u64 {
    crate::oracle::DEFAULT_TIMEOUT.as_secs()
}
