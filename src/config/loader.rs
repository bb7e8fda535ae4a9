use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{CONFIG_VERSION, Config};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration for a library rooted at `root`.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".arduino-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(GuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.arduino-guard.toml` in the library root
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<Config> {
        let local = root.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }

        if let Some(user) = self.user_config_path()
            && self.fs.exists(&user)
        {
            return self.load_from_path(&user);
        }

        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "loading configuration");
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| GuardError::file_access(path, e))?;
        Self::parse_config(&content).map_err(|e| match e {
            GuardError::TomlParse(inner) => {
                GuardError::Config(format!("{}: {inner}", path.display()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
