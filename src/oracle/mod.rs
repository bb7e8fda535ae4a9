//! External formatter used as the reference for brace style.

mod clang_format;

pub use clang_format::{ClangFormat, DEFAULT_COMMAND, DEFAULT_TIMEOUT};

use std::path::Path;

use crate::error::Result;

/// Reformats a file under a given style; the output is the expected file content.
pub trait StyleOracle: Send + Sync {
    /// Return the reformatted contents of `path` under `style`.
    ///
    /// # Errors
    /// Returns `OracleUnavailable` if the formatter cannot be started at all,
    /// `OracleTimeout` or `OracleFailed` for per-file failures.
    fn format(&self, path: &Path, style: &str) -> Result<String>;
}

impl<T: StyleOracle + ?Sized> StyleOracle for Box<T> {
    fn format(&self, path: &Path, style: &str) -> Result<String> {
        (**self).format(path, style)
    }
}
