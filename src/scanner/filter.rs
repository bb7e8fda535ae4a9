use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{GuardError, Result};

use super::SourceKind;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts `.cpp`, `.h` and `.ino` files that match none of the exclude globs.
pub struct SourceFilter {
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    /// Create a new filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| GuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| GuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        SourceKind::from_path(path).is_some() && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
