//! Documentation presence checks for a library root.

use std::path::{Path, PathBuf};

use crate::error::GuardError;
use crate::rules::{Finding, RuleId};

/// Paths that must exist, relative to the library root.
pub const REQUIRED_PATHS: [&str; 4] = ["README.md", "docs/README.md", "docs/assets", "docs/api.md"];

/// `(file, literal)` pairs: the file must contain the literal.
pub const REQUIRED_CONTENT: [(&str, &str); 5] = [
    (
        "README.md",
        "📖 For more information about this library please read the documentation [here](./docs/)",
    ),
    ("docs/README.md", "# Features"),
    ("docs/README.md", "# Usage"),
    ("docs/README.md", "# API"),
    ("docs/README.md", "# License"),
];

/// Runs the fixed documentation checks. Each check is independent.
pub struct DocumentationChecker {
    root: PathBuf,
}

impl DocumentationChecker {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// All failures, existence checks first. An empty result means the docs are complete.
    #[must_use]
    pub fn check(&self) -> Vec<Finding> {
        let existence = REQUIRED_PATHS
            .iter()
            .filter_map(|relative| self.check_exists(relative));
        let content = REQUIRED_CONTENT
            .iter()
            .filter_map(|(relative, needle)| self.check_contains(relative, needle));
        existence.chain(content).collect()
    }

    fn check_exists(&self, relative: &str) -> Option<Finding> {
        let path = self.root.join(relative);
        (!path.exists()).then(|| {
            Finding::fail(RuleId::Documentation, format!("{relative} not found."))
                .with_file(Path::new(relative))
        })
    }

    fn check_contains(&self, relative: &str, needle: &str) -> Option<Finding> {
        let path = self.root.join(relative);
        match std::fs::read_to_string(&path) {
            Ok(contents) if contents.contains(needle) => None,
            Ok(_) => Some(
                Finding::fail(
                    RuleId::Documentation,
                    format!("{needle} not found in {relative}"),
                )
                .with_file(Path::new(relative)),
            ),
            Err(e) => Some(
                Finding::fail(
                    RuleId::Documentation,
                    GuardError::file_access(relative, e).to_string(),
                )
                .with_file(Path::new(relative)),
            ),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
