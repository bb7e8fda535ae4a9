//! Fixtures shared by the rule tests.

use std::fs;

use tempfile::TempDir;

use super::ProjectContext;
use crate::error::Result;
use crate::keywords::KeywordTable;
use crate::project::ProjectMetadata;
use crate::scanner::SourceFile;

/// Owns the inputs a [`ProjectContext`] borrows.
pub struct TestContext {
    keywords: Result<KeywordTable>,
    metadata: Result<ProjectMetadata>,
}

impl TestContext {
    /// Packaged keyword table and a wildcard-architecture project.
    pub fn new() -> Self {
        Self {
            keywords: KeywordTable::load(),
            metadata: Ok(ProjectMetadata::from_text("name=Blink\narchitectures=*\n")),
        }
    }

    pub fn with_keywords(csv: &str) -> Self {
        Self {
            keywords: KeywordTable::parse(csv, "test"),
            ..Self::new()
        }
    }

    pub fn with_metadata(text: &str) -> Self {
        Self {
            metadata: Ok(ProjectMetadata::from_text(text)),
            ..Self::new()
        }
    }

    pub fn with_keywords_error(csv: &str) -> Self {
        let keywords = KeywordTable::parse(csv, "test");
        assert!(keywords.is_err(), "fixture expects a malformed table");
        Self {
            keywords,
            ..Self::new()
        }
    }

    pub fn with_missing_metadata(dir: &TempDir) -> Self {
        Self {
            metadata: ProjectMetadata::load(dir.path()),
            ..Self::new()
        }
    }

    pub fn get(&self) -> ProjectContext<'_> {
        ProjectContext::new(&self.keywords, &self.metadata)
    }
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn write_source(name: &str, content: &str) -> (TempDir, SourceFile) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    let file = SourceFile::new(path).unwrap();
    (dir, file)
}
