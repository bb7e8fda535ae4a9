//! Reserved Arduino keyword table.
//!
//! The table ships with the crate as `data/arduino_keywords.csv` and is loaded
//! once per run. The CSV always carries a `keyword,category` header row, which
//! the loader requires and skips.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{GuardError, Result};

const PACKAGED_KEYWORDS: &str = include_str!("../../data/arduino_keywords.csv");
const PACKAGED_ORIGIN: &str = "arduino_keywords.csv";
const HEADER_KEYWORD: &str = "keyword";
const DEFAULT_CATEGORY: &str = "keyword";

/// Immutable keyword → category lookup. Membership is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: IndexMap<String, String>,
}

impl KeywordTable {
    /// Load the table packaged with the crate.
    ///
    /// # Errors
    /// Returns `DataLoad` if the packaged data is malformed.
    pub fn load() -> Result<Self> {
        Self::parse(PACKAGED_KEYWORDS, PACKAGED_ORIGIN)
    }

    /// Load a replacement table from disk.
    ///
    /// # Errors
    /// Returns `DataLoad` if the file is missing or malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GuardError::DataLoad {
            origin: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse CSV text. `origin` names the source in error messages.
    ///
    /// # Errors
    /// Returns `DataLoad` on a missing header, an empty keyword cell, or an empty table.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let malformed = |reason: String| GuardError::DataLoad {
            origin: origin.to_string(),
            reason,
        };

        let mut rows = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        match rows.next() {
            Some((_, header)) if first_cell(header).eq_ignore_ascii_case(HEADER_KEYWORD) => {}
            Some((_, header)) => {
                return Err(malformed(format!(
                    "expected a `{HEADER_KEYWORD}` header row, found `{header}`"
                )));
            }
            None => return Err(malformed("file is empty".to_string())),
        }

        let mut entries = IndexMap::new();
        for (idx, line) in rows {
            let mut cells = line.split(',').map(unquote);
            let keyword = cells.next().unwrap_or_default();
            if keyword.is_empty() {
                return Err(malformed(format!("row {} has an empty keyword", idx + 1)));
            }
            let category = cells
                .next()
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CATEGORY);
            // First category wins for duplicated keywords.
            entries
                .entry(keyword.to_string())
                .or_insert_with(|| category.to_string());
        }

        if entries.is_empty() {
            return Err(malformed("no keywords after the header row".to_string()));
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    #[must_use]
    pub fn category(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn first_cell(line: &str) -> &str {
    unquote(line.split(',').next().unwrap_or_default())
}

fn unquote(cell: &str) -> &str {
    let cell = cell.trim();
    cell.strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(cell)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
