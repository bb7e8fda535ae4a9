//! `library.properties` handling and architecture classification.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use crate::error::{GuardError, Result};

pub const PROPERTIES_FILE: &str = "library.properties";

/// Language standard ceiling implied by the supported architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CppStandard {
    Cpp11,
    Cpp14,
    Cpp17,
}

impl fmt::Display for CppStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cpp11 => "C++11",
            Self::Cpp14 => "C++14",
            Self::Cpp17 => "C++17",
        };
        f.write_str(name)
    }
}

/// Architecture markers in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchitectureMarker {
    Wildcard,
    RenesasPortenta,
    MbedOpta,
    MbedPortenta,
}

impl ArchitectureMarker {
    pub const ALL: [Self; 4] = [
        Self::Wildcard,
        Self::RenesasPortenta,
        Self::MbedOpta,
        Self::MbedPortenta,
    ];

    /// The literal substring looked for in the properties text.
    #[must_use]
    pub const fn needle(self) -> &'static str {
        match self {
            Self::Wildcard => "architectures=*",
            Self::RenesasPortenta => "renesas_portenta",
            Self::MbedOpta => "mbed_opta",
            Self::MbedPortenta => "mbed_portenta",
        }
    }

    #[must_use]
    pub const fn standard(self) -> CppStandard {
        match self {
            Self::Wildcard => CppStandard::Cpp11,
            Self::RenesasPortenta => CppStandard::Cpp17,
            Self::MbedOpta | Self::MbedPortenta => CppStandard::Cpp14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchitectureError {
    #[error("The architecture is not specified.")]
    NotSpecified,

    #[error("The architecture is not specified unambiguously (found {}).", join_needles(.0))]
    Ambiguous(Vec<ArchitectureMarker>),
}

fn join_needles(markers: &[ArchitectureMarker]) -> String {
    markers
        .iter()
        .map(|m| m.needle())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw contents of `library.properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    path: PathBuf,
    text: String,
}

impl ProjectMetadata {
    /// Read `library.properties` from the project root.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file is missing or unreadable.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(PROPERTIES_FILE);
        let text =
            std::fs::read_to_string(&path).map_err(|e| GuardError::file_access(&path, e))?;
        Ok(Self { path, text })
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from(PROPERTIES_FILE),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `key=value` pairs, later keys overriding earlier ones. Comment lines start with `#`.
    #[must_use]
    pub fn properties(&self) -> IndexMap<&str, &str> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim(), v.trim()))
            .collect()
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key).copied()
    }

    /// Markers present in the text, in checking order.
    #[must_use]
    pub fn markers(&self) -> Vec<ArchitectureMarker> {
        ArchitectureMarker::ALL
            .into_iter()
            .filter(|m| self.text.contains(m.needle()))
            .collect()
    }

    /// Classify the highest supported language standard.
    ///
    /// Exactly one marker must be present.
    ///
    /// # Errors
    /// Returns `NotSpecified` when no marker is present and `Ambiguous` when several are.
    pub fn classify(&self) -> std::result::Result<CppStandard, ArchitectureError> {
        match self.markers().as_slice() {
            [] => Err(ArchitectureError::NotSpecified),
            [marker] => Ok(marker.standard()),
            many => Err(ArchitectureError::Ambiguous(many.to_vec())),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
