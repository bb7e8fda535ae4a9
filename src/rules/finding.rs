use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Identity of every check the tool can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    VersionClassification,
    ReservedDefine,
    LineLength,
    BraceWrapping,
    CastComment,
    ReservedIdentifier,
    Documentation,
}

impl RuleId {
    /// Short human label used in the text report, e.g. `Rule 02`.
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::VersionClassification | Self::ReservedDefine => Some("Rule 01"),
            Self::LineLength => Some("Rule 02"),
            Self::BraceWrapping => Some("Rule 03"),
            Self::CastComment => Some("Rule 05"),
            Self::ReservedIdentifier => Some("Rule 07"),
            Self::Documentation => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VersionClassification => "version-classification",
            Self::ReservedDefine => "reserved-define",
            Self::LineLength => "line-length",
            Self::BraceWrapping => "brace-wrapping",
            Self::CastComment => "cast-comment",
            Self::ReservedIdentifier => "reserved-identifier",
            Self::Documentation => "documentation",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Fail,
    /// The rule could not run at all.
    Skip,
}

/// One pass/fail observation, optionally pinned to a file and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(rule: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn pass(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Pass, message)
    }

    #[must_use]
    pub fn fail(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Fail, message)
    }

    #[must_use]
    pub fn skip(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Skip, message)
    }

    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.severity, Severity::Pass)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.severity, Severity::Fail)
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.severity, Severity::Skip)
    }
}
