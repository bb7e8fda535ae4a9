mod brace_wrapping;
mod cast_comment;
mod finding;
mod line_index;
mod line_length;
mod reserved_define;
mod reserved_identifier;
mod source_text;
mod version;

pub use brace_wrapping::{BRACE_STYLE, BraceWrappingRule};
pub use cast_comment::CastCommentRule;
pub use finding::{Finding, RuleId, Severity};
pub use line_index::LineIndex;
pub use line_length::{LineLengthRule, MAX_LINE_LENGTH};
pub use reserved_define::ReservedDefineRule;
pub use reserved_identifier::ReservedIdentifierRule;
pub use version::VersionRule;

use std::path::Path;

use rayon::prelude::*;

use crate::error::{GuardError, Result};
use crate::keywords::KeywordTable;
use crate::project::ProjectMetadata;
use crate::scanner::SourceFile;

/// Inputs shared by every rule of a run. Load failures are kept so the rules that
/// depend on an input can report them.
#[derive(Debug, Clone, Copy)]
pub struct ProjectContext<'a> {
    keywords: std::result::Result<&'a KeywordTable, &'a GuardError>,
    metadata: std::result::Result<&'a ProjectMetadata, &'a GuardError>,
}

impl<'a> ProjectContext<'a> {
    #[must_use]
    pub fn new(keywords: &'a Result<KeywordTable>, metadata: &'a Result<ProjectMetadata>) -> Self {
        Self {
            keywords: keywords.as_ref(),
            metadata: metadata.as_ref(),
        }
    }

    /// # Errors
    /// Returns the error the keyword table failed to load with.
    pub const fn keywords(&self) -> std::result::Result<&'a KeywordTable, &'a GuardError> {
        self.keywords
    }

    /// # Errors
    /// Returns the error `library.properties` failed to load with.
    pub const fn metadata(&self) -> std::result::Result<&'a ProjectMetadata, &'a GuardError> {
        self.metadata
    }
}

/// An independent check over the corpus and/or project metadata.
pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;

    /// Evaluate the rule. Never fails: problems become findings.
    fn evaluate(&self, corpus: &[SourceFile], ctx: &ProjectContext<'_>) -> Vec<Finding>;
}

/// A rule that inspects each file on its own.
pub trait FileRule: Rule {
    /// Findings for one file. Per-file pass findings are included here.
    fn check_file(&self, file: &SourceFile, content: &str, ctx: &ProjectContext<'_>)
    -> Vec<Finding>;

    /// Pass message reported once when no file failed.
    fn corpus_pass_message(&self) -> Option<&'static str> {
        None
    }
}

/// Run a [`FileRule`] over the corpus.
///
/// Files are checked in parallel; findings come back in corpus order so each
/// file's output stays contiguous.
pub fn evaluate_files<R: FileRule + ?Sized>(
    rule: &R,
    corpus: &[SourceFile],
    ctx: &ProjectContext<'_>,
) -> Vec<Finding> {
    let per_file: Vec<Vec<Finding>> = corpus
        .par_iter()
        .map(|file| match read_source(&file.path) {
            Ok(content) => rule.check_file(file, &content, ctx),
            Err(e) => vec![Finding::fail(rule.id(), e.to_string()).with_file(&file.path)],
        })
        .collect();
    let mut findings: Vec<Finding> = per_file.into_iter().flatten().collect();

    if let Some(message) = rule.corpus_pass_message()
        && !findings.iter().any(Finding::is_failed)
    {
        findings.push(Finding::pass(rule.id(), message));
    }
    findings
}

/// Read a source file as text, replacing invalid UTF-8.
///
/// # Errors
/// Returns `FileAccess` if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| GuardError::file_access(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
