use rayon::prelude::*;

use super::{Finding, ProjectContext, Rule, RuleId};
use crate::error::{GuardError, Result};
use crate::oracle::StyleOracle;
use crate::scanner::SourceFile;

/// Style handed to the oracle: attached braces everywhere, short blocks allowed,
/// comments left untouched.
pub const BRACE_STYLE: &str = concat!(
    "{BraceWrapping: {AfterClass: false, AfterControlStatement: false, AfterEnum: false, ",
    "AfterFunction: false, AfterNamespace: false, AfterStruct: false, AfterUnion: false, ",
    "AfterExternBlock: false, BeforeCatch: false, BeforeElse: false, IndentBraces: false}, ",
    "AllowShortBlocksOnASingleLine: true, AllowShortIfStatementsOnASingleLine: true, ",
    "AllowShortLoopsOnASingleLine: true, CommentPragmas: \"/\\\\*(.+\\\\n.+)+\\\\*/\", ",
    "ReflowComments: false}"
);

/// Compares each file byte-for-byte against the oracle's reformatting of it.
pub struct BraceWrappingRule<O: StyleOracle> {
    oracle: O,
    style: String,
}

impl<O: StyleOracle> BraceWrappingRule<O> {
    #[must_use]
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            style: BRACE_STYLE.to_string(),
        }
    }

    fn check_one(&self, file: &SourceFile) -> Result<Finding> {
        let original =
            std::fs::read(&file.path).map_err(|e| GuardError::file_access(&file.path, e))?;
        let formatted = self.oracle.format(&file.path, &self.style)?;

        let finding = if formatted.as_bytes() == original.as_slice() {
            Finding::pass(
                RuleId::BraceWrapping,
                format!("All braces in {} are good.", file.path.display()),
            )
        } else {
            Finding::fail(
                RuleId::BraceWrapping,
                format!(
                    "File {} does not have correct brace wrapping.",
                    file.path.display()
                ),
            )
        };
        Ok(finding.with_file(&file.path))
    }
}

impl<O: StyleOracle> Rule for BraceWrappingRule<O> {
    fn id(&self) -> RuleId {
        RuleId::BraceWrapping
    }

    fn evaluate(&self, corpus: &[SourceFile], _ctx: &ProjectContext<'_>) -> Vec<Finding> {
        let outcomes: Vec<(&SourceFile, Result<Finding>)> = corpus
            .par_iter()
            .map(|file| (file, self.check_one(file)))
            .collect();

        // Without a formatter every file would fail the same way; report it once.
        if let Some((_, Err(e))) = outcomes
            .iter()
            .find(|(_, outcome)| matches!(outcome, Err(GuardError::OracleUnavailable { .. })))
        {
            return vec![Finding::skip(
                RuleId::BraceWrapping,
                format!("Brace wrapping not checked: {e}"),
            )];
        }

        outcomes
            .into_iter()
            .map(|(file, outcome)| {
                outcome.unwrap_or_else(|e| {
                    Finding::fail(RuleId::BraceWrapping, e.to_string()).with_file(&file.path)
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "brace_wrapping_tests.rs"]
mod tests;
