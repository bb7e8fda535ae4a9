use regex::Regex;

use super::source_text::split_comment;
use super::{FileRule, Finding, ProjectContext, Rule, RuleId, evaluate_files};
use crate::scanner::SourceFile;

/// Requires every line holding a cast expression to carry a comment on that same line.
///
/// Named casts (`static_cast<...>` and friends) are always recognised. C-style casts
/// are recognised only for scalar type names and `*_t` typedefs, since a bare
/// parenthesised identifier is indistinguishable from a grouped expression without
/// parsing.
pub struct CastCommentRule {
    named_cast: Regex,
    c_style_cast: Regex,
}

impl Default for CastCommentRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CastCommentRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            named_cast: Regex::new(r"\b(?:static_cast|reinterpret_cast|const_cast|dynamic_cast)\s*<")
                .expect("Invalid regex"),
            c_style_cast: Regex::new(
                r"(?:^|[^\w])\(\s*(?:const\s+)?(?:(?:unsigned|signed)\s+)?(?:void|char|short|int|long|float|double|bool|boolean|byte|word|String|[A-Za-z_]\w*_t)(?:\s+(?:int|long))?\s*\**\s*\)\s*[\w(]",
            )
            .expect("Invalid regex"),
        }
    }

    fn has_cast(&self, code: &str) -> bool {
        self.named_cast.is_match(code) || self.c_style_cast.is_match(code)
    }

    /// 1-based number of the first line with an uncommented cast.
    fn first_uncommented_cast(&self, content: &str) -> Option<usize> {
        let mut in_block = false;
        content.lines().enumerate().find_map(|(idx, line)| {
            let split = split_comment(line, &mut in_block);
            (!split.has_comment && self.has_cast(&split.code)).then_some(idx + 1)
        })
    }
}

impl Rule for CastCommentRule {
    fn id(&self) -> RuleId {
        RuleId::CastComment
    }

    fn evaluate(&self, corpus: &[SourceFile], ctx: &ProjectContext<'_>) -> Vec<Finding> {
        evaluate_files(self, corpus, ctx)
    }
}

impl FileRule for CastCommentRule {
    fn check_file(
        &self,
        file: &SourceFile,
        content: &str,
        _ctx: &ProjectContext<'_>,
    ) -> Vec<Finding> {
        let finding = match self.first_uncommented_cast(content) {
            Some(line) => Finding::fail(
                RuleId::CastComment,
                format!(
                    "Found a cast without a comment in {} (first at line {line})",
                    file.path.display()
                ),
            )
            .with_line(line),
            None => Finding::pass(
                RuleId::CastComment,
                format!("All casts in {} have comments.", file.path.display()),
            ),
        };
        vec![finding.with_file(&file.path)]
    }
}

#[cfg(test)]
#[path = "cast_comment_tests.rs"]
mod tests;
