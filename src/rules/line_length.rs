use super::{FileRule, Finding, ProjectContext, Rule, RuleId, evaluate_files};
use crate::scanner::SourceFile;

/// Longest permitted line, in characters, line terminator excluded.
pub const MAX_LINE_LENGTH: usize = 120;

/// Flags every line longer than [`MAX_LINE_LENGTH`] without stopping at the first one.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthRule {
    max: usize,
}

impl Default for LineLengthRule {
    fn default() -> Self {
        Self {
            max: MAX_LINE_LENGTH,
        }
    }
}

impl LineLengthRule {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max: MAX_LINE_LENGTH,
        }
    }
}

impl Rule for LineLengthRule {
    fn id(&self) -> RuleId {
        RuleId::LineLength
    }

    fn evaluate(&self, corpus: &[SourceFile], ctx: &ProjectContext<'_>) -> Vec<Finding> {
        evaluate_files(self, corpus, ctx)
    }
}

impl FileRule for LineLengthRule {
    fn check_file(
        &self,
        file: &SourceFile,
        content: &str,
        _ctx: &ProjectContext<'_>,
    ) -> Vec<Finding> {
        let path = file.path.as_path();
        let mut findings: Vec<Finding> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| line.chars().count() > self.max)
            .map(|(idx, _)| {
                let line_number = idx + 1;
                Finding::fail(
                    RuleId::LineLength,
                    format!(
                        "Line {line_number} in file {} exceeds {} characters",
                        path.display(),
                        self.max
                    ),
                )
                .with_file(path)
                .with_line(line_number)
            })
            .collect();

        if findings.is_empty() {
            findings.push(
                Finding::pass(
                    RuleId::LineLength,
                    format!(
                        "All lines in {} are at most {} characters.",
                        path.display(),
                        self.max
                    ),
                )
                .with_file(path),
            );
        }
        findings
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
