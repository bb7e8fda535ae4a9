use regex::Regex;

use super::source_text::split_comment;
use super::{FileRule, Finding, LineIndex, ProjectContext, Rule, RuleId, evaluate_files};
use crate::scanner::SourceFile;

/// Flags assignments and initializations whose target is a reserved Arduino keyword,
/// e.g. `int HIGH = 1;`. Text after a `//` comment marker on the same line is ignored;
/// a `//` inside a string literal is not a marker.
pub struct ReservedIdentifierRule {
    assignment_pattern: Regex,
}

impl Default for ReservedIdentifierRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservedIdentifierRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignment_pattern: Regex::new(r"\b([A-Za-z_]\w*)[ \t]*=").expect("Invalid regex"),
        }
    }
}

/// Whether a `//` outside string and character literals precedes `offset` on its line.
fn in_line_comment(content: &str, offset: usize) -> bool {
    let line_start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[offset..].find('\n').map_or(content.len(), |i| offset + i);
    let mut in_block = false;
    split_comment(&content[line_start..line_end], &mut in_block)
        .line_comment
        .is_some_and(|marker| line_start + marker < offset)
}

impl Rule for ReservedIdentifierRule {
    fn id(&self) -> RuleId {
        RuleId::ReservedIdentifier
    }

    fn evaluate(&self, corpus: &[SourceFile], ctx: &ProjectContext<'_>) -> Vec<Finding> {
        if let Err(e) = ctx.keywords() {
            return vec![Finding::fail(self.id(), e.to_string())];
        }
        evaluate_files(self, corpus, ctx)
    }
}

impl FileRule for ReservedIdentifierRule {
    fn check_file(&self, file: &SourceFile, content: &str, ctx: &ProjectContext<'_>) -> Vec<Finding> {
        let Ok(keywords) = ctx.keywords() else {
            return Vec::new();
        };
        let index = LineIndex::new(content);

        self.assignment_pattern
            .captures_iter(content)
            // `==` is a comparison, not an assignment.
            .filter(|caps| caps.get(0).is_some_and(|m| !content[m.end()..].starts_with('=')))
            .filter_map(|caps| caps.get(1))
            .filter(|name| keywords.contains(name.as_str()))
            .filter(|name| !in_line_comment(content, name.start()))
            .map(|name| {
                let line = index.line_of(name.start());
                Finding::fail(
                    RuleId::ReservedIdentifier,
                    format!(
                        "Found an initialized variable `{}` that matches an Arduino keyword in {} at line {line}",
                        name.as_str(),
                        file.path.display()
                    ),
                )
                .with_file(&file.path)
                .with_line(line)
            })
            .collect()
    }

    fn corpus_pass_message(&self) -> Option<&'static str> {
        Some("No initialized variables match Arduino keywords")
    }
}

#[cfg(test)]
#[path = "reserved_identifier_tests.rs"]
mod tests;
