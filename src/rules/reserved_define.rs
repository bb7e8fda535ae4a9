use regex::Regex;

use super::{FileRule, Finding, LineIndex, ProjectContext, Rule, RuleId, evaluate_files};
use crate::scanner::SourceFile;

/// Flags `#define NAME` where `NAME` is a reserved Arduino keyword.
pub struct ReservedDefineRule {
    define_pattern: Regex,
}

impl Default for ReservedDefineRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservedDefineRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // The directive must start the text or follow a non-word character. Only
            // blanks may separate it from the name: a newline ends the directive.
            define_pattern: Regex::new(r"(?:^|\W)#define[ \t]+(\w+)").expect("Invalid regex"),
        }
    }
}

impl Rule for ReservedDefineRule {
    fn id(&self) -> RuleId {
        RuleId::ReservedDefine
    }

    fn evaluate(&self, corpus: &[SourceFile], ctx: &ProjectContext<'_>) -> Vec<Finding> {
        if let Err(e) = ctx.keywords() {
            return vec![Finding::fail(self.id(), e.to_string())];
        }
        evaluate_files(self, corpus, ctx)
    }
}

impl FileRule for ReservedDefineRule {
    fn check_file(&self, file: &SourceFile, content: &str, ctx: &ProjectContext<'_>) -> Vec<Finding> {
        let Ok(keywords) = ctx.keywords() else {
            return Vec::new();
        };
        let index = LineIndex::new(content);

        self.define_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .filter(|name| keywords.contains(name.as_str()))
            .map(|name| {
                let line = index.line_of(name.start());
                Finding::fail(
                    RuleId::ReservedDefine,
                    format!(
                        "Found an illegal #define of `{}` in {} at line {line}",
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
        Some("#define statements do not overwrite Arduino keywords")
    }
}

#[cfg(test)]
#[path = "reserved_define_tests.rs"]
mod tests;
