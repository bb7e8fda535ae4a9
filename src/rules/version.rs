use super::{Finding, ProjectContext, Rule, RuleId};
use crate::scanner::SourceFile;

/// Infers the supported language standard from `library.properties`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionRule;

impl Rule for VersionRule {
    fn id(&self) -> RuleId {
        RuleId::VersionClassification
    }

    fn evaluate(&self, _corpus: &[SourceFile], ctx: &ProjectContext<'_>) -> Vec<Finding> {
        let finding = match ctx.metadata() {
            Err(e) => Finding::fail(self.id(), e.to_string()),
            Ok(metadata) => match metadata.classify() {
                Ok(standard) => Finding::pass(
                    self.id(),
                    format!("Supported architecture compliant with up to {standard}"),
                ),
                Err(e) => Finding::fail(self.id(), e.to_string()).with_file(metadata.path()),
            },
        };
        vec![finding]
    }
}
