//! Runs a fixed rule group over a library and streams findings to a reporter.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::docs::DocumentationChecker;
use crate::error::Result;
use crate::keywords::KeywordTable;
use crate::oracle::StyleOracle;
use crate::output::Reporter;
use crate::project::ProjectMetadata;
use crate::rules::{
    BraceWrappingRule, CastCommentRule, Finding, LineLengthRule, ProjectContext,
    ReservedDefineRule, ReservedIdentifierRule, Rule, RuleId, Severity, VersionRule,
};
use crate::scanner::{CorpusWalker, FileFilter};

/// Pass line printed when the documentation checks find nothing missing.
pub const DOCUMENTATION_COMPLETE: &str = "Documentation is complete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    General,
    Documentation,
}

impl RuleGroup {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Documentation => "documentation",
        }
    }
}

impl fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts of findings by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub const fn record(&mut self, finding: &Finding) {
        match finding.severity {
            Severity::Pass => self.passed += 1,
            Severity::Fail => self.failed += 1,
            Severity::Skip => self.skipped += 1,
        }
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

/// The general group in reporting order: version classification, line length,
/// cast comment, reserved define, brace wrapping, reserved identifier.
#[must_use]
pub fn general_rules<O: StyleOracle + 'static>(oracle: O) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(VersionRule),
        Box::new(LineLengthRule::new()),
        Box::new(CastCommentRule::new()),
        Box::new(ReservedDefineRule::new()),
        Box::new(BraceWrappingRule::new(oracle)),
        Box::new(ReservedIdentifierRule::new()),
    ]
}

pub struct GroupRunner<F: FileFilter> {
    root: PathBuf,
    walker: CorpusWalker<F>,
    keywords: Result<KeywordTable>,
    general: Vec<Box<dyn Rule>>,
}

impl<F: FileFilter> GroupRunner<F> {
    /// A keyword table that failed to load is kept and reported by the rules
    /// that need it.
    pub fn new<O: StyleOracle + 'static>(
        root: impl Into<PathBuf>,
        walker: CorpusWalker<F>,
        keywords: Result<KeywordTable>,
        oracle: O,
    ) -> Self {
        Self {
            root: root.into(),
            walker,
            keywords,
            general: general_rules(oracle),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run one group. Rule problems become findings; only reporter failures
    /// abort the run.
    ///
    /// # Errors
    /// Returns an error if the reporter cannot write.
    pub fn run<R: Reporter + ?Sized>(&self, group: RuleGroup, reporter: &mut R) -> Result<RunSummary> {
        info!(group = %group, root = %self.root.display(), "running rule group");
        let mut summary = RunSummary::default();
        match group {
            RuleGroup::General => self.run_general(reporter, &mut summary)?,
            RuleGroup::Documentation => self.run_documentation(reporter, &mut summary)?,
        }
        reporter.finish(&summary)?;
        info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "rule group finished"
        );
        Ok(summary)
    }

    fn run_general<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let metadata = ProjectMetadata::load(&self.root);
        if let Ok(metadata) = &metadata {
            info!(
                name = metadata.property("name").unwrap_or("<unnamed>"),
                version = metadata.property("version").unwrap_or("<unversioned>"),
                "loaded library.properties"
            );
        }
        let corpus = self.walker.collect(&self.root);
        info!(files = corpus.len(), "collected corpus");

        let ctx = ProjectContext::new(&self.keywords, &metadata);
        for rule in &self.general {
            debug!(rule = %rule.id(), "evaluating rule");
            emit(rule.evaluate(&corpus, &ctx), reporter, summary)?;
        }
        Ok(())
    }

    fn run_documentation<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let mut findings = DocumentationChecker::new(&self.root).check();
        if findings.is_empty() {
            findings.push(Finding::pass(RuleId::Documentation, DOCUMENTATION_COMPLETE));
        }
        emit(findings, reporter, summary)
    }
}

fn emit<R: Reporter + ?Sized>(
    findings: Vec<Finding>,
    reporter: &mut R,
    summary: &mut RunSummary,
) -> Result<()> {
    for finding in &findings {
        summary.record(finding);
        reporter.report(finding)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
