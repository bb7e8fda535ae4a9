use std::fs;
use std::io;

use tempfile::TempDir;

use super::*;
use crate::error::GuardError;
use crate::scanner::SourceFilter;

/// Returns each file unchanged, so every file conforms.
struct IdentityOracle;

impl StyleOracle for IdentityOracle {
    fn format(&self, path: &Path, _style: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| GuardError::file_access(path, e))
    }
}

struct MissingOracle;

impl StyleOracle for MissingOracle {
    fn format(&self, _path: &Path, _style: &str) -> Result<String> {
        Err(GuardError::OracleUnavailable {
            command: "clang-format".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        })
    }
}

#[derive(Default)]
struct Collect {
    findings: Vec<Finding>,
    finished: usize,
}

impl Reporter for Collect {
    fn report(&mut self, finding: &Finding) -> Result<()> {
        self.findings.push(finding.clone());
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> Result<()> {
        self.finished += 1;
        Ok(())
    }
}

fn library(properties: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("library.properties"), properties).unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    dir
}

fn runner<O: StyleOracle + 'static>(dir: &TempDir, oracle: O) -> GroupRunner<SourceFilter> {
    GroupRunner::new(
        dir.path(),
        CorpusWalker::new(SourceFilter::default()),
        KeywordTable::load(),
        oracle,
    )
}

fn run(runner: &GroupRunner<SourceFilter>, group: RuleGroup) -> (RunSummary, Vec<Finding>) {
    let mut collect = Collect::default();
    let summary = runner.run(group, &mut collect).unwrap();
    assert_eq!(collect.finished, 1);
    (summary, collect.findings)
}

#[test]
fn single_long_line_yields_exactly_one_line_length_failure() {
    let dir = library("name=Blink\narchitectures=*\n");
    let long_line = format!("// {}\n", "x".repeat(127));
    assert_eq!(long_line.trim_end().chars().count(), 130);
    fs::write(dir.path().join("src/a.h"), long_line).unwrap();

    let (summary, findings) = run(&runner(&dir, IdentityOracle), RuleGroup::General);

    let failures: Vec<&Finding> = findings.iter().filter(|f| f.is_failed()).collect();
    assert_eq!(failures.len(), 1, "{findings:#?}");
    assert_eq!(failures[0].rule, RuleId::LineLength);
    assert_eq!(failures[0].line, Some(1));
    assert_eq!(summary.failed, 1);
    assert!(summary.has_failures());
    assert_eq!(summary.total(), findings.len());
}

#[test]
fn general_group_reports_rules_in_order() {
    let dir = library("architectures=*\n");
    fs::write(dir.path().join("src/a.cpp"), "int value = 1; // ok\n").unwrap();

    let (_, findings) = run(&runner(&dir, IdentityOracle), RuleGroup::General);

    let mut order: Vec<RuleId> = findings.iter().map(|f| f.rule).collect();
    order.dedup();
    assert_eq!(
        order,
        vec![
            RuleId::VersionClassification,
            RuleId::LineLength,
            RuleId::CastComment,
            RuleId::ReservedDefine,
            RuleId::BraceWrapping,
            RuleId::ReservedIdentifier,
        ]
    );
    assert!(findings.iter().all(Finding::is_passed), "{findings:#?}");
}

#[test]
fn missing_properties_fails_version_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.ino"), "void setup() {}\n").unwrap();

    let (summary, findings) = run(&runner(&dir, IdentityOracle), RuleGroup::General);

    assert_eq!(summary.failed, 1);
    let failure = findings.iter().find(|f| f.is_failed()).unwrap();
    assert_eq!(failure.rule, RuleId::VersionClassification);
    assert!(failure.message.contains("library.properties"));
}

#[test]
fn missing_formatter_is_a_single_skip() {
    let dir = library("architectures=*\n");
    fs::write(dir.path().join("src/a.h"), "int a;\n").unwrap();
    fs::write(dir.path().join("src/b.h"), "int b;\n").unwrap();

    let (summary, findings) = run(&runner(&dir, MissingOracle), RuleGroup::General);

    assert_eq!(summary.skipped, 1);
    assert!(!summary.has_failures());
    let skip = findings.iter().find(|f| f.is_skipped()).unwrap();
    assert_eq!(skip.rule, RuleId::BraceWrapping);
}

#[test]
fn broken_keyword_table_does_not_stop_other_rules() {
    let dir = library("architectures=*\n");
    fs::write(dir.path().join("src/a.h"), "int a;\n").unwrap();
    let runner = GroupRunner::new(
        dir.path(),
        CorpusWalker::new(SourceFilter::default()),
        KeywordTable::parse("", "broken.csv"),
        IdentityOracle,
    );

    let (summary, findings) = run(&runner, RuleGroup::General);

    assert_eq!(summary.failed, 2, "{findings:#?}");
    assert!(findings.iter().any(|f| f.rule == RuleId::LineLength && f.is_passed()));
}

#[test]
fn general_runs_are_idempotent() {
    let dir = library("architectures=*\n");
    fs::write(dir.path().join("src/a.cpp"), "#define HIGH 2\nint x = (int)y;\n").unwrap();
    fs::write(dir.path().join("src/b.h"), "int delay = 3;\n").unwrap();
    let runner = runner(&dir, IdentityOracle);

    let first = run(&runner, RuleGroup::General);
    let second = run(&runner, RuleGroup::General);

    assert_eq!(first, second);
    assert!(first.0.has_failures());
}

#[test]
fn complete_documentation_prints_one_pass() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("docs/assets")).unwrap();
    fs::write(
        dir.path().join("README.md"),
        "📖 For more information about this library please read the documentation [here](./docs/)\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("docs/README.md"),
        "# Features\n# Usage\n# API\n# License\n",
    )
    .unwrap();
    fs::write(dir.path().join("docs/api.md"), "").unwrap();

    let (summary, findings) = run(&runner(&dir, IdentityOracle), RuleGroup::Documentation);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, DOCUMENTATION_COMPLETE);
    assert_eq!(summary.passed, 1);
}

#[test]
fn incomplete_documentation_reports_failures() {
    let dir = TempDir::new().unwrap();

    let (summary, findings) = run(&runner(&dir, IdentityOracle), RuleGroup::Documentation);

    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed, findings.len());
    assert!(summary.has_failures());
}

#[test]
fn summary_records_each_severity() {
    let mut summary = RunSummary::default();
    summary.record(&Finding::pass(RuleId::LineLength, "a"));
    summary.record(&Finding::fail(RuleId::LineLength, "b"));
    summary.record(&Finding::skip(RuleId::BraceWrapping, "c"));

    assert_eq!(
        summary,
        RunSummary {
            passed: 1,
            failed: 1,
            skipped: 1
        }
    );
}

#[test]
fn group_names() {
    assert_eq!(RuleGroup::General.to_string(), "general");
    assert_eq!(RuleGroup::Documentation.name(), "documentation");
}
