use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::rules::Finding;
use crate::runner::RunSummary;

use super::Reporter;

/// Buffers findings and writes a single JSON document when the run finishes.
pub struct JsonReporter<W: Write> {
    out: W,
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a RunSummary,
    findings: &'a [Finding],
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            findings: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, finding: &Finding) -> Result<()> {
        self.findings.push(finding.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        let output = JsonOutput {
            summary,
            findings: &self.findings,
        };
        let rendered = serde_json::to_string_pretty(&output)?;
        writeln!(self.out, "{rendered}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
