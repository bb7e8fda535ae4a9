mod json;
mod text;

pub use json::JsonReporter;
pub use text::{ColorMode, TextReporter};

use crate::error::Result;
use crate::rules::Finding;
use crate::runner::RunSummary;

/// Receives findings as rules produce them.
pub trait Reporter {
    /// Handle one finding.
    ///
    /// # Errors
    /// Returns an error if the finding cannot be written.
    fn report(&mut self, finding: &Finding) -> Result<()>;

    /// Called once after the last finding of a run.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finish(&mut self, summary: &RunSummary) -> Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, finding: &Finding) -> Result<()> {
        (**self).report(finding)
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        (**self).finish(summary)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, finding: &Finding) -> Result<()> {
        (**self).report(finding)
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        (**self).finish(summary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
