use std::io::Write;

use crate::error::Result;
use crate::rules::{Finding, Severity};
use crate::runner::RunSummary;

use super::Reporter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Prints one line per finding as soon as it arrives.
pub struct TextReporter<W: Write> {
    out: W,
    use_colors: bool,
    quiet: bool,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub fn new(out: W, mode: ColorMode) -> Self {
        Self {
            out,
            use_colors: Self::should_use_colors(mode),
            quiet: false,
        }
    }

    /// Suppress pass lines.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, severity: Severity) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match severity {
            Severity::Pass => ansi::GREEN,
            Severity::Fail => ansi::RED,
            Severity::Skip => ansi::YELLOW,
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    /// The report line for a finding, without color.
    #[must_use]
    pub fn format_line(finding: &Finding) -> String {
        match finding.severity {
            Severity::Pass => format!("✅ {}", finding.message),
            Severity::Fail => match finding.rule.code() {
                Some(code) => format!("❌{code} Error: {}", finding.message),
                None => format!("❌ Error: {}", finding.message),
            },
            Severity::Skip => format!("⚠️ {}", finding.message),
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, finding: &Finding) -> Result<()> {
        if self.quiet && finding.is_passed() {
            return Ok(());
        }
        let line = self.colorize(&Self::format_line(finding), finding.severity);
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
