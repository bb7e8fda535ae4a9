use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::output::OutputFormat;
use crate::runner::RuleGroup;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "arduino-guard")]
#[command(author, version, about = "Arduino library guard - check a library against the house rules")]
#[command(long_about = "Checks an Arduino library for coding-standard and documentation \
    compliance.\n\n\
    Select one rule group with --general-rules or --comment-rules.\n\n\
    The general group checks the architecture and #define names (Rule 01), line \
    length (Rule 02), cast comments (Rule 05) and brace wrapping (Rule 03). It also \
    flags initialized variables named after Arduino keywords (Rule 07).\n\n\
    Exit codes:\n  \
    0 - No failures reported\n  \
    1 - At least one rule failed\n  \
    2 - Configuration or runtime error")]
#[command(group(ArgGroup::new("rule_group").args(["general_rules", "comment_rules"])))]
pub struct Cli {
    /// Run the general coding rules
    #[arg(long)]
    pub general_rules: bool,

    /// Run the documentation rules
    #[arg(long)]
    pub comment_rules: bool,

    /// Library root to check
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Keyword table (CSV with a `keyword,category` header) to use instead of the packaged one
    #[arg(long)]
    pub keywords: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Always exit 0, even when rules fail
    #[arg(long)]
    pub warn_only: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress pass lines in text output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The selected rule group, if any.
    #[must_use]
    pub const fn group(&self) -> Option<RuleGroup> {
        if self.general_rules {
            Some(RuleGroup::General)
        } else if self.comment_rules {
            Some(RuleGroup::Documentation)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
