use tracing::debug;

use crate::cli::Cli;
use crate::output::Reporter;
use crate::runner::{GroupRunner, RuleGroup, RunSummary};
use crate::{EXIT_CONFIG_ERROR, EXIT_RULE_VIOLATION, EXIT_SUCCESS};

use super::context::{build_oracle, build_walker, load_config, load_keywords, stdout_reporter};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(cli: &Cli) -> crate::Result<i32> {
    let Some(group) = cli.group() else {
        debug!("no rule group selected, nothing to do");
        return Ok(EXIT_SUCCESS);
    };

    let mut reporter = stdout_reporter(cli);
    let summary = run_group(cli, group, &mut reporter)?;
    Ok(determine_exit_code(&summary, cli.warn_only))
}

/// Run `group` as configured by `cli`, reporting to `reporter`.
///
/// # Errors
/// Returns an error for configuration problems or reporter failures.
pub(crate) fn run_group<R: Reporter + ?Sized>(
    cli: &Cli,
    group: RuleGroup,
    reporter: &mut R,
) -> crate::Result<RunSummary> {
    // 1. Load configuration
    let config = load_config(cli.config.as_deref(), cli.no_config, &cli.root)?;

    // 2. Build inputs; a broken keyword table is reported by the rules
    let walker = build_walker(&config.scanner)?;
    let keywords = load_keywords(cli.keywords.as_deref(), &config, &cli.root);
    let oracle = build_oracle(&config.style);

    // 3. Run
    let runner = GroupRunner::new(&cli.root, walker, keywords, oracle);
    runner.run(group, reporter)
}

#[must_use]
pub const fn determine_exit_code(summary: &RunSummary, warn_only: bool) -> i32 {
    if summary.has_failures() && !warn_only {
        EXIT_RULE_VIOLATION
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
