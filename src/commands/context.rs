use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, ScannerConfig, StyleConfig};
use crate::keywords::KeywordTable;
use crate::oracle::ClangFormat;
use crate::output::{ColorMode, JsonReporter, OutputFormat, Reporter, TextReporter};
use crate::scanner::{CorpusWalker, SourceFilter};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration for the library at `root`.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    root: &Path,
) -> crate::Result<Config> {
    if no_config {
        debug!("configuration loading disabled");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))
}

/// Keyword table source: `--keywords`, then `[keywords] path` (relative to the
/// library root), then the packaged table.
///
/// A failure is returned as a value so the rules that need the table can report it.
pub(crate) fn load_keywords(
    cli_path: Option<&Path>,
    config: &Config,
    root: &Path,
) -> crate::Result<KeywordTable> {
    let configured: Option<PathBuf> = cli_path.map(Path::to_path_buf).or_else(|| {
        config.keywords.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            }
        })
    });

    let table = match configured {
        Some(path) => {
            debug!(path = %path.display(), "loading keyword table");
            KeywordTable::from_path(&path)
        }
        None => KeywordTable::load(),
    };
    if let Err(e) = &table {
        warn!(error = %e, "keyword table unavailable");
    }
    table
}

pub(crate) fn build_oracle(style: &StyleConfig) -> ClangFormat {
    ClangFormat::new(style.command.clone())
        .with_args(style.args.clone())
        .with_timeout(Duration::from_secs(style.timeout_secs))
}

/// # Errors
/// Returns an error if an exclude pattern is not a valid glob.
pub(crate) fn build_walker(scanner: &ScannerConfig) -> crate::Result<CorpusWalker<SourceFilter>> {
    let filter = SourceFilter::new(&scanner.exclude)?;
    Ok(CorpusWalker::with_gitignore(filter, scanner.gitignore))
}

pub(crate) fn make_reporter<'a, W: Write + 'a>(cli: &Cli, out: W) -> Box<dyn Reporter + 'a> {
    match cli.format {
        OutputFormat::Text => Box::new(
            TextReporter::new(out, color_choice_to_mode(cli.color)).with_quiet(cli.quiet),
        ),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    }
}

pub(crate) fn stdout_reporter(cli: &Cli) -> Box<dyn Reporter> {
    make_reporter(cli, io::stdout().lock())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
