use clap::Parser;
use tracing::debug;

use arduino_guard::cli::Cli;
use arduino_guard::commands::run_check;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = run_check(&cli);

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
