//! hostcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use hostcheck::checks::{registry, CheckerRegistry};
use hostcheck::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so reports on stdout stay parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hostcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hostcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("hostcheck starting with args: {:?}", cli);

    if let Err(e) = registry::init(CheckerRegistry::with_builtins()) {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    let use_color = !cli.no_color && console::colors_enabled();
    let dispatcher = CommandDispatcher::new(cli.config.clone(), use_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) if result.success => ExitCode::SUCCESS,
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
