//! Folio CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use folio::cli::{Cli, CommandDispatcher};
use folio::storage::FileSlot;
use folio::ui::{FolioTheme, Output};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("folio=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Folio starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = if cli.no_color {
        FolioTheme::plain()
    } else {
        FolioTheme::new()
    };
    let out = Output::new(theme);

    // Determine the data directory holding the saved portfolio
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(FileSlot::default_dir);

    let dispatcher = CommandDispatcher::new(data_dir);

    match dispatcher.dispatch(&cli, &out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            out.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
