//! seat - CLI for exam hall seat planning.
//!
//! Stores class rosters and room configurations under a data directory and
//! seats two classes per room so neighbours on a bench sit different courses
//! where possible.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    // Logs go to stderr so JSON output stays clean.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }
}
