//! CLI commands.

mod allocate;
mod classes;
mod rooms;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use seatplan_store::FileStore;

use crate::config::Config;
use crate::output::OutputFormat;

/// seat - Plan exam hall seating for two classes.
#[derive(Debug, Parser)]
#[command(name = "seat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Directory holding stored classes and rooms.
    #[arg(long, global = true, env = "SEAT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage class rosters.
    Classes(classes::ClassesCommand),

    /// Manage room configurations.
    Rooms(rooms::RoomsCommand),

    /// Seat two classes in a room.
    Allocate(allocate::AllocateCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Configuration implied by the global flags.
    pub fn config(&self) -> Config {
        Config::load(self.data_dir.clone())
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: OutputFormat::parse(&self.format),
        };

        match self.command {
            Commands::Classes(cmd) => cmd.run(ctx),
            Commands::Rooms(cmd) => cmd.run(ctx),
            Commands::Allocate(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("seat {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Open the store under the configured data directory.
    pub fn store(&self) -> Result<FileStore> {
        debug!(data_dir = %self.config.data_dir.display(), "Opening store");
        Ok(FileStore::open(&self.config.data_dir)?)
    }
}

/// Render a timestamp for table output.
pub(crate) fn display_time(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
