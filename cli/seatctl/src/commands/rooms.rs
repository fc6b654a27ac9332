//! Room configuration commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use seatplan_roster::RoomShape;
use seatplan_store::RoomSummary;

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, OutputFormat};

use super::{display_time, CommandContext};

/// Room configuration commands.
#[derive(Debug, Args)]
pub struct RoomsCommand {
    #[command(subcommand)]
    command: RoomsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoomsSubcommand {
    /// Store a room configuration. The newest configuration of a name wins.
    Add(AddRoomArgs),

    /// List stored room configurations.
    List,

    /// Show the current configuration of a room.
    Get(GetRoomArgs),
}

#[derive(Debug, Args)]
struct AddRoomArgs {
    /// Room name.
    name: String,

    /// Bench rows.
    #[arg(long)]
    rows: u32,

    /// Benches per row.
    #[arg(long)]
    cols: u32,
}

#[derive(Debug, Args)]
struct GetRoomArgs {
    /// Room name.
    name: String,
}

impl RoomsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            RoomsSubcommand::Add(args) => add_room(ctx, args),
            RoomsSubcommand::List => list_rooms(ctx),
            RoomsSubcommand::Get(args) => get_room(ctx, args),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct RoomRow {
    #[tabled(rename = "Name")]
    room_name: String,

    #[tabled(rename = "Capacity")]
    total_capacity: u64,

    #[tabled(rename = "Created")]
    created_at: String,

    #[tabled(rename = "File")]
    file: String,
}

impl From<RoomSummary> for RoomRow {
    fn from(summary: RoomSummary) -> Self {
        Self {
            room_name: summary.room_name,
            total_capacity: summary.total_capacity,
            created_at: display_time(&summary.created_at),
            file: summary.file,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct RoomDetail {
    #[tabled(rename = "Name")]
    room_name: String,

    #[tabled(rename = "Rows")]
    rows: i64,

    #[tabled(rename = "Cols")]
    cols: i64,

    #[tabled(rename = "Capacity")]
    total_capacity: u64,

    #[tabled(rename = "Created")]
    created_at: String,
}

/// Store a room.
fn add_room(ctx: CommandContext, args: AddRoomArgs) -> Result<()> {
    let shape = RoomShape::new(args.rows, args.cols)?;

    let store = ctx.store()?;
    let saved = store.put_room(&args.name, shape)?;

    match ctx.format {
        OutputFormat::Json => print_single(&saved.record),
        OutputFormat::Table => print_success(&format!(
            "Stored room '{}' ({shape}, {} seats)",
            saved.record.room_name,
            shape.capacity()
        )),
    }
    Ok(())
}

/// List every stored room configuration, newest first.
fn list_rooms(ctx: CommandContext) -> Result<()> {
    let store = ctx.store()?;
    let rows: Vec<RoomRow> = store
        .list_rooms()?
        .into_iter()
        .map(RoomRow::from)
        .collect();
    print_output(&rows, ctx.format);
    Ok(())
}

/// Show one room.
fn get_room(ctx: CommandContext, args: GetRoomArgs) -> Result<()> {
    let store = ctx.store()?;
    let room = store
        .get_room(&args.name)?
        .ok_or_else(|| CliError::RoomNotFound(args.name.clone()))?;

    match ctx.format {
        OutputFormat::Json => print_single(&room),
        OutputFormat::Table => {
            let detail = RoomDetail {
                room_name: room.room_name,
                rows: room.configuration.rows,
                cols: room.configuration.cols,
                total_capacity: room.configuration.total_capacity,
                created_at: display_time(&room.created_at),
            };
            print_output(&[detail], ctx.format);
        }
    }
    Ok(())
}
