//! Seat allocation command.

use anyhow::Result;
use clap::Args;

use seatplan_planner::{AllocationRequest, Planner};

use crate::output::{print_plan, print_single, OutputFormat};

use super::CommandContext;

/// Seat two classes in a room.
#[derive(Debug, Args)]
pub struct AllocateCommand {
    /// First class; its students take the first seat of each bench.
    #[arg(long)]
    class1: String,

    /// Second class; its students take the second seat of each bench.
    #[arg(long)]
    class2: String,

    /// Room to seat them in.
    #[arg(long)]
    room: String,

    /// Date printed on the plan (defaults to today, e.g. "14th Mar 2025").
    #[arg(long)]
    date: Option<String>,
}

impl AllocateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let store = ctx.store()?;
        let planner = Planner::new(&store, &store);

        let mut request = AllocationRequest::new(self.class1, self.class2, self.room);
        if let Some(date) = self.date {
            request = request.with_date(date);
        }

        let plan = planner.plan(&request)?;

        match ctx.format {
            OutputFormat::Json => print_single(&plan),
            OutputFormat::Table => print_plan(&plan),
        }
        Ok(())
    }
}
