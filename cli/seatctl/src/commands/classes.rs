//! Class roster commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use seatplan_roster::parse_sheet;
use seatplan_store::ClassSummary;

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, OutputFormat};

use super::{display_time, CommandContext};

/// Class roster commands.
#[derive(Debug, Args)]
pub struct ClassesCommand {
    #[command(subcommand)]
    command: ClassesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ClassesSubcommand {
    /// Upload a class roster from a JSON sheet, replacing any earlier upload.
    Add(AddClassArgs),

    /// List stored classes.
    List,

    /// Show the students of a stored class.
    Get(GetClassArgs),
}

#[derive(Debug, Args)]
struct AddClassArgs {
    /// Class name.
    name: String,

    /// JSON sheet: an array of row objects with `roll_no` and `course` columns.
    #[arg(long, short)]
    file: PathBuf,
}

#[derive(Debug, Args)]
struct GetClassArgs {
    /// Class name.
    name: String,
}

impl ClassesCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ClassesSubcommand::Add(args) => add_class(ctx, args),
            ClassesSubcommand::List => list_classes(ctx),
            ClassesSubcommand::Get(args) => get_class(ctx, args),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ClassRow {
    #[tabled(rename = "Name")]
    class_name: String,

    #[tabled(rename = "Students")]
    total_students: usize,

    #[tabled(rename = "Uploaded")]
    uploaded_at: String,

    #[tabled(rename = "File")]
    file: String,
}

impl From<ClassSummary> for ClassRow {
    fn from(summary: ClassSummary) -> Self {
        Self {
            class_name: summary.class_name,
            total_students: summary.total_students,
            uploaded_at: display_time(&summary.uploaded_at),
            file: summary.file,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct StudentRow {
    #[tabled(rename = "Roll No")]
    roll_no: String,

    #[tabled(rename = "Course")]
    course: String,
}

#[derive(Debug, Serialize)]
struct AddClassResponse {
    class_name: String,
    total_students: usize,
    replaced: bool,
    path: String,
}

/// Upload a class sheet.
fn add_class(ctx: CommandContext, args: AddClassArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file).map_err(|source| CliError::ReadInput {
        path: args.file.display().to_string(),
        source,
    })?;
    let students = parse_sheet(&text)?;

    let store = ctx.store()?;
    let saved = store.put_class(&args.name, students)?;

    let response = AddClassResponse {
        class_name: saved.record.class_name,
        total_students: saved.record.total_students,
        replaced: saved.replaced,
        path: saved.path.display().to_string(),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&response),
        OutputFormat::Table => {
            let verb = if response.replaced { "Replaced" } else { "Stored" };
            print_success(&format!(
                "{verb} class '{}' with {} students",
                response.class_name, response.total_students
            ));
        }
    }
    Ok(())
}

/// List stored classes, newest first.
fn list_classes(ctx: CommandContext) -> Result<()> {
    let store = ctx.store()?;
    let rows: Vec<ClassRow> = store
        .list_classes()?
        .into_iter()
        .map(ClassRow::from)
        .collect();
    print_output(&rows, ctx.format);
    Ok(())
}

/// Show one class.
fn get_class(ctx: CommandContext, args: GetClassArgs) -> Result<()> {
    let store = ctx.store()?;
    let class = store
        .get_class(&args.name)?
        .ok_or_else(|| CliError::ClassNotFound(args.name.clone()))?;

    match ctx.format {
        OutputFormat::Json => print_single(&class),
        OutputFormat::Table => {
            let rows: Vec<StudentRow> = class
                .students
                .iter()
                .map(|s| StudentRow {
                    roll_no: s.roll_no.clone(),
                    course: s.course.clone(),
                })
                .collect();
            print_output(&rows, ctx.format);
        }
    }
    Ok(())
}
