//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use seatplan_planner::SeatingPlan;

const CLI_SCHEMA_VERSION: &str = "seatplan.cli.v1";

/// Placeholder for an empty bench.
const EMPTY_CELL: &str = "-";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Print a list as a table, or as JSON.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

/// Print a seating plan as a bench grid with a short header and summary.
pub fn print_plan(plan: &SeatingPlan) {
    println!("{} {}", "Hall:".bold(), plan.hall);
    println!("{} {}", "Date:".bold(), plan.date);
    println!(
        "{} {} ({} students) + {} ({} students)",
        "Classes:".bold(),
        plan.class1,
        plan.total_students_class1,
        plan.class2,
        plan.total_students_class2,
    );
    println!("{}", render_grid(plan));

    let summary = plan.summary;
    print_info(&format!(
        "{} mixed pairs, {} same-course pairs, {} single, {} empty benches",
        summary.pairs, summary.same_course_pairs, summary.singles, summary.empty
    ));
    if summary.same_course_pairs > 0 {
        println!(
            "{}",
            "Warning: some benches seat two students of the same course.".yellow()
        );
    }
}

/// Render the grid: one table row per bench row, `a / b` per bench.
fn render_grid(plan: &SeatingPlan) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Row".to_string()];
    header.extend((1..=plan.grid.col_count()).map(|c| format!("Bench {c}")));
    builder.push_record(header);

    for (r, row) in plan.grid.rows().enumerate() {
        let mut record = vec![(r + 1).to_string()];
        record.extend(row.iter().map(|bench| {
            let occupants = bench.occupants();
            if occupants.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                occupants.join(" / ")
            }
        }));
        builder.push_record(record);
    }

    builder.build().to_string()
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let wrapped = serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    });
    serde_json::to_string_pretty(&wrapped).unwrap_or_else(|_| fallback.to_string())
}
