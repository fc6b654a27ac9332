//! Error handling and display for the CLI.

use colored::Colorize;
use seatplan_planner::PlanError;
use seatplan_roster::RosterError;
use seatplan_store::StoreError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Class '{0}' not found")]
    ClassNotFound(String),

    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::ClassNotFound(_) => Some("Run `seat classes list` to see stored classes.".into()),
            CliError::RoomNotFound(_) => Some("Run `seat rooms list` to see stored rooms.".into()),
            CliError::ReadInput { .. } => None,
        };
    }

    if let Some(plan_err) = err.downcast_ref::<PlanError>() {
        return match plan_err {
            PlanError::ClassNotFound(_) => {
                Some("Run `seat classes list` to see stored classes.".into())
            }
            PlanError::RoomNotFound(_) => Some("Run `seat rooms list` to see stored rooms.".into()),
            PlanError::EmptyRoster(name) => Some(format!(
                "Upload a sheet with students using `seat classes add {name} --file <sheet>`."
            )),
            PlanError::InvalidShape { room_name, .. } => Some(format!(
                "Re-add the room with `seat rooms add {room_name} --rows <R> --cols <C>`."
            )),
            PlanError::CapacityExceeded { overage, .. } => Some(format!(
                "Pick a room with at least {overage} more seats, or split the classes."
            )),
            PlanError::Provider(_) => Some("Check the data directory (--data-dir).".into()),
        };
    }

    if let Some(roster_err) = err.downcast_ref::<RosterError>() {
        if roster_err.is_sheet_error() {
            return Some(
                "The sheet must be a JSON array of rows with `roll_no` and `course` columns."
                    .into(),
            );
        }
        if let RosterError::ShapeTooLarge { max_benches, .. } = roster_err {
            return Some(format!("Rooms are limited to {max_benches} benches (rows x cols)."));
        }
        return None;
    }

    if err.downcast_ref::<StoreError>().is_some() {
        return Some("Check the data directory (--data-dir).".into());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_hint_mentions_overage() {
        let err = anyhow::Error::new(PlanError::CapacityExceeded {
            total_students: 50,
            capacity: 40,
            overage: 10,
        });
        let hint = hint_for(&err).unwrap();
        assert!(hint.contains("10 more seats"));
    }

    #[test]
    fn test_not_found_hint() {
        let err = anyhow::Error::new(CliError::RoomNotFound("hall".into()));
        assert_eq!(
            hint_for(&err).as_deref(),
            Some("Run `seat rooms list` to see stored rooms.")
        );
    }

    #[test]
    fn test_unknown_errors_have_no_hint() {
        let err = anyhow::anyhow!("something else");
        assert!(hint_for(&err).is_none());
    }
}
