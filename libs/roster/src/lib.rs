//! # seatplan-roster
//!
//! Domain records shared by the seat planner: students, class rosters, and
//! the bench layout of an exam hall.
//!
//! ## Ingestion
//!
//! Rosters arrive as sheets (a list of row objects with `roll_no` and
//! `course` columns). [`parse_sheet`] normalizes headers, skips blank rows,
//! and preserves upload order, which later decides seating priority.

mod error;
mod name;
mod sheet;
mod types;

pub use error::RosterError;
pub use name::sanitize_name;
pub use sheet::{parse_sheet, roster_from_sheet, COURSE_COLUMN, ROLL_NO_COLUMN};
pub use types::*;
