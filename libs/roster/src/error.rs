//! Error types for roster ingestion and room shape validation.

use thiserror::Error;

/// Errors that can occur when building rosters or room shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Rows or columns were zero.
    #[error("invalid room shape: rows ({rows}) and cols ({cols}) must be positive integers")]
    InvalidShape { rows: u32, cols: u32 },

    /// More benches than a single plan can lay out.
    #[error("room shape {rows}x{cols} exceeds the limit of {max_benches} benches")]
    ShapeTooLarge {
        rows: u32,
        cols: u32,
        max_benches: u64,
    },

    /// The sheet lacks one or more required columns.
    #[error(
        "missing required columns: {}. Available columns: {}",
        missing.join(", "),
        available.join(", ")
    )]
    MissingColumns {
        missing: Vec<&'static str>,
        available: Vec<String>,
    },

    /// Every row of the sheet was blank or incomplete.
    #[error("no valid student data found in the sheet")]
    NoValidStudents,

    /// A class or room name has no storable characters.
    #[error("invalid name '{0}': must contain at least one letter, digit, '-' or '_'")]
    InvalidName(String),

    /// The sheet is not a list of row objects.
    #[error("malformed sheet: {reason}")]
    MalformedSheet { reason: String },
}

impl RosterError {
    /// Returns true if this error came from reading a sheet.
    pub fn is_sheet_error(&self) -> bool {
        matches!(
            self,
            RosterError::MissingColumns { .. }
                | RosterError::NoValidStudents
                | RosterError::MalformedSheet { .. }
        )
    }
}
