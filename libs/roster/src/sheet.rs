//! Roster sheet ingestion.
//!
//! A sheet is a JSON array of row objects, as exported from a spreadsheet:
//!
//! ```text
//! [
//!   { "Roll_No ": 101, "Course": "CS" },
//!   { "Roll_No ": 102, "Course": "EE" }
//! ]
//! ```
//!
//! Column names are matched after trimming and lowercasing. Rows with a
//! blank or missing roll number or course are skipped.

use serde_json::{Map, Value};

use crate::{Roster, RosterError, StudentRecord};

/// Column holding the roll number.
pub const ROLL_NO_COLUMN: &str = "roll_no";

/// Column holding the course.
pub const COURSE_COLUMN: &str = "course";

const REQUIRED_COLUMNS: [&str; 2] = [ROLL_NO_COLUMN, COURSE_COLUMN];

/// Parse a sheet from JSON text.
pub fn parse_sheet(text: &str) -> Result<Roster, RosterError> {
    let value: Value = serde_json::from_str(text).map_err(|e| RosterError::MalformedSheet {
        reason: e.to_string(),
    })?;
    roster_from_sheet(&value)
}

/// Build a roster from an already-decoded sheet.
pub fn roster_from_sheet(sheet: &Value) -> Result<Roster, RosterError> {
    let Some(rows) = sheet.as_array() else {
        return Err(RosterError::MalformedSheet {
            reason: "expected a list of rows".to_string(),
        });
    };

    let mut normalized = Vec::with_capacity(rows.len());
    let mut available: Vec<String> = Vec::new();
    for (line, row) in rows.iter().enumerate() {
        let Some(object) = row.as_object() else {
            return Err(RosterError::MalformedSheet {
                reason: format!("row {} is not an object", line + 1),
            });
        };
        let row = normalize_columns(object);
        for column in row.keys() {
            if !available.contains(column) {
                available.push(column.clone());
            }
        }
        normalized.push(row);
    }

    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|required| !available.iter().any(|c| c == required))
        .collect();
    if !missing.is_empty() {
        return Err(RosterError::MissingColumns { missing, available });
    }

    let students: Vec<StudentRecord> = normalized
        .iter()
        .filter_map(|row| {
            let roll_no = cell_text(row.get(ROLL_NO_COLUMN))?;
            let course = cell_text(row.get(COURSE_COLUMN))?;
            Some(StudentRecord { roll_no, course })
        })
        .collect();

    if students.is_empty() {
        return Err(RosterError::NoValidStudents);
    }

    Ok(Roster::new(students))
}

/// Lowercase and trim every column name.
///
/// When two headers normalize to the same name the later one wins, which
/// matches how a spreadsheet row would be read into a mapping.
fn normalize_columns(row: &Map<String, Value>) -> Map<String, Value> {
    row.iter()
        .map(|(key, value)| (key.trim().to_lowercase(), value.clone()))
        .collect()
}

/// Render a cell as trimmed text, or `None` if it is blank.
fn cell_text(cell: Option<&Value>) -> Option<String> {
    let text = match cell? {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
