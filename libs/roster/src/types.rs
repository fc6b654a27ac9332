//! Student records, rosters, and room shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RosterError;

/// Number of seats on one bench.
pub const SEATS_PER_BENCH: u32 = 2;

/// Largest number of benches a room may have.
pub const MAX_BENCHES: u64 = 100_000;

// =============================================================================
// Students
// =============================================================================

/// One student as listed on a class roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Roll number, unique within the class.
    pub roll_no: String,

    /// Course (subject) the student is sitting.
    pub course: String,
}

impl StudentRecord {
    /// Create a new student record.
    pub fn new(roll_no: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            roll_no: roll_no.into(),
            course: course.into(),
        }
    }

    /// Two students may share a bench without a clash when their courses differ.
    pub fn is_compatible_with(&self, other: &StudentRecord) -> bool {
        self.course != other.course
    }
}

// =============================================================================
// Rosters
// =============================================================================

/// Ordered list of students for one class.
///
/// Order is significant: earlier students are seated first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    /// Create a roster from students in upload order.
    pub fn new(students: Vec<StudentRecord>) -> Self {
        Self { students }
    }

    /// Number of students on the roster.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns true if the roster has no students.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Student at a roster position.
    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.students.get(index)
    }

    /// Students in roster order.
    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Iterate students in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.students.iter()
    }
}

impl From<Vec<StudentRecord>> for Roster {
    fn from(students: Vec<StudentRecord>) -> Self {
        Self::new(students)
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

// =============================================================================
// Rooms
// =============================================================================

/// Bench layout of an exam hall: `rows` × `cols` benches of two seats each.
///
/// Both dimensions are at least one and the bench count is at most
/// [`MAX_BENCHES`]; [`RoomShape::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShape", into = "RawShape")]
pub struct RoomShape {
    rows: u32,
    cols: u32,
}

#[derive(Serialize, Deserialize)]
struct RawShape {
    rows: u32,
    cols: u32,
}

impl RoomShape {
    /// Create a room shape, rejecting zero rows or columns and oversized rooms.
    pub fn new(rows: u32, cols: u32) -> Result<Self, RosterError> {
        if rows == 0 || cols == 0 {
            return Err(RosterError::InvalidShape { rows, cols });
        }
        if u64::from(rows) * u64::from(cols) > MAX_BENCHES {
            return Err(RosterError::ShapeTooLarge {
                rows,
                cols,
                max_benches: MAX_BENCHES,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of bench rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of benches per row.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of benches.
    pub fn benches(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Number of seats.
    pub fn capacity(&self) -> u64 {
        self.benches() * u64::from(SEATS_PER_BENCH)
    }
}

impl TryFrom<RawShape> for RoomShape {
    type Error = RosterError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl From<RoomShape> for RawShape {
    fn from(shape: RoomShape) -> Self {
        Self {
            rows: shape.rows,
            cols: shape.cols,
        }
    }
}

impl fmt::Display for RoomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
