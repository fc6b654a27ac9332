//! Seating grid produced by an allocation run.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use seatplan_roster::RoomShape;

/// Occupancy of one two-seat bench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bench {
    /// Nobody seated.
    Empty,

    /// One student seated alone.
    Single(String),

    /// Two students; `first` comes from the first class, `second` from the
    /// second. `same_course` marks a pair formed by the fallback because no
    /// student of a different course was left.
    Pair {
        first: String,
        second: String,
        same_course: bool,
    },
}

impl Bench {
    /// Roll numbers on this bench, first-class occupant first.
    pub fn occupants(&self) -> Vec<&str> {
        match self {
            Bench::Empty => Vec::new(),
            Bench::Single(roll_no) => vec![roll_no.as_str()],
            Bench::Pair { first, second, .. } => vec![first.as_str(), second.as_str()],
        }
    }

    /// Number of students seated on this bench.
    pub fn len(&self) -> usize {
        match self {
            Bench::Empty => 0,
            Bench::Single(_) => 1,
            Bench::Pair { .. } => 2,
        }
    }

    /// Returns true if nobody is seated here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Bench::Empty)
    }
}

/// Benches serialize as a plain list of roll numbers.
impl Serialize for Bench {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let occupants = self.occupants();
        let mut seq = serializer.serialize_seq(Some(occupants.len()))?;
        for roll_no in occupants {
            seq.serialize_element(roll_no)?;
        }
        seq.end()
    }
}

/// Counts describing how a grid was filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GridSummary {
    /// Benches holding two students of different courses.
    pub pairs: usize,

    /// Benches holding two students of the same course.
    pub same_course_pairs: usize,

    /// Benches holding one student.
    pub singles: usize,

    /// Benches left empty.
    pub empty: usize,

    /// Students seated in total.
    pub placed: usize,
}

/// Row-major `rows` × `cols` matrix of benches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingGrid {
    shape: RoomShape,
    benches: Vec<Bench>,
}

impl SeatingGrid {
    /// Wrap row-major benches; `benches.len()` must equal the bench count.
    pub(crate) fn from_benches(shape: RoomShape, benches: Vec<Bench>) -> Self {
        debug_assert_eq!(benches.len() as u64, shape.benches());
        Self { shape, benches }
    }

    /// Shape the grid was allocated for.
    pub fn shape(&self) -> RoomShape {
        self.shape
    }

    /// Number of bench rows.
    pub fn row_count(&self) -> usize {
        self.shape.rows() as usize
    }

    /// Number of benches per row.
    pub fn col_count(&self) -> usize {
        self.shape.cols() as usize
    }

    /// Bench at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Bench> {
        if row >= self.row_count() || col >= self.col_count() {
            return None;
        }
        self.benches.get(row * self.col_count() + col)
    }

    /// Iterate rows of benches, front row first.
    pub fn rows(&self) -> std::slice::Chunks<'_, Bench> {
        self.benches.chunks(self.col_count())
    }

    /// Iterate `(row, col, bench)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Bench)> + '_ {
        let cols = self.col_count();
        self.benches
            .iter()
            .enumerate()
            .map(move |(i, bench)| (i / cols, i % cols, bench))
    }

    /// Every seated roll number in row-major order.
    pub fn roll_numbers(&self) -> impl Iterator<Item = &str> + '_ {
        self.benches.iter().flat_map(Bench::occupants)
    }

    /// Tally pairs, singles, and empty benches.
    pub fn summary(&self) -> GridSummary {
        let mut summary = GridSummary::default();
        for bench in &self.benches {
            match bench {
                Bench::Empty => summary.empty += 1,
                Bench::Single(_) => summary.singles += 1,
                Bench::Pair { same_course, .. } => {
                    if *same_course {
                        summary.same_course_pairs += 1;
                    } else {
                        summary.pairs += 1;
                    }
                }
            }
            summary.placed += bench.len();
        }
        summary
    }
}

/// Grids serialize as nested lists: rows → benches → roll numbers.
impl Serialize for SeatingGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.row_count()))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
