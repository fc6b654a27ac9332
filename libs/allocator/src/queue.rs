//! Run-local availability queue over one roster.

use std::collections::VecDeque;

use seatplan_roster::{Roster, StudentRecord};

/// Students of one roster that have not been seated yet.
///
/// Holds indices into the borrowed roster, in roster order. Indices only
/// ever leave the queue; nothing is pushed back.
#[derive(Debug)]
pub(crate) struct AvailableQueue<'r> {
    roster: &'r Roster,
    indices: VecDeque<usize>,
}

impl<'r> AvailableQueue<'r> {
    /// Queue holding every student of `roster`.
    pub(crate) fn new(roster: &'r Roster) -> Self {
        Self {
            roster,
            indices: (0..roster.len()).collect(),
        }
    }

    /// Earliest still-available student, without removing it.
    pub(crate) fn peek(&self) -> Option<&'r StudentRecord> {
        self.indices.front().map(|&i| self.student(i))
    }

    /// Remove and return the earliest still-available student.
    pub(crate) fn pop_front(&mut self) -> Option<&'r StudentRecord> {
        let index = self.indices.pop_front()?;
        Some(self.student(index))
    }

    /// Queue position of the first student matching `pred`.
    pub(crate) fn position(&self, mut pred: impl FnMut(&StudentRecord) -> bool) -> Option<usize> {
        self.indices.iter().position(|&i| pred(self.student(i)))
    }

    /// Remove the student at queue position `pos`.
    pub(crate) fn take(&mut self, pos: usize) -> &'r StudentRecord {
        let index = self.indices[pos];
        self.indices.remove(pos);
        self.student(index)
    }

    fn student(&self, index: usize) -> &'r StudentRecord {
        // Indices come from 0..roster.len() and the roster is borrowed for 'r.
        &self.roster.students()[index]
    }
}
