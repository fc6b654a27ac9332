//! Lookup traits for stored class rosters and rooms.
//!
//! The planner never touches storage directly; it resolves names through
//! these traits. `Ok(None)` means "no such record", while `Err` is reserved
//! for a backend that could not answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use seatplan_roster::{Roster, SEATS_PER_BENCH};

/// Failure inside a roster or room backend.
#[derive(Debug, Error)]
#[error("{context}: {source}")]
pub struct ProviderError {
    context: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl ProviderError {
    /// Wrap a backend error with a short description of what was attempted.
    pub fn new(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// The most recent upload of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub class_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,

    pub students: Roster,
}

impl ClassRecord {
    pub fn new(class_name: impl Into<String>, students: Roster) -> Self {
        Self {
            class_name: class_name.into(),
            uploaded_at: None,
            students,
        }
    }
}

/// A stored room configuration.
///
/// Dimensions are kept as stored; a record with non-positive rows or
/// columns is rejected when a plan is requested, not when it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfiguration {
    pub rows: i64,
    pub cols: i64,
}

impl RoomConfiguration {
    /// Seats available, or zero for a malformed configuration.
    pub fn total_capacity(&self) -> u64 {
        if self.rows <= 0 || self.cols <= 0 {
            return 0;
        }
        (self.rows as u64)
            .saturating_mul(self.cols as u64)
            .saturating_mul(u64::from(SEATS_PER_BENCH))
    }
}

/// The most recent configuration stored under a room name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    pub configuration: RoomConfiguration,
}

impl RoomRecord {
    pub fn new(room_name: impl Into<String>, rows: i64, cols: i64) -> Self {
        Self {
            room_name: room_name.into(),
            created_at: None,
            configuration: RoomConfiguration { rows, cols },
        }
    }
}

/// Resolves a class name to its latest roster.
pub trait RosterProvider {
    fn class(&self, class_name: &str) -> Result<Option<ClassRecord>, ProviderError>;
}

/// Resolves a room name to its latest configuration.
pub trait RoomProvider {
    fn room(&self, room_name: &str) -> Result<Option<RoomRecord>, ProviderError>;
}

impl<T: RosterProvider + ?Sized> RosterProvider for &T {
    fn class(&self, class_name: &str) -> Result<Option<ClassRecord>, ProviderError> {
        (**self).class(class_name)
    }
}

impl<T: RoomProvider + ?Sized> RoomProvider for &T {
    fn room(&self, room_name: &str) -> Result<Option<RoomRecord>, ProviderError> {
        (**self).room(room_name)
    }
}
