//! In-memory store for tests and embedding.

use std::collections::BTreeMap;

use seatplan_planner::{ClassRecord, ProviderError, RoomProvider, RoomRecord, RosterProvider};
use seatplan_roster::{sanitize_name, Roster, RoomShape};

use crate::error::StoreResult;

/// Keeps the latest class and room records keyed by sanitized name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    classes: BTreeMap<String, ClassRecord>,
    rooms: BTreeMap<String, RoomRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a class, returning true if it replaced an earlier one.
    pub fn put_class(&mut self, class_name: &str, students: Roster) -> StoreResult<bool> {
        let key = sanitize_name(class_name)?;
        let record = ClassRecord::new(class_name, students);
        Ok(self.classes.insert(key, record).is_some())
    }

    /// Store a room, returning true if it replaced an earlier one.
    pub fn put_room(&mut self, room_name: &str, shape: RoomShape) -> StoreResult<bool> {
        let key = sanitize_name(room_name)?;
        let record = RoomRecord::new(room_name, i64::from(shape.rows()), i64::from(shape.cols()));
        Ok(self.rooms.insert(key, record).is_some())
    }

    /// Store a room record as-is, including malformed dimensions.
    pub fn put_room_record(&mut self, record: RoomRecord) -> StoreResult<bool> {
        let key = sanitize_name(&record.room_name)?;
        Ok(self.rooms.insert(key, record).is_some())
    }
}

impl RosterProvider for MemoryStore {
    fn class(&self, class_name: &str) -> Result<Option<ClassRecord>, ProviderError> {
        // A name that cannot be a storage key cannot have been stored.
        let Ok(key) = sanitize_name(class_name) else {
            return Ok(None);
        };
        Ok(self.classes.get(&key).cloned())
    }
}

impl RoomProvider for MemoryStore {
    fn room(&self, room_name: &str) -> Result<Option<RoomRecord>, ProviderError> {
        let Ok(key) = sanitize_name(room_name) else {
            return Ok(None);
        };
        Ok(self.rooms.get(&key).cloned())
    }
}
