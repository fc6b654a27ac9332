//! On-disk document formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatplan_planner::{ClassRecord, RoomConfiguration, RoomRecord};
use seatplan_roster::{Roster, RoomShape, SEATS_PER_BENCH};

/// A stored class upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredClass {
    pub class_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub total_students: usize,
    pub students: Roster,
}

impl StoredClass {
    pub fn new(class_name: impl Into<String>, students: Roster, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            class_name: class_name.into(),
            uploaded_at,
            total_students: students.len(),
            students,
        }
    }
}

impl From<StoredClass> for ClassRecord {
    fn from(stored: StoredClass) -> Self {
        ClassRecord {
            class_name: stored.class_name,
            uploaded_at: Some(stored.uploaded_at),
            students: stored.students,
        }
    }
}

/// Room dimensions as written to disk.
///
/// Kept signed so a hand-edited file with bad dimensions still loads and is
/// rejected by the planner with a clear message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRoomConfiguration {
    pub rows: i64,
    pub cols: i64,
    #[serde(default)]
    pub total_capacity: u64,
}

/// Human-oriented description of the bench layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLayout {
    pub total_rows: i64,
    pub total_columns: i64,
    pub seats_per_bench: u32,
}

/// A stored room configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRoom {
    pub room_name: String,
    pub created_at: DateTime<Utc>,
    pub configuration: StoredRoomConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<StoredLayout>,
}

impl StoredRoom {
    pub fn new(room_name: impl Into<String>, shape: RoomShape, created_at: DateTime<Utc>) -> Self {
        let rows = i64::from(shape.rows());
        let cols = i64::from(shape.cols());
        Self {
            room_name: room_name.into(),
            created_at,
            configuration: StoredRoomConfiguration {
                rows,
                cols,
                total_capacity: shape.capacity(),
            },
            layout: Some(StoredLayout {
                total_rows: rows,
                total_columns: cols,
                seats_per_bench: SEATS_PER_BENCH,
            }),
        }
    }
}

impl From<StoredRoom> for RoomRecord {
    fn from(stored: StoredRoom) -> Self {
        RoomRecord {
            room_name: stored.room_name,
            created_at: Some(stored.created_at),
            configuration: RoomConfiguration {
                rows: stored.configuration.rows,
                cols: stored.configuration.cols,
            },
        }
    }
}

/// One line of `list_classes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub class_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub total_students: usize,
    pub file: String,
}

/// One line of `list_rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub room_name: String,
    pub created_at: DateTime<Utc>,
    pub total_capacity: u64,
    pub file: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_stored_room_document_shape() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let room = StoredRoom::new("Hall A", RoomShape::new(5, 4).unwrap(), at);
        let json = serde_json::to_value(&room).unwrap();

        assert_eq!(json["room_name"], "Hall A");
        assert_eq!(
            json["configuration"],
            serde_json::json!({ "rows": 5, "cols": 4, "total_capacity": 40 })
        );
        assert_eq!(
            json["layout"],
            serde_json::json!({ "total_rows": 5, "total_columns": 4, "seats_per_bench": 2 })
        );
    }

    #[test]
    fn test_stored_room_tolerates_missing_layout() {
        let room: StoredRoom = serde_json::from_str(
            r#"{
                "room_name": "old",
                "created_at": "2025-01-02T03:04:05Z",
                "configuration": { "rows": 0, "cols": 3 }
            }"#,
        )
        .unwrap();
        let record = RoomRecord::from(room);
        assert_eq!(record.configuration, RoomConfiguration { rows: 0, cols: 3 });
    }
}
