//! Directory-backed store.
//!
//! Layout under the root directory:
//!
//! ```text
//! classes/<key>_<YYYYmmdd_HHMMSS>.json
//! rooms/<key>_<YYYYmmdd_HHMMSS>.json
//! ```
//!
//! `<key>` is the sanitized class or room name. Uploading a class replaces
//! every earlier file for the same key; rooms accumulate and the newest one
//! wins on lookup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use seatplan_planner::{ClassRecord, ProviderError, RoomProvider, RoomRecord, RosterProvider};
use seatplan_roster::{sanitize_name, Roster, RoomShape};

use crate::error::{StoreError, StoreResult};
use crate::records::{ClassSummary, RoomSummary, StoredClass, StoredRoom};

const CLASSES_DIR: &str = "classes";
const ROOMS_DIR: &str = "rooms";

/// `_YYYYmmdd_HHMMSS`
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const STAMP_LEN: usize = 16;

/// Outcome of storing a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedClass {
    pub record: StoredClass,
    pub path: PathBuf,
    /// True when an earlier upload of the same class was removed.
    pub replaced: bool,
}

/// Outcome of storing a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRoom {
    pub record: StoredRoom,
    pub path: PathBuf,
}

/// Store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store, creating its directories if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        for dir in [CLASSES_DIR, ROOMS_DIR] {
            let path = root.join(dir);
            fs::create_dir_all(&path).map_err(|e| StoreError::io(&path, e))?;
        }
        debug!(root = %root.display(), "Opened seat store");
        Ok(Self { root })
    }

    /// Root data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn classes_dir(&self) -> PathBuf {
        self.root.join(CLASSES_DIR)
    }

    fn rooms_dir(&self) -> PathBuf {
        self.root.join(ROOMS_DIR)
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Store a class roster, replacing any earlier upload of the same class.
    pub fn put_class(&self, class_name: &str, students: Roster) -> StoreResult<SavedClass> {
        self.put_class_at(class_name, students, Utc::now())
    }

    /// Store a class roster with an explicit upload time.
    pub fn put_class_at(
        &self,
        class_name: &str,
        students: Roster,
        uploaded_at: DateTime<Utc>,
    ) -> StoreResult<SavedClass> {
        let key = sanitize_name(class_name)?;
        let dir = self.classes_dir();

        let existing = matching_files(&dir, &key)?;
        let replaced = !existing.is_empty();

        // Earlier uploads are only removed once the new one is on disk.
        let record = StoredClass::new(class_name, students, uploaded_at);
        let path = dir.join(file_name(&key, uploaded_at));
        write_json(&path, &record)?;

        for old in existing.iter().filter(|old| **old != path) {
            fs::remove_file(old).map_err(|e| StoreError::io(old, e))?;
        }

        info!(
            class_name,
            total_students = record.total_students,
            replaced,
            path = %path.display(),
            "Stored class"
        );

        Ok(SavedClass {
            record,
            path,
            replaced,
        })
    }

    /// Latest upload of a class.
    pub fn get_class(&self, class_name: &str) -> StoreResult<Option<StoredClass>> {
        let Ok(key) = sanitize_name(class_name) else {
            return Ok(None);
        };
        match newest_file(&self.classes_dir(), &key)? {
            Some(path) => read_json(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Every stored class, newest upload first.
    pub fn list_classes(&self) -> StoreResult<Vec<ClassSummary>> {
        let mut out: Vec<ClassSummary> = read_all::<StoredClass>(&self.classes_dir())?
            .into_iter()
            .map(|(file, class)| ClassSummary {
                class_name: class.class_name,
                uploaded_at: class.uploaded_at,
                total_students: class.total_students,
                file,
            })
            .collect();
        out.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(out)
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    /// Store a room configuration.
    pub fn put_room(&self, room_name: &str, shape: RoomShape) -> StoreResult<SavedRoom> {
        self.put_room_at(room_name, shape, Utc::now())
    }

    /// Store a room configuration with an explicit creation time.
    pub fn put_room_at(
        &self,
        room_name: &str,
        shape: RoomShape,
        created_at: DateTime<Utc>,
    ) -> StoreResult<SavedRoom> {
        let key = sanitize_name(room_name)?;
        let record = StoredRoom::new(room_name, shape, created_at);
        let path = self.rooms_dir().join(file_name(&key, created_at));
        write_json(&path, &record)?;

        info!(
            room_name,
            rows = shape.rows(),
            cols = shape.cols(),
            total_capacity = shape.capacity(),
            path = %path.display(),
            "Stored room"
        );

        Ok(SavedRoom { record, path })
    }

    /// Latest configuration of a room.
    pub fn get_room(&self, room_name: &str) -> StoreResult<Option<StoredRoom>> {
        let Ok(key) = sanitize_name(room_name) else {
            return Ok(None);
        };
        match newest_file(&self.rooms_dir(), &key)? {
            Some(path) => read_json(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Every stored room file, newest first.
    pub fn list_rooms(&self) -> StoreResult<Vec<RoomSummary>> {
        let mut out: Vec<RoomSummary> = read_all::<StoredRoom>(&self.rooms_dir())?
            .into_iter()
            .map(|(file, room)| RoomSummary {
                room_name: room.room_name,
                created_at: room.created_at,
                total_capacity: room.configuration.total_capacity,
                file,
            })
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}

impl RosterProvider for FileStore {
    fn class(&self, class_name: &str) -> Result<Option<ClassRecord>, ProviderError> {
        Ok(self.get_class(class_name)?.map(ClassRecord::from))
    }
}

impl RoomProvider for FileStore {
    fn room(&self, room_name: &str) -> Result<Option<RoomRecord>, ProviderError> {
        Ok(self.get_room(room_name)?.map(RoomRecord::from))
    }
}

// =============================================================================
// File helpers
// =============================================================================

fn file_name(key: &str, at: DateTime<Utc>) -> String {
    format!("{key}_{}.json", at.format(STAMP_FORMAT))
}

/// Key portion of a stored file name, if it carries a timestamp suffix.
fn key_of(path: &Path) -> Option<&str> {
    if path.extension()? != "json" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.len() <= STAMP_LEN || !stem.is_char_boundary(stem.len() - STAMP_LEN) {
        return None;
    }
    let (key, stamp) = stem.split_at(stem.len() - STAMP_LEN);
    let stamp = stamp.as_bytes();
    let well_formed = stamp[0] == b'_'
        && stamp[9] == b'_'
        && stamp[1..9].iter().all(u8::is_ascii_digit)
        && stamp[10..].iter().all(u8::is_ascii_digit);
    well_formed.then_some(key)
}

/// Stored files in `dir` whose key is exactly `key`.
fn matching_files(dir: &Path, key: &str) -> StoreResult<Vec<PathBuf>> {
    Ok(json_files(dir)?
        .into_iter()
        .filter(|path| key_of(path) == Some(key))
        .collect())
}

/// Most recently modified file for `key`; ties go to the later file name.
fn newest_file(dir: &Path, key: &str) -> StoreResult<Option<PathBuf>> {
    let mut best: Option<(SystemTime, PathBuf)> = None;
    for path in matching_files(dir, key)? {
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| StoreError::io(&path, e))?;
        let newer = match &best {
            None => true,
            Some((best_time, best_path)) => (modified, &path) > (*best_time, best_path),
        };
        if newer {
            best = Some((modified, path));
        }
    }
    debug!(dir = %dir.display(), key, found = best.is_some(), "Resolved stored file");
    Ok(best.map(|(_, path)| path))
}

fn json_files(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every document in `dir`, skipping unreadable ones.
fn read_all<T: DeserializeOwned>(dir: &Path) -> StoreResult<Vec<(String, T)>> {
    let mut out = Vec::new();
    for path in json_files(dir)? {
        match read_json::<T>(&path) {
            Ok(doc) => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                out.push((file, doc));
            }
            Err(e) => warn!(error = %e, "Skipping unreadable record"),
        }
    }
    Ok(out)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| StoreError::json(path, e))
}

/// Write via a temp file and rename so readers never see a partial document.
fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::json(path, e))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content).map_err(|e| StoreError::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}
