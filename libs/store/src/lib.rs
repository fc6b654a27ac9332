//! # seatplan-store
//!
//! Storage for class rosters and room configurations.
//!
//! - [`FileStore`] keeps one JSON document per upload under a data
//!   directory and resolves names to the newest document.
//! - [`MemoryStore`] keeps records in process.
//!
//! Both implement the planner's provider traits.

mod error;
mod file;
mod memory;
mod records;

pub use error::{StoreError, StoreResult};
pub use file::{FileStore, SavedClass, SavedRoom};
pub use memory::MemoryStore;
pub use records::{
    ClassSummary, RoomSummary, StoredClass, StoredLayout, StoredRoom, StoredRoomConfiguration,
};
