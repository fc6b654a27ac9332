//! # seatplan-planner
//!
//! Turns a request to seat two named classes in a named room into a
//! finished seating plan.
//!
//! ## Responsibilities
//!
//! - Resolve class rosters and room configurations through
//!   [`RosterProvider`] and [`RoomProvider`]
//! - Reject requests the allocator must never receive: unknown names, empty
//!   rosters, malformed rooms, and rosters that exceed the room's capacity
//! - Run the allocator and package its grid as a [`SeatingPlan`]
//!
//! Storage lives behind the provider traits; see `seatplan-store`.

mod error;
mod plan;
mod provider;

pub use error::{PlanError, PlanResult};
pub use plan::{
    AllocationRequest, PlanRoomConfiguration, Planner, SeatingPlan, DEFAULT_DATE_FORMAT,
};
pub use provider::{
    ClassRecord, ProviderError, RoomConfiguration, RoomProvider, RoomRecord, RosterProvider,
};
