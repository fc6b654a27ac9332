//! Errors raised while preparing a seating plan.

use thiserror::Error;

use crate::ProviderError;

/// Result type for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Reasons a seating plan request is rejected.
///
/// Every variant except `Provider` is a precondition the planner checks
/// before the allocator runs.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("class '{0}' not found")]
    ClassNotFound(String),

    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("class '{0}' has no students")]
    EmptyRoster(String),

    #[error("room '{room_name}' has invalid configuration: {rows} rows x {cols} cols")]
    InvalidShape {
        room_name: String,
        rows: i64,
        cols: i64,
    },

    #[error(
        "total students ({total_students}) exceeds room capacity ({capacity}) by {overage}"
    )]
    CapacityExceeded {
        total_students: u64,
        capacity: u64,
        overage: u64,
    },

    #[error("storage error: {0}")]
    Provider(#[from] ProviderError),
}

impl PlanError {
    /// Stable machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::ClassNotFound(_) | PlanError::RoomNotFound(_) => "not_found",
            PlanError::EmptyRoster(_) => "empty_roster",
            PlanError::InvalidShape { .. } => "invalid_shape",
            PlanError::CapacityExceeded { .. } => "capacity_exceeded",
            PlanError::Provider(_) => "provider",
        }
    }

    /// Returns true if the request itself was at fault rather than storage.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, PlanError::Provider(_))
    }
}
