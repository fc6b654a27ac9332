//! Storage errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use seatplan_planner::ProviderError;
use seatplan_roster::RosterError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from reading or writing stored records.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid record at {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for ProviderError {
    fn from(err: StoreError) -> Self {
        ProviderError::new("seat store lookup failed", err)
    }
}
