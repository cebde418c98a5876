//! Domain errors.

use thiserror::Error;

/// Errors raised while constructing value objects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// The room reference is not a non-negative decimal position
    #[error("Invalid room reference '{0}': expected a non-negative integer position")]
    InvalidRoomRef(String),
}

/// Errors returned by repository implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No room exists at the requested position
    #[error("Room at position {index} not found (registry holds {len} rooms)")]
    RoomNotFound { index: usize, len: usize },
}
