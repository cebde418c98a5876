//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors shared by the position-addressed room operations
/// (invite, leave, post message)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomOperationError {
    /// The room reference could not be parsed as a position
    #[error("Invalid room reference '{0}'")]
    InvalidRoomRef(String),

    /// No room exists at the position
    #[error("Room {0} not found")]
    RoomNotFound(usize),
}

impl From<ValueObjectError> for RoomOperationError {
    fn from(err: ValueObjectError) -> Self {
        match err {
            ValueObjectError::InvalidRoomRef(room_ref) => Self::InvalidRoomRef(room_ref),
        }
    }
}

impl From<RepositoryError> for RoomOperationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RoomNotFound { index, .. } => Self::RoomNotFound(index),
        }
    }
}
