//! Conversion logic between DTOs and domain entities.

use crate::domain::Room;
use crate::infrastructure::dto::http as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Room> for dto::RoomDto {
    fn from(model: Room) -> Self {
        Self {
            name: model.name,
            messages: model.messages,
            users: model.users,
        }
    }
}

/// Convert a registry snapshot into its wire form, keeping order
pub fn rooms_to_dto(rooms: Vec<Room>) -> Vec<dto::RoomDto> {
    rooms.into_iter().map(dto::RoomDto::from).collect()
}
