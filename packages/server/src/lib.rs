//! In-memory chat room coordination server.
//!
//! Clients register a display name derived from their network address, create
//! rooms, invite users, post messages and leave rooms over a small HTTP API.
//! All state lives in process memory.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use std::sync::Arc;

use infrastructure::repository::{InMemoryConnectionRepository, InMemoryRoomRepository};
use ui::Server;
use usecase::{
    CreateRoomUseCase, GetConnectionsUseCase, GetRoomsUseCase, InviteUserUseCase,
    LeaveRoomUseCase, PostMessageUseCase, RegisterConnectionUseCase,
};

/// Wire the in-memory repositories, usecases and server together.
///
/// Each call produces a server with its own empty registries.
pub fn build_server() -> Server {
    // 1. Repositories (in-memory database)
    let connection_repository = Arc::new(InMemoryConnectionRepository::default());
    let room_repository = Arc::new(InMemoryRoomRepository::default());

    // 2. UseCases
    Server::new(
        Arc::new(RegisterConnectionUseCase::new(connection_repository.clone())),
        Arc::new(GetConnectionsUseCase::new(connection_repository)),
        Arc::new(CreateRoomUseCase::new(room_repository.clone())),
        Arc::new(GetRoomsUseCase::new(room_repository.clone())),
        Arc::new(InviteUserUseCase::new(room_repository.clone())),
        Arc::new(LeaveRoomUseCase::new(room_repository.clone())),
        Arc::new(PostMessageUseCase::new(room_repository)),
    )
}
