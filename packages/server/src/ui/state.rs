//! Server state.

use std::sync::Arc;

use crate::usecase::{
    CreateRoomUseCase, GetConnectionsUseCase, GetRoomsUseCase, InviteUserUseCase,
    LeaveRoomUseCase, PostMessageUseCase, RegisterConnectionUseCase,
};

/// Shared application state
pub struct AppState {
    pub register_connection_usecase: Arc<RegisterConnectionUseCase>,
    pub get_connections_usecase: Arc<GetConnectionsUseCase>,
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub invite_user_usecase: Arc<InviteUserUseCase>,
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    pub post_message_usecase: Arc<PostMessageUseCase>,
}
