//! UseCase 層
//!
//! HTTP エンドポイントごとに一つのユースケースを提供します。
//! 各ユースケースは domain 層の Repository trait にのみ依存します。

mod create_room;
mod error;
mod get_connections;
mod get_rooms;
mod invite_user;
mod leave_room;
mod post_message;
mod register_connection;

pub use create_room::CreateRoomUseCase;
pub use error::RoomOperationError;
pub use get_connections::GetConnectionsUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use invite_user::InviteUserUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use post_message::PostMessageUseCase;
pub use register_connection::RegisterConnectionUseCase;
