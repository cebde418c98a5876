//! Request handlers.

pub mod http;

pub use http::{
    create_room, get_connections, get_rooms, health_check, invite_user, leave_room,
    post_message, register_connection,
};
