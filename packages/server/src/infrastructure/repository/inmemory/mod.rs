//! In-memory repositories backed by `tokio::sync::Mutex`-guarded vectors.

mod connection;
mod room;

pub use connection::InMemoryConnectionRepository;
pub use room::InMemoryRoomRepository;
