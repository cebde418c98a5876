//! Domain layer: entities, value objects and the repository interfaces the
//! usecase layer depends on.

pub mod entity;
pub mod error;
pub mod name_resolver;
pub mod repository;
pub mod value_object;

pub use entity::{DEFAULT_ROOM_MEMBER, Room};
pub use error::{RepositoryError, ValueObjectError};
pub use name_resolver::{NAMES, hash_code, resolve_display_name};
pub use repository::{ConnectionRepository, RoomRepository};
pub use value_object::{DisplayName, RoomIndex};
