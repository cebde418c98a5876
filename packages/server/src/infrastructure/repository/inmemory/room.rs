//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `Vec<Room>` をインメモリ DB として使用し、ルームは位置で参照されます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Room, RoomIndex, RoomRepository};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    /// 作成順のルーム
    rooms: Arc<Mutex<Vec<Room>>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(rooms: Arc<Mutex<Vec<Room>>>) -> Self {
        Self { rooms }
    }

    /// Apply `update` to the room at `index` and return the updated snapshot.
    async fn update_room<F>(
        &self,
        index: RoomIndex,
        update: F,
    ) -> Result<Vec<Room>, RepositoryError>
    where
        F: FnOnce(&mut Room) + Send,
    {
        let mut rooms = self.rooms.lock().await;
        let len = rooms.len();
        let room = rooms
            .get_mut(index.value())
            .ok_or(RepositoryError::RoomNotFound {
                index: index.value(),
                len,
            })?;
        update(room);
        Ok(rooms.clone())
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn list(&self) -> Vec<Room> {
        self.rooms.lock().await.clone()
    }

    async fn create(&self, room: Room) -> Vec<Room> {
        let mut rooms = self.rooms.lock().await;
        rooms.push(room);
        rooms.clone()
    }

    async fn add_user(
        &self,
        index: RoomIndex,
        user: String,
    ) -> Result<Vec<Room>, RepositoryError> {
        self.update_room(index, |room| room.add_user(user)).await
    }

    async fn add_message(
        &self,
        index: RoomIndex,
        body: String,
    ) -> Result<Vec<Room>, RepositoryError> {
        self.update_room(index, |room| room.add_message(body)).await
    }

    async fn remove(&self, index: RoomIndex) -> Result<Vec<Room>, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if index.value() >= rooms.len() {
            return Err(RepositoryError::RoomNotFound {
                index: index.value(),
                len: rooms.len(),
            });
        }
        rooms.remove(index.value());
        Ok(rooms.clone())
    }
}
