//! UseCase: ルームの削除（退出）処理

use std::sync::Arc;

use crate::domain::{Room, RoomIndex, RoomRepository};

use super::error::RoomOperationError;

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 指定位置のルームをちょうど一つ削除する
    ///
    /// 後続のルームの位置は一つずつ前にずれる。
    pub async fn execute(&self, room_ref: &str) -> Result<Vec<Room>, RoomOperationError> {
        let index = RoomIndex::parse(room_ref)?;
        let rooms = self.repository.remove(index).await?;
        tracing::info!("Removed room {} ({} rooms remain)", index, rooms.len());
        Ok(rooms)
    }
}
