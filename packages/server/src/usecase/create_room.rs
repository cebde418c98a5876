//! UseCase: ルーム作成処理

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム作成を実行
    ///
    /// 名前の重複や形式は検証しない。
    ///
    /// # Returns
    ///
    /// 作成後の全てのルーム（作成順）
    pub async fn execute(&self, name: String) -> Vec<Room> {
        tracing::info!("Creating room '{}'", name);
        self.repository.create(Room::new(name)).await
    }
}
