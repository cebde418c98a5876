//! UseCase: ルームへのユーザー招待

use std::sync::Arc;

use crate::domain::{Room, RoomIndex, RoomRepository};

use super::error::RoomOperationError;

/// ユーザー招待のユースケース
pub struct InviteUserUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl InviteUserUseCase {
    /// 新しい InviteUserUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 招待を実行
    ///
    /// # Arguments
    ///
    /// * `room_ref` - ルームの位置（パスから受け取った文字列）
    /// * `user` - 追加するユーザー名
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Room>)` - 追加後の全てのルーム
    /// * `Err(RoomOperationError)` - 参照が不正、またはルームが存在しない
    pub async fn execute(
        &self,
        room_ref: &str,
        user: String,
    ) -> Result<Vec<Room>, RoomOperationError> {
        let index = RoomIndex::parse(room_ref)?;
        let rooms = self.repository.add_user(index, user.clone()).await?;
        tracing::info!("Invited '{}' to room {}", user, index);
        Ok(rooms)
    }
}
