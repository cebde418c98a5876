//! UseCase: メッセージ投稿処理
//!
//! リクエストボディをそのままルームのメッセージとして追加します。

use std::sync::Arc;

use crate::domain::{Room, RoomIndex, RoomRepository};

use super::error::RoomOperationError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ投稿を実行
    ///
    /// `body` は加工せずに保存する。
    pub async fn execute(
        &self,
        room_ref: &str,
        body: String,
    ) -> Result<Vec<Room>, RoomOperationError> {
        let index = RoomIndex::parse(room_ref)?;
        let len = body.len();
        let rooms = self.repository.add_message(index, body).await?;
        tracing::info!("Posted message ({} bytes) to room {}", len, index);
        Ok(rooms)
    }
}
