//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{DisplayName, RepositoryError, Room, RoomIndex};

/// Connection registry
///
/// Registered display names in registration order. Duplicates are kept.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// 表示名を追加し、更新後の一覧を返す
    async fn register(&self, name: DisplayName) -> Vec<String>;

    /// 登録済みの表示名一覧を取得
    async fn list(&self) -> Vec<String>;
}

/// Room registry
///
/// Rooms are addressed by their current position. Every mutating method applies
/// the change and takes the returned snapshot under the same lock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 全ルームを取得
    async fn list(&self) -> Vec<Room>;

    /// ルームを末尾に追加
    async fn create(&self, room: Room) -> Vec<Room>;

    /// 指定位置のルームにユーザーを追加
    async fn add_user(
        &self,
        index: RoomIndex,
        user: String,
    ) -> Result<Vec<Room>, RepositoryError>;

    /// 指定位置のルームにメッセージを追加
    async fn add_message(
        &self,
        index: RoomIndex,
        body: String,
    ) -> Result<Vec<Room>, RepositoryError>;

    /// 指定位置のルームを削除
    async fn remove(&self, index: RoomIndex) -> Result<Vec<Room>, RepositoryError>;
}
