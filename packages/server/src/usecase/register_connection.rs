//! UseCase: 接続の登録処理
//!
//! クライアントのアドレスから表示名を決定し、接続一覧に追加します。

use std::sync::Arc;

use crate::domain::{ConnectionRepository, DisplayName};

/// 接続登録のユースケース
pub struct RegisterConnectionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
}

impl RegisterConnectionUseCase {
    /// 新しい RegisterConnectionUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// 接続登録を実行
    ///
    /// # Arguments
    ///
    /// * `address` - クライアントのネットワークアドレス（任意の文字列を受け付ける）
    ///
    /// # Returns
    ///
    /// 登録後の全ての表示名（登録順）
    pub async fn execute(&self, address: &str) -> Vec<String> {
        let name = DisplayName::from_address(address);
        tracing::info!("Registering '{}' as '{}'", address, name.as_str());
        self.repository.register(name).await
    }
}
