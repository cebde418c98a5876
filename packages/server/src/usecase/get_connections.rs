//! UseCase: 接続一覧の取得

use std::sync::Arc;

use crate::domain::ConnectionRepository;

/// 接続一覧取得のユースケース
pub struct GetConnectionsUseCase {
    repository: Arc<dyn ConnectionRepository>,
}

impl GetConnectionsUseCase {
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Vec<String> {
        self.repository.list().await
    }
}
