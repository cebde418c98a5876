//! InMemory Connection Repository 実装

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionRepository, DisplayName};

/// インメモリ Connection Repository 実装
#[derive(Default)]
pub struct InMemoryConnectionRepository {
    /// 登録順の表示名
    connections: Arc<Mutex<Vec<String>>>,
}

impl InMemoryConnectionRepository {
    /// 新しい InMemoryConnectionRepository を作成
    pub fn new(connections: Arc<Mutex<Vec<String>>>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn register(&self, name: DisplayName) -> Vec<String> {
        let mut connections = self.connections.lock().await;
        connections.push(name.into_string());
        connections.clone()
    }

    async fn list(&self) -> Vec<String> {
        self.connections.lock().await.clone()
    }
}
