use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub type PeerId = u64;

/// 已注册连接的集合
///
/// 每个连接对应一个无界发送端，由连接自己的写任务消费。
#[derive(Default)]
pub struct RelayHub {
    peers: RwLock<HashMap<PeerId, UnboundedSender<String>>>,
    next_id: AtomicU64,
}

impl RelayHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self) -> (PeerId, UnboundedReceiver<String>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let (tx, rx) = mpsc::unbounded_channel();
        self.peers.write().await.insert(id, tx);
        (id, rx)
    }

    pub async fn unregister(&self, id: PeerId) {
        self.peers.write().await.remove(&id);
    }

    /// 以 `{"text": payload}` 包装后发给除发送者以外的所有连接，
    /// 返回成功投递的数量；已关闭的连接直接跳过
    pub async fn broadcast(&self, from: PeerId, payload: &str) -> usize {
        let frame = serde_json::json!({ "text": payload }).to_string();

        self.peers
            .read()
            .await
            .iter()
            .filter(|(id, _)| **id != from)
            .filter(|(_, tx)| tx.send(frame.clone()).is_ok())
            .count()
    }

    pub async fn peer_count(&self) -> usize {
        self.peers.read().await.len()
    }
}
