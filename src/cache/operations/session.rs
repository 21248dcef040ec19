use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::cache::models::session::CachedSession;
use crate::models::SessionUser;

/// 服务端会话存储，以 cookie 中的不透明令牌为键
///
/// 过期时间从创建时刻起算，访问不会续期。
pub struct SessionStore {
    sessions: RwLock<HashMap<String, CachedSession>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 创建会话
    pub async fn create(&self, user: SessionUser) -> CachedSession {
        let now = chrono::Utc::now().timestamp();
        let session = CachedSession {
            session_id: Uuid::new_v4().to_string(),
            user,
            created_at: now,
            expires_at: now + self.ttl.as_secs() as i64,
        };

        self.sessions
            .write()
            .await
            .insert(session.session_id.clone(), session.clone());
        tracing::debug!("创建会话 user_id={}", session.user.id);
        session
    }

    /// 获取会话，过期的会话视为不存在
    pub async fn get(&self, session_id: &str) -> Option<CachedSession> {
        let now = chrono::Utc::now().timestamp();
        self.sessions
            .read()
            .await
            .get(session_id)
            .filter(|s| !s.is_expired(now))
            .cloned()
    }

    /// 删除会话
    pub async fn remove(&self, session_id: &str) -> Option<CachedSession> {
        self.sessions.write().await.remove(session_id)
    }

    /// 清理过期会话，返回清理数量
    pub async fn purge_expired(&self) -> usize {
        let now = chrono::Utc::now().timestamp();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }
}
