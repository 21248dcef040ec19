use serde::{Deserialize, Serialize};

use crate::models::SessionUser;

/// 会话缓存数据模型
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedSession {
    pub session_id: String,
    pub user: SessionUser,
    pub created_at: i64, // Unix timestamp
    pub expires_at: i64, // Unix timestamp
}

impl CachedSession {
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}
