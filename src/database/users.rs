use tokio::sync::RwLock;

use crate::models::User;

/// 进程内用户列表
#[derive(Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn exists(&self, username: &str) -> bool {
        self.users.read().await.iter().any(|u| u.username == username)
    }

    /// 用户名已存在时返回 `None`；检查与追加在同一把写锁内完成
    pub async fn insert(&self, username: &str, password_hash: String) -> Option<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == username) {
            return None;
        }

        let user = User {
            id: users.len() as u64 + 1,
            username: username.to_string(),
            password_hash,
        };
        users.push(user.clone());
        Some(user)
    }
}
