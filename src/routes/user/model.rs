use serde::{Deserialize, Serialize};

use crate::database::UserStore;
use crate::error::AppError;
use crate::models::{SessionUser, User};
use crate::utils::{hash_password_blocking, verify_password_blocking};

pub const DUPLICATE_USER: &str = "该用户名已被注册";
pub const USER_NOT_FOUND: &str = "用户不存在";
pub const WRONG_PASSWORD: &str = "密码错误";

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: SessionUser,
}

impl CredentialsRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::Validation("用户名和密码不能为空".to_string()));
        }
        Ok(())
    }
}

impl User {
    /// 注册新用户；重名返回 Conflict
    pub async fn register(
        store: &UserStore,
        req: CredentialsRequest,
        cost: u32,
    ) -> Result<Self, AppError> {
        req.validate()?;

        // 先查重，避免为注定失败的请求计算哈希
        if store.exists(&req.username).await {
            return Err(AppError::Conflict(DUPLICATE_USER.to_string()));
        }

        let password_hash = hash_password_blocking(req.password, cost).await??;
        let user = store
            .insert(&req.username, password_hash)
            .await
            .ok_or_else(|| AppError::Conflict(DUPLICATE_USER.to_string()))?;

        tracing::info!("注册用户 {} (id={})", user.username, user.id);
        Ok(user)
    }

    /// 校验用户名与密码，失败一律 401，没有锁定策略
    pub async fn authenticate(store: &UserStore, req: CredentialsRequest) -> Result<Self, AppError> {
        let user = store
            .find_by_username(&req.username)
            .await
            .ok_or_else(|| AppError::InvalidCredentials(USER_NOT_FOUND.to_string()))?;

        if !user.verify_login(req.password).await? {
            return Err(AppError::InvalidCredentials(WRONG_PASSWORD.to_string()));
        }
        Ok(user)
    }

    pub async fn verify_login(&self, password: String) -> Result<bool, AppError> {
        Ok(verify_password_blocking(password, self.password_hash.clone()).await??)
    }
}
