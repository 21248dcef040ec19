use bcrypt::{hash, verify};

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

/// 在阻塞线程池上计算哈希，避免占用异步工作线程
pub async fn hash_password_blocking(
    password: String,
    cost: u32,
) -> Result<Result<String, bcrypt::BcryptError>, tokio::task::JoinError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost)).await
}

pub async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<Result<bool, bcrypt::BcryptError>, tokio::task::JoinError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await
}
