// 缓存模块
// 会话存储与 /data 的单槽文件缓存

use std::path::PathBuf;

use thiserror::Error;

pub mod models;
pub mod operations;

pub use models::{CacheSource, CachedPayload, CachedSession};
pub use operations::{FreshnessCache, SessionStore};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("缓存文件 {} 读写失败: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("缓存序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}
