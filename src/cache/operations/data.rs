use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde_json::Value;
use tokio::sync::Mutex;

use crate::cache::CacheError;
use crate::cache::models::data::{CacheSource, CachedPayload};
use crate::models::SessionUser;

/// 单槽文件缓存：文件修改时间在窗口内则原样返回，否则重新生成并覆盖
pub struct FreshnessCache {
    path: PathBuf,
    window: Duration,
    // 串行化 检查+重建，边界时刻的并发请求只会重建一次
    slot: Mutex<()>,
}

impl FreshnessCache {
    pub fn new(path: impl Into<PathBuf>, window: Duration) -> Self {
        Self {
            path: path.into(),
            window,
            slot: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self, user: &SessionUser) -> Result<(CacheSource, Value), CacheError> {
        let _guard = self.slot.lock().await;

        if let Some(cached) = self.read_fresh().await? {
            return Ok((CacheSource::Cache, cached));
        }

        let payload = serde_json::to_value(CachedPayload::generate(user.clone()))?;
        self.write(&payload).await?;
        tracing::debug!("缓存已重新生成: {}", self.path.display());
        Ok((CacheSource::Generated, payload))
    }

    async fn read_fresh(&self) -> Result<Option<Value>, CacheError> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        let modified = metadata.modified().map_err(|e| self.io_error(e))?;
        if !is_fresh(modified, SystemTime::now(), self.window) {
            return Ok(None);
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("缓存文件损坏，重新生成: {}", e);
                Ok(None)
            }
        }
    }

    async fn write(&self, payload: &Value) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_vec_pretty(payload)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// 修改时间晚于当前时间（时钟回拨）也视为新鲜
fn is_fresh(modified: SystemTime, now: SystemTime, window: Duration) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age < window,
        Err(_) => true,
    }
}
