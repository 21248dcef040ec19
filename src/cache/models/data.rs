use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SessionUser;

pub const DATA_MESSAGE: &str = "来自服务器的动态数据";

/// `/data` 返回的数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheSource {
    Cache,
    Generated,
}

/// 写入缓存文件的负载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedPayload {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub user: SessionUser,
}

impl CachedPayload {
    pub fn generate(user: SessionUser) -> Self {
        Self {
            timestamp: Utc::now(),
            message: DATA_MESSAGE.to_string(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CacheSource::Cache).unwrap(), r#""cache""#);
        assert_eq!(
            serde_json::to_string(&CacheSource::Generated).unwrap(),
            r#""generated""#
        );
    }
}
