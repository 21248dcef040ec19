/// 缓存数据模型
pub mod data;
pub mod session;

pub use data::{CacheSource, CachedPayload};
pub use session::CachedSession;
