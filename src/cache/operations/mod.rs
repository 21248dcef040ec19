/// 缓存操作
pub mod data;
pub mod session;

pub use data::FreshnessCache;
pub use session::SessionStore;
