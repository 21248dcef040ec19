// 持久化层
// 商品目录保存在 JSON 文件中，用户只保存在进程内存中

use std::path::PathBuf;

use thiserror::Error;

pub mod products;
pub mod users;

pub use products::ProductStore;
pub use users::UserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("读写 {} 失败: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("解析 {} 失败: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} 中的商品 id 已达上限", .path.display())]
    IdExhausted { path: PathBuf },
}
