use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::StoreError;
use crate::models::{Product, ProductDraft, ProductPatch};

#[derive(Deserialize)]
struct ProductDocument {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Serialize)]
struct ProductDocumentRef<'a> {
    products: &'a [Product],
}

/// 商品目录，磁盘上的文档是唯一数据源
///
/// 每次读取都重新加载整个文件；写操作在 `write_lock` 内完成
/// 读-改-写，并通过临时文件 + rename 整体替换文档。
pub struct ProductStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.load().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.load().await?.into_iter().find(|p| p.id == id))
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;

        let id = next_id(&products, Utc::now().timestamp_millis()).ok_or_else(|| {
            StoreError::IdExhausted {
                path: self.path.clone(),
            }
        })?;
        let product = Product::from_draft(id, draft);
        products.push(product.clone());
        self.save(&products).await?;

        tracing::info!("创建商品 {} ({})", product.id, product.name);
        Ok(product)
    }

    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.apply(patch);
        let updated = product.clone();
        self.save(&products).await?;

        tracing::info!("更新商品 {}", id);
        Ok(Some(updated))
    }

    /// 返回是否真的删除了商品；不存在时不写文件
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;

        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Ok(false);
        }
        self.save(&products).await?;

        tracing::info!("删除商品 {}", id);
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<Product>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // 文件不存在视为空目录
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice::<ProductDocument>(&bytes)
            .map(|doc| doc.products)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(&ProductDocumentRef { products }).map_err(|source| {
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

/// 以毫秒时间戳作为 id，若不大于已有最大 id 则顺延；已到 `i64::MAX` 时返回 `None`
fn next_id(products: &[Product], now_millis: i64) -> Option<i64> {
    match products.iter().map(|p| p.id).max() {
        Some(max) if max >= now_millis => max.checked_add(1),
        _ => Some(now_millis),
    }
}
