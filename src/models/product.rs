use serde::{Deserialize, Serialize};

/// 商品目录条目，`id` 为创建时的毫秒时间戳
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// 已通过校验、尚未分配 id 的商品
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub categories: Vec<String>,
}

/// 部分更新：只覆盖请求体中出现且不为 null 的字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl Product {
    pub fn from_draft(id: i64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            description: draft.description,
            categories: draft.categories,
        }
    }

    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 1,
            name: "键盘".into(),
            price: 199.0,
            description: "机械键盘".into(),
            categories: vec!["外设".into()],
        }
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut product = sample();
        product.apply(ProductPatch {
            price: Some(149.0),
            ..Default::default()
        });
        assert_eq!(product.price, 149.0);
        assert_eq!(product.name, "键盘");
        assert_eq!(product.categories, vec!["外设".to_string()]);
    }

    #[test]
    fn null_in_patch_keeps_existing_value() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"name": null, "description": "新描述"}"#).unwrap();
        let mut product = sample();
        product.apply(patch);
        assert_eq!(product.name, "键盘");
        assert_eq!(product.description, "新描述");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "name": "鼠标", "price": 59.5}"#).unwrap();
        assert_eq!(product.description, "");
        assert!(product.categories.is_empty());
    }
}
