use serde::Deserialize;

use crate::error::AppError;
use crate::models::ProductDraft;

pub const REQUIRED_FIELDS_MESSAGE: &str = "name、price、description 和 categories 均为必填项";

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl CreateProductRequest {
    /// 名称与描述非空、价格非零、分类列表存在（允许为空列表）
    pub fn validate(self) -> Result<ProductDraft, AppError> {
        match (self.name, self.price, self.description, self.categories) {
            (Some(name), Some(price), Some(description), Some(categories))
                if !name.trim().is_empty() && price != 0.0 && !description.trim().is_empty() =>
            {
                Ok(ProductDraft {
                    name,
                    price,
                    description,
                    categories,
                })
            }
            _ => Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// 路径中的 id 不是整数时等同于从未签发的 id
pub(crate) fn parse_product_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("耳机".into()),
            price: Some(299.0),
            description: Some("降噪".into()),
            categories: Some(vec!["音频".into()]),
        }
    }

    #[test]
    fn complete_request_passes() {
        let draft = full().validate().unwrap();
        assert_eq!(draft.name, "耳机");
        assert_eq!(draft.price, 299.0);
    }

    #[test]
    fn empty_category_list_is_accepted() {
        let request = CreateProductRequest {
            categories: Some(vec![]),
            ..full()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let cases = [
            CreateProductRequest { name: None, ..full() },
            CreateProductRequest { name: Some("  ".into()), ..full() },
            CreateProductRequest { price: None, ..full() },
            CreateProductRequest { price: Some(0.0), ..full() },
            CreateProductRequest { description: Some(String::new()), ..full() },
            CreateProductRequest { categories: None, ..full() },
        ];
        for request in cases {
            assert!(matches!(request.validate(), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn product_id_parsing() {
        assert_eq!(parse_product_id("1712345678901"), Some(1_712_345_678_901));
        assert_eq!(parse_product_id("abc"), None);
        assert_eq!(parse_product_id(""), None);
    }
}
