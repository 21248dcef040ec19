use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::model::{CreateProductRequest, parse_product_id};
use crate::{
    AppState,
    error::AppError,
    models::{Product, ProductPatch},
};

const PRODUCT_NOT_FOUND: &str = "商品不存在";

fn not_found() -> AppError {
    AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
}

#[axum::debug_handler]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.products.list().await?))
}

#[axum::debug_handler]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(req) = payload?;
    let draft = req.validate()?;
    let product = state.products.create(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[axum::debug_handler]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id = parse_product_id(&id).ok_or_else(not_found)?;
    state
        .products
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let id = parse_product_id(&id).ok_or_else(not_found)?;
    let Json(patch) = payload?;
    state
        .products
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_product_id(&id).ok_or_else(not_found)?;
    if state.products.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}
