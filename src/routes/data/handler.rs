use axum::extract::{Extension, Json, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AppState, cache::CacheSource, error::AppError, models::SessionUser};

#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse {
    pub source: CacheSource,
    pub data: Value,
}

#[axum::debug_handler]
pub async fn get_data(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<DataResponse>, AppError> {
    let (source, data) = state.data_cache.read(&user).await?;
    Ok(Json(DataResponse { source, data }))
}
