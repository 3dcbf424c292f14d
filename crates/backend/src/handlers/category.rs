use axum::{extract::Path, Json};
use contracts::domain::category::{Category, CategoryDto};
use serde_json::json;

use crate::domain::category;
use crate::shared::error::AppError;

/// GET /api/categories
pub async fn list_all() -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(category::service::list_all().await?))
}

/// POST /api/admin/categories
pub async fn upsert(Json(dto): Json<CategoryDto>) -> Result<Json<serde_json::Value>, AppError> {
    let id = match dto.id {
        Some(id) => {
            category::service::update(dto).await?;
            id
        }
        None => category::service::create(dto).await?,
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/admin/categories/:id
pub async fn delete(Path(id): Path<i64>) -> Result<(), AppError> {
    category::service::delete(id).await
}
