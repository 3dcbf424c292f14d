use axum::{extract::Path, Json};
use contracts::domain::formateur::{Formateur, FormateurDto};
use serde_json::json;

use crate::domain::formateur;
use crate::shared::error::AppError;

/// GET /api/formateurs
pub async fn list_public() -> Result<Json<Vec<Formateur>>, AppError> {
    Ok(Json(formateur::service::list_public().await?))
}

/// GET /api/admin/formateurs
pub async fn list_admin() -> Result<Json<Vec<Formateur>>, AppError> {
    Ok(Json(formateur::service::list_admin().await?))
}

/// POST /api/admin/formateurs
pub async fn upsert(Json(dto): Json<FormateurDto>) -> Result<Json<serde_json::Value>, AppError> {
    let id = match dto.id {
        Some(id) => {
            formateur::service::update(dto).await?;
            id
        }
        None => formateur::service::create(dto).await?,
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/admin/formateurs/:id
pub async fn delete(Path(id): Path<i64>) -> Result<(), AppError> {
    formateur::service::delete(id).await
}

/// POST /api/admin/formateurs/:id/publish
pub async fn toggle_published(Path(id): Path<i64>) -> Result<Json<serde_json::Value>, AppError> {
    let published = formateur::service::toggle_published(id).await?;
    Ok(Json(json!({ "id": id, "is_published": published })))
}
