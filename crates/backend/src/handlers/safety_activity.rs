use axum::{extract::Path, Json};
use contracts::domain::safety_activity::{SafetyActivity, SafetyActivityDto};
use serde_json::json;

use crate::domain::safety_activity;
use crate::shared::error::AppError;

/// GET /api/safety-activities
pub async fn list_all() -> Result<Json<Vec<SafetyActivity>>, AppError> {
    Ok(Json(safety_activity::service::list_all().await?))
}

/// POST /api/admin/safety-activities
pub async fn upsert(
    Json(dto): Json<SafetyActivityDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = match dto.id.clone() {
        Some(id) => {
            safety_activity::service::update(dto).await?;
            id
        }
        None => safety_activity::service::create(dto).await?,
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/admin/safety-activities/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), AppError> {
    safety_activity::service::delete(&id).await
}
