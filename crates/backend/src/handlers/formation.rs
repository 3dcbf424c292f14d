use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::formation::{Formation, FormationDto};
use serde::Deserialize;
use serde_json::json;

use crate::domain::formation;
use crate::shared::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PublicListParams {
    /// Category slug; absent means all published formations.
    pub category: Option<String>,
}

/// GET /api/formations?category=<slug>
pub async fn list_public(
    Query(params): Query<PublicListParams>,
) -> Result<Json<Vec<Formation>>, AppError> {
    let items = formation::service::list_public(params.category.as_deref()).await?;
    Ok(Json(items))
}

/// GET /api/admin/formations
pub async fn list_admin() -> Result<Json<Vec<Formation>>, AppError> {
    Ok(Json(formation::service::list_admin().await?))
}

/// POST /api/admin/formations
pub async fn upsert(Json(dto): Json<FormationDto>) -> Result<Json<serde_json::Value>, AppError> {
    let id = match dto.id {
        Some(id) => {
            formation::service::update(dto).await?;
            id
        }
        None => formation::service::create(dto).await?,
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/admin/formations/:id
pub async fn delete(Path(id): Path<i64>) -> Result<(), AppError> {
    formation::service::delete(id).await
}

/// POST /api/admin/formations/:id/publish
pub async fn toggle_published(Path(id): Path<i64>) -> Result<Json<serde_json::Value>, AppError> {
    let published = formation::service::toggle_published(id).await?;
    Ok(Json(json!({ "id": id, "is_published": published })))
}
