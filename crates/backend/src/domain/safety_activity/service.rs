use contracts::domain::safety_activity::{SafetyActivity, SafetyActivityDto};

use super::repository;
use crate::shared::error::AppError;

pub async fn list_all() -> Result<Vec<SafetyActivity>, AppError> {
    Ok(repository::list_all().await?)
}

pub async fn create(dto: SafetyActivityDto) -> Result<String, AppError> {
    dto.validate().map_err(AppError::Validation)?;
    Ok(repository::insert(&dto).await?)
}

pub async fn update(dto: SafetyActivityDto) -> Result<(), AppError> {
    dto.validate().map_err(AppError::Validation)?;

    let id = dto
        .id
        .clone()
        .ok_or_else(|| AppError::Validation("id manquant".into()))?;

    repository::get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activité {} introuvable", id)))?;

    repository::update(&id, &dto).await?;
    Ok(())
}

pub async fn delete(id: &str) -> Result<(), AppError> {
    if !repository::delete(id).await? {
        return Err(AppError::NotFound(format!("activité {} introuvable", id)));
    }
    Ok(())
}
