use contracts::domain::formateur::{Formateur, FormateurDto};

use super::repository;
use crate::shared::error::AppError;

pub async fn list_public() -> Result<Vec<Formateur>, AppError> {
    Ok(repository::list_published().await?)
}

pub async fn list_admin() -> Result<Vec<Formateur>, AppError> {
    Ok(repository::list_all().await?)
}

pub async fn create(dto: FormateurDto) -> Result<i64, AppError> {
    dto.validate().map_err(AppError::Validation)?;
    Ok(repository::insert(&dto).await?)
}

pub async fn update(dto: FormateurDto) -> Result<(), AppError> {
    dto.validate().map_err(AppError::Validation)?;

    let id = dto
        .id
        .ok_or_else(|| AppError::Validation("id manquant".into()))?;

    repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("formateur {} introuvable", id)))?;

    repository::update(id, &dto).await?;
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), AppError> {
    if !repository::delete(id).await? {
        return Err(AppError::NotFound(format!("formateur {} introuvable", id)));
    }
    Ok(())
}

pub async fn toggle_published(id: i64) -> Result<bool, AppError> {
    let formateur = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("formateur {} introuvable", id)))?;

    let next = !formateur.is_published;
    repository::set_published(id, next).await?;
    Ok(next)
}
