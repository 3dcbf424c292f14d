use contracts::domain::formation::{Formation, FormationDto};

use super::repository;
use crate::domain::category;
use crate::shared::error::AppError;

/// Public listing. `category_slug = None` means all published formations;
/// an unknown slug yields an empty list rather than an error.
pub async fn list_public(category_slug: Option<&str>) -> Result<Vec<Formation>, AppError> {
    match category_slug {
        None => Ok(repository::list_published(None).await?),
        Some(slug) => match category::repository::get_by_slug(slug).await? {
            Some(cat) => Ok(repository::list_published(Some(cat.id)).await?),
            None => Ok(Vec::new()),
        },
    }
}

pub async fn list_admin() -> Result<Vec<Formation>, AppError> {
    Ok(repository::list_all().await?)
}

pub async fn create(dto: FormationDto) -> Result<i64, AppError> {
    dto.validate().map_err(AppError::Validation)?;
    Ok(repository::insert(&dto).await?)
}

pub async fn update(dto: FormationDto) -> Result<(), AppError> {
    dto.validate().map_err(AppError::Validation)?;

    let id = dto
        .id
        .ok_or_else(|| AppError::Validation("id manquant".into()))?;

    repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("formation {} introuvable", id)))?;

    repository::update(id, &dto).await?;
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), AppError> {
    if !repository::delete(id).await? {
        return Err(AppError::NotFound(format!("formation {} introuvable", id)));
    }
    Ok(())
}

/// Flip visibility and return the new state.
pub async fn toggle_published(id: i64) -> Result<bool, AppError> {
    let formation = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("formation {} introuvable", id)))?;

    let next = !formation.is_published;
    repository::set_published(id, next).await?;
    Ok(next)
}
