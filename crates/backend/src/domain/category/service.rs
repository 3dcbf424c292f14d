use contracts::domain::category::{Category, CategoryDto};

use super::repository;
use crate::shared::error::AppError;

pub async fn list_all() -> Result<Vec<Category>, AppError> {
    Ok(repository::list_all().await?)
}

pub async fn create(dto: CategoryDto) -> Result<i64, AppError> {
    dto.validate().map_err(AppError::Validation)?;

    if repository::get_by_slug(&dto.slug).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "une catégorie avec le slug '{}' existe déjà",
            dto.slug
        )));
    }

    Ok(repository::insert(&dto.slug, &dto.name, dto.order_index).await?)
}

pub async fn update(dto: CategoryDto) -> Result<(), AppError> {
    dto.validate().map_err(AppError::Validation)?;

    let id = dto
        .id
        .ok_or_else(|| AppError::Validation("id manquant".into()))?;

    let mut category = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("catégorie {} introuvable", id)))?;

    // Slug must stay unique across the other categories
    if let Some(existing) = repository::get_by_slug(&dto.slug).await? {
        if existing.id != id {
            return Err(AppError::Conflict(format!(
                "une catégorie avec le slug '{}' existe déjà",
                dto.slug
            )));
        }
    }

    category.slug = dto.slug;
    category.name = dto.name;
    category.order_index = dto.order_index;

    repository::update(&category).await?;
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), AppError> {
    if !repository::delete(id).await? {
        return Err(AppError::NotFound(format!("catégorie {} introuvable", id)));
    }
    Ok(())
}
