use chrono::Utc;
use contracts::domain::formateur::{Formateur, FormateurDto};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "formateurs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub rating: Option<f64>,
    pub total_ratings: Option<i32>,
    pub completion_rate: Option<i32>,
    pub specialties: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub mobility_national: bool,
    pub mobility_international: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Formateur {
    fn from(m: Model) -> Self {
        Formateur {
            id: m.id,
            name: m.name,
            city: m.city,
            rating: m.rating,
            total_ratings: m.total_ratings,
            completion_rate: m.completion_rate,
            specialties: m.specialties,
            description: m.description,
            image_url: m.image_url,
            is_published: m.is_published,
            mobility_national: m.mobility_national,
            mobility_international: m.mobility_international,
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Query for the public page: published trainers, newest first.
pub fn published_query() -> Select<Entity> {
    Entity::find()
        .filter(Column::IsPublished.eq(true))
        .order_by_desc(Column::CreatedAt)
}

pub async fn list_published() -> anyhow::Result<Vec<Formateur>> {
    let items = published_query()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_all() -> anyhow::Result<Vec<Formateur>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Formateur>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &FormateurDto) -> anyhow::Result<i64> {
    let now = Utc::now();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(dto.name.clone()),
        city: Set(dto.city.clone()),
        rating: Set(dto.rating),
        total_ratings: Set(dto.total_ratings),
        completion_rate: Set(dto.completion_rate),
        specialties: Set(dto.specialties.clone()),
        description: Set(dto.description.clone()),
        image_url: Set(dto.image_url.clone()),
        is_published: Set(dto.is_published),
        mobility_national: Set(dto.mobility_national),
        mobility_international: Set(dto.mobility_international),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

pub async fn update(id: i64, dto: &FormateurDto) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        name: Set(dto.name.clone()),
        city: Set(dto.city.clone()),
        rating: Set(dto.rating),
        total_ratings: Set(dto.total_ratings),
        completion_rate: Set(dto.completion_rate),
        specialties: Set(dto.specialties.clone()),
        description: Set(dto.description.clone()),
        image_url: Set(dto.image_url.clone()),
        is_published: Set(dto.is_published),
        mobility_national: Set(dto.mobility_national),
        mobility_international: Set(dto.mobility_international),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn set_published(id: i64, published: bool) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsPublished, Expr::value(published))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_published_query_filters_unpublished_rows() {
        let sql = published_query().build(DbBackend::Sqlite).to_string();
        assert!(sql.contains(r#""is_published" = TRUE"#), "sql was: {}", sql);
        assert!(sql.contains(r#"ORDER BY "formateurs"."created_at" DESC"#));
    }
}
