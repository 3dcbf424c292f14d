use chrono::Utc;
use contracts::domain::formation::{Formation, FormationDto};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "formations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: Option<i64>,
    pub title: String,
    pub city: Option<String>,
    pub short_desc: Option<String>,
    pub duration_days: Option<i32>,
    pub price_mad: Option<f64>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Formation {
    fn from(m: Model) -> Self {
        Formation {
            id: m.id,
            category_id: m.category_id,
            title: m.title,
            city: m.city,
            short_desc: m.short_desc,
            duration_days: m.duration_days,
            price_mad: m.price_mad,
            image_url: m.image_url,
            is_published: m.is_published,
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Query for the public pages: published rows only, optionally narrowed to
/// one category, newest first. Kept as a builder so its SQL is testable.
pub fn published_query(category_id: Option<i64>) -> Select<Entity> {
    let mut query = Entity::find().filter(Column::IsPublished.eq(true));
    if let Some(cat_id) = category_id {
        query = query.filter(Column::CategoryId.eq(cat_id));
    }
    query.order_by_desc(Column::CreatedAt)
}

pub async fn list_published(category_id: Option<i64>) -> anyhow::Result<Vec<Formation>> {
    let items = published_query(category_id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Back-office listing: every row, unpublished included.
pub async fn list_all() -> anyhow::Result<Vec<Formation>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Formation>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &FormationDto) -> anyhow::Result<i64> {
    let now = Utc::now();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        category_id: Set(dto.category_id),
        title: Set(dto.title.clone()),
        city: Set(dto.city.clone()),
        short_desc: Set(dto.short_desc.clone()),
        duration_days: Set(dto.duration_days),
        price_mad: Set(dto.price_mad),
        image_url: Set(dto.image_url.clone()),
        is_published: Set(dto.is_published),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

pub async fn update(id: i64, dto: &FormationDto) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        category_id: Set(dto.category_id),
        title: Set(dto.title.clone()),
        city: Set(dto.city.clone()),
        short_desc: Set(dto.short_desc.clone()),
        duration_days: Set(dto.duration_days),
        price_mad: Set(dto.price_mad),
        image_url: Set(dto.image_url.clone()),
        is_published: Set(dto.is_published),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    active.update(conn()).await?;
    Ok(())
}

/// Permanent removal, no soft-delete flag.
pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

/// Single-field publish/unpublish used by the admin toggle.
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
    fn test_published_query_always_filters_unpublished_rows() {
        let sql = published_query(None).build(DbBackend::Sqlite).to_string();
        assert!(sql.contains(r#""is_published" = TRUE"#), "sql was: {}", sql);
        assert!(sql.contains(r#"ORDER BY "formations"."created_at" DESC"#));
        assert!(!sql.contains("category_id"));
    }

    #[test]
    fn test_published_query_narrows_to_category() {
        let sql = published_query(Some(5)).build(DbBackend::Sqlite).to_string();
        assert!(sql.contains(r#""is_published" = TRUE"#));
        assert!(sql.contains(r#""category_id" = 5"#), "sql was: {}", sql);
    }
}
