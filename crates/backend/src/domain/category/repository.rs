use contracts::domain::category::Category;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            slug: m.slug,
            name: m.name,
            order_index: m.order_index,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All categories, ordered the way the public tabs render them.
pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    let items = Entity::find()
        .order_by_asc(Column::OrderIndex)
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<Category>> {
    let result = Entity::find()
        .filter(Column::Slug.eq(slug))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(slug: &str, name: &str, order_index: i32) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        slug: Set(slug.to_string()),
        name: Set(name.to_string()),
        order_index: Set(order_index),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

pub async fn update(category: &Category) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(category.id),
        slug: Set(category.slug.clone()),
        name: Set(category.name.clone()),
        order_index: Set(category.order_index),
    };
    active.update(conn()).await?;
    Ok(())
}

/// Permanent removal. Formations keep their dangling category_id and the
/// UI degrades to a placeholder.
pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
