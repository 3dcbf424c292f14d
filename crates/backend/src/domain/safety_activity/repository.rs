use chrono::Utc;
use contracts::domain::safety_activity::{ActivityTag, SafetyActivity, SafetyActivityDto};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "safety_activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SafetyActivity {
    fn from(m: Model) -> Self {
        // Malformed tag JSON degrades to no chips instead of failing the list
        let tags: Vec<ActivityTag> = serde_json::from_str(&m.tags).unwrap_or_default();
        SafetyActivity {
            id: m.id,
            title: m.title,
            description: m.description,
            image_url: m.image_url,
            tags,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<SafetyActivity>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<SafetyActivity>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &SafetyActivityDto) -> anyhow::Result<String> {
    let id = Uuid::new_v4().to_string();
    let active = ActiveModel {
        id: Set(id.clone()),
        title: Set(dto.title.clone()),
        description: Set(dto.description.clone()),
        image_url: Set(dto.image_url.clone()),
        tags: Set(serde_json::to_string(&dto.tags)?),
        created_at: Set(Some(Utc::now())),
    };
    active.insert(conn()).await?;
    Ok(id)
}

pub async fn update(id: &str, dto: &SafetyActivityDto) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id.to_string()),
        title: Set(dto.title.clone()),
        description: Set(dto.description.clone()),
        image_url: Set(dto.image_url.clone()),
        tags: Set(serde_json::to_string(&dto.tags)?),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
