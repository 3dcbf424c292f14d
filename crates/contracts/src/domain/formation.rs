use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A training offering. Only published formations are visible on the
/// public pages; `category_id` may reference a deleted category, in which
/// case the UI degrades to a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: i64,
    pub category_id: Option<i64>,
    pub title: String,
    pub city: Option<String>,
    pub short_desc: Option<String>,
    pub duration_days: Option<i32>,
    pub price_mad: Option<f64>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating/updating a formation. `id = None` means insert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormationDto {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub title: String,
    pub city: Option<String>,
    pub short_desc: Option<String>,
    pub duration_days: Option<i32>,
    pub price_mad: Option<f64>,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl FormationDto {
    /// The admin form enforces the same rules before any network call.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre est obligatoire".into());
        }
        if self.category_id.is_none() {
            return Err("La catégorie est obligatoire".into());
        }
        if let Some(days) = self.duration_days {
            if days < 0 {
                return Err("La durée ne peut pas être négative".into());
            }
        }
        if let Some(price) = self.price_mad {
            if price < 0.0 {
                return Err("Le prix ne peut pas être négatif".into());
            }
        }
        Ok(())
    }
}

impl From<&Formation> for FormationDto {
    fn from(f: &Formation) -> Self {
        Self {
            id: Some(f.id),
            category_id: f.category_id,
            title: f.title.clone(),
            city: f.city.clone(),
            short_desc: f.short_desc.clone(),
            duration_days: f.duration_days,
            price_mad: f.price_mad,
            image_url: f.image_url.clone(),
            is_published: f.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> FormationDto {
        FormationDto {
            id: None,
            category_id: Some(5),
            title: "SST initial".into(),
            city: Some("Casablanca".into()),
            short_desc: None,
            duration_days: Some(2),
            price_mad: Some(1200.0),
            image_url: None,
            is_published: true,
        }
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let mut dto = valid_dto();
        dto.title = "   ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let mut dto = valid_dto();
        dto.category_id = None;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut dto = valid_dto();
        dto.price_mad = Some(-1.0);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_publish_toggle_twice_restores_state() {
        let mut dto = valid_dto();
        let before = dto.is_published;
        dto.is_published = !dto.is_published;
        dto.is_published = !dto.is_published;
        assert_eq!(dto.is_published, before);
    }
}
