use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag chip rendered on a Safety Days activity card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTag {
    pub label: String,
    pub color: String,
}

/// A team-building / safety-awareness activity shown on the Safety Days page.
/// Ids are opaque uuid strings; tags are stored as JSON in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyActivity {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<ActivityTag>,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating/updating an activity. `id = None` means insert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SafetyActivityDto {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<ActivityTag>,
}

impl SafetyActivityDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre est obligatoire".into());
        }
        Ok(())
    }
}

impl From<&SafetyActivity> for SafetyActivityDto {
    fn from(a: &SafetyActivity) -> Self {
        Self {
            id: Some(a.id.clone()),
            title: a.title.clone(),
            description: a.description.clone(),
            image_url: a.image_url.clone(),
            tags: a.tags.clone(),
        }
    }
}

/// Parse the admin form's tag syntax: comma-separated `label:color` pairs,
/// color optional (defaults to "blue"). Empty entries are skipped.
pub fn parse_tags(raw: &str) -> Vec<ActivityTag> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((label, color)) if !color.trim().is_empty() => ActivityTag {
                label: label.trim().to_string(),
                color: color.trim().to_string(),
            },
            _ => ActivityTag {
                label: entry.trim_end_matches(':').trim().to_string(),
                color: "blue".to_string(),
            },
        })
        .collect()
}

/// Inverse of `parse_tags`, used to prefill the admin form.
pub fn format_tags(tags: &[ActivityTag]) -> String {
    tags.iter()
        .map(|t| format!("{}:{}", t.label, t.color))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_with_colors() {
        let tags = parse_tags("Incendie:red, Esprit d'équipe:green");
        assert_eq!(
            tags,
            vec![
                ActivityTag { label: "Incendie".into(), color: "red".into() },
                ActivityTag { label: "Esprit d'équipe".into(), color: "green".into() },
            ]
        );
    }

    #[test]
    fn test_parse_tags_defaults_color() {
        let tags = parse_tags("Secourisme, Gestes qui sauvent:");
        assert_eq!(tags[0].color, "blue");
        assert_eq!(tags[1].label, "Gestes qui sauvent");
        assert_eq!(tags[1].color, "blue");
    }

    #[test]
    fn test_format_tags_round_trips_form_input() {
        let tags = parse_tags("A:red, B:green");
        assert_eq!(format_tags(&tags), "A:red, B:green");
    }

    #[test]
    fn test_tags_serialize_as_json_array() {
        let tags = vec![ActivityTag { label: "Incendie".into(), color: "red".into() }];
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"[{"label":"Incendie","color":"red"}]"#);
        let back: Vec<ActivityTag> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn test_title_required() {
        let dto = SafetyActivityDto::default();
        assert!(dto.validate().is_err());
    }
}
