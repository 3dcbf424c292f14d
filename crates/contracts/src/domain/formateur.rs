use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trainer profile. `specialties` is a free-text comma-separated list;
/// the helpers below are the single source of truth for how it is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formateur {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating/updating a trainer. `id = None` means insert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormateurDto {
    pub id: Option<i64>,
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
}

impl FormateurDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom est obligatoire".into());
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err("La note doit être comprise entre 0 et 5".into());
            }
        }
        if let Some(rate) = self.completion_rate {
            if !(0..=100).contains(&rate) {
                return Err("Le taux de complétion doit être compris entre 0 et 100".into());
            }
        }
        Ok(())
    }
}

impl From<&Formateur> for FormateurDto {
    fn from(f: &Formateur) -> Self {
        Self {
            id: Some(f.id),
            name: f.name.clone(),
            city: f.city.clone(),
            rating: f.rating,
            total_ratings: f.total_ratings,
            completion_rate: f.completion_rate,
            specialties: f.specialties.clone(),
            description: f.description.clone(),
            image_url: f.image_url.clone(),
            is_published: f.is_published,
            mobility_national: f.mobility_national,
            mobility_international: f.mobility_international,
        }
    }
}

/// Split a raw specialties string into trimmed, non-empty entries.
/// Order and case are preserved.
pub fn split_specialties(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Derive the specialty tab labels from a set of trainer specialty strings:
/// the union of all entries, deduplicated case-sensitively, sorted.
pub fn derive_specialty_tabs<'a, I>(specialties: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tabs: Vec<String> = Vec::new();
    for raw in specialties {
        for entry in split_specialties(raw) {
            if !tabs.contains(&entry) {
                tabs.push(entry);
            }
        }
    }
    tabs.sort();
    tabs
}

/// Whether a trainer's specialties string contains the given tab label.
/// Matching ignores case, mirroring the tab filter on the public page.
pub fn has_specialty(specialties: &str, tab: &str) -> bool {
    let tab_lower = tab.to_lowercase();
    split_specialties(specialties)
        .iter()
        .any(|s| s.to_lowercase() == tab_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empty_entries() {
        assert_eq!(
            split_specialties(" Secourisme , Incendie ,, Safety Days "),
            vec!["Secourisme", "Incendie", "Safety Days"]
        );
        assert!(split_specialties("  ,  , ").is_empty());
        assert!(split_specialties("").is_empty());
    }

    #[test]
    fn test_tabs_are_sorted_union() {
        let tabs = derive_specialty_tabs([
            "Secourisme, Incendie",
            "Incendie, CACES",
            "Habilitations",
        ]);
        assert_eq!(tabs, vec!["CACES", "Habilitations", "Incendie", "Secourisme"]);
    }

    #[test]
    fn test_tabs_dedupe_is_case_sensitive() {
        // "incendie" and "Incendie" are distinct labels
        let tabs = derive_specialty_tabs(["incendie", "Incendie"]);
        assert_eq!(tabs, vec!["Incendie", "incendie"]);
    }

    #[test]
    fn test_has_specialty_matches_whole_entries_case_insensitively() {
        assert!(has_specialty("Secourisme, Incendie", "incendie"));
        assert!(has_specialty("Secourisme, Incendie", "Secourisme"));
        // substring of an entry is not a match
        assert!(!has_specialty("Secourisme, Incendie", "cend"));
        assert!(!has_specialty("", "Incendie"));
    }

    #[test]
    fn test_rating_bounds() {
        let mut dto = FormateurDto {
            name: "A. Benali".into(),
            ..Default::default()
        };
        dto.rating = Some(4.7);
        assert!(dto.validate().is_ok());
        dto.rating = Some(5.1);
        assert!(dto.validate().is_err());
        dto.rating = Some(-0.1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_name_required() {
        let dto = FormateurDto::default();
        assert!(dto.validate().is_err());
    }
}
