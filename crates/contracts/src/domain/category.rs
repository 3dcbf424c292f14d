use serde::{Deserialize, Serialize};

/// Formation category shown as a tab on the public catalog pages.
/// `order_index` controls tab ordering, `slug` is the URL-facing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub order_index: i32,
}

/// DTO for creating/updating a category. `id = None` means insert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<i64>,
    pub slug: String,
    pub name: String,
    pub order_index: i32,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de la catégorie est obligatoire".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Le slug est obligatoire".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err(
                "Le slug ne peut contenir que des minuscules, chiffres et tirets".into(),
            );
        }
        Ok(())
    }
}

/// A slug is URL-safe: lowercase ascii letters, digits and hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("secourisme"));
        assert!(is_valid_slug("securite-routiere"));
        assert!(is_valid_slug("caces-3"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Secourisme"));
        assert!(!is_valid_slug("sécurité"));
        assert!(!is_valid_slug("a b"));
    }

    #[test]
    fn test_dto_requires_name_and_slug() {
        let dto = CategoryDto {
            id: None,
            slug: "incendie".into(),
            name: "Incendie".into(),
            order_index: 2,
        };
        assert!(dto.validate().is_ok());

        let mut missing_name = dto.clone();
        missing_name.name = "  ".into();
        assert!(missing_name.validate().is_err());

        let mut bad_slug = dto;
        bad_slug.slug = "Incendie!".into();
        assert!(bad_slug.validate().is_err());
    }
}
