//! Search helpers shared by the catalog and admin list pages.

/// Types that support the local text search box.
pub trait Searchable {
    /// Whether the item matches the search query.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring check, the building block every
/// `Searchable` impl uses.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter a list by the search query. A blank query keeps everything;
/// filtering starts from the first character typed.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        title: String,
        city: String,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(&self.title, filter) || contains_ci(&self.city, filter)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { title: "SST initial".into(), city: "Casablanca".into() },
            Row { title: "Incendie EPI".into(), city: "Rabat".into() },
        ]
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Casablanca", "casa"));
        assert!(contains_ci("Casablanca", "BLANCA"));
        assert!(!contains_ci("Casablanca", "rabat"));
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), "").len(), 2);
        assert_eq!(filter_list(rows(), "   ").len(), 2);
    }

    #[test]
    fn test_single_character_already_filters() {
        let filtered = filter_list(rows(), "r");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].city, "Rabat");
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(filter_list(rows(), "marrakech").is_empty());
    }
}
