//! Case-insensitive substring search used by every list page.

/// Trimmed, lower-cased query. `None` means "no search applied".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// `needle` must already be lower-cased. Missing fields never match.
pub fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// A row that can be found by the free-text search box.
pub trait Searchable {
    /// Fields the search box looks at, in display order.
    fn search_fields(&self) -> Vec<Option<String>>;

    fn matches_search(&self, query: &str) -> bool {
        match normalize_query(query) {
            None => true,
            Some(needle) => self
                .search_fields()
                .iter()
                .any(|field| contains_ci(field.as_deref(), &needle)),
        }
    }
}

/// Apply the search box and a page-specific filter predicate.
pub fn filter_rows<T, F>(rows: &[T], query: &str, keep: F) -> Vec<T>
where
    T: Searchable + Clone,
    F: Fn(&T) -> bool,
{
    rows.iter()
        .filter(|row| row.matches_search(query) && keep(row))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        code: Option<String>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Option<String>> {
            vec![Some(self.name.clone()), self.code.clone()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Finance".into(), code: Some("FIN".into()) },
            Row { name: "Engineering".into(), code: None },
            Row { name: "Human Resources".into(), code: Some("HR".into()) },
        ]
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("  FiN "), Some("fin".to_string()));
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        assert_eq!(filter_rows(&rows(), "  ", |_| true).len(), 3);
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let found = filter_rows(&rows(), " hr ", |_| true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Human Resources");

        let found = filter_rows(&rows(), "ENGIN", |_| true);
        assert_eq!(found[0].name, "Engineering");
    }

    #[test]
    fn test_missing_field_never_matches() {
        assert!(!contains_ci(None, "x"));
        assert!(filter_rows(&rows(), "zzz", |_| true).is_empty());
    }

    #[test]
    fn test_filter_predicate_combines_with_search() {
        let found = filter_rows(&rows(), "n", |r| r.code.is_some());
        assert_eq!(found.len(), 2);
    }
}
