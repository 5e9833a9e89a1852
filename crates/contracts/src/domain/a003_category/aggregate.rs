use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_to_none, id_to_string, parse_id, NamedRef, RecordId};
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/categories";

/// Item category. Two levels: top-level categories and their sub-categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<RecordId>,
    #[serde(default)]
    pub parent: Option<NamedRef>,
    #[serde(default)]
    pub children_count: Option<u32>,
    #[serde(default)]
    pub items_count: Option<u32>,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.name.as_str())
    }

    pub fn option(&self) -> (String, String) {
        (self.id.to_string(), self.name.clone())
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), self.code.clone()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    TopLevel,
    SubCategory,
}

impl LevelFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "top" => LevelFilter::TopLevel,
            "sub" => LevelFilter::SubCategory,
            _ => LevelFilter::All,
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::TopLevel => category.is_top_level(),
            LevelFilter::SubCategory => !category.is_top_level(),
        }
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            (String::new(), "All Levels".to_string()),
            ("top".to_string(), "Top-level Only".to_string()),
            ("sub".to_string(), "Sub-categories Only".to_string()),
        ]
    }
}

/// Parent choices: top-level categories only, never the category being edited.
pub fn parent_options(categories: &[Category], editing: Option<RecordId>) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "None (top-level)".to_string())];
    options.extend(
        categories
            .iter()
            .filter(|c| c.is_top_level() && Some(c.id) != editing)
            .map(Category::option),
    );
    options
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub code: String,
    pub parent_id: String,
    pub description: String,
}

impl From<&Category> for CategoryForm {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            code: c.code.clone().unwrap_or_default(),
            parent_id: id_to_string(c.parent_id),
            description: c.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub code: Option<String>,
    pub parent_id: Option<RecordId>,
    pub description: Option<String>,
}

impl CategoryForm {
    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.trim().to_string(),
            code: blank_to_none(&self.code),
            parent_id: parse_id(&self.parent_id),
            description: blank_to_none(&self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: RecordId, name: &str, parent_id: Option<RecordId>) -> Category {
        Category {
            id,
            name: name.into(),
            code: None,
            description: None,
            parent_id,
            parent: None,
            children_count: None,
            items_count: None,
        }
    }

    #[test]
    fn test_level_filter() {
        let top = category(1, "IT Equipment", None);
        let sub = category(2, "Laptops", Some(1));
        assert!(LevelFilter::parse("top").matches(&top));
        assert!(!LevelFilter::parse("top").matches(&sub));
        assert!(LevelFilter::parse("sub").matches(&sub));
        assert!(LevelFilter::parse("").matches(&sub));
    }

    #[test]
    fn test_parent_options_exclude_subcategories_and_self() {
        let all = vec![
            category(1, "IT Equipment", None),
            category(2, "Laptops", Some(1)),
            category(3, "Office Supplies", None),
        ];
        let options = parent_options(&all, Some(3));
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].1, "None (top-level)");
        assert_eq!(options[1].1, "IT Equipment");
    }

    #[test]
    fn test_empty_parent_becomes_null() {
        let form = CategoryForm {
            name: "Paper".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert!(json["parent_id"].is_null());
        assert!(json["code"].is_null());
    }
}
