use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/departments";

/// Organizational department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub head_name: Option<String>,
    #[serde(default)]
    pub employees_count: Option<u32>,
    #[serde(default)]
    pub item_assets_count: Option<u32>,
    #[serde(default)]
    pub inventory_stocks_count: Option<u32>,
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), Some(self.code.clone())]
    }
}

impl Department {
    pub fn option(&self) -> (String, String) {
        (self.id.to_string(), self.name.clone())
    }
}

/// Create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentForm {
    pub name: String,
    pub code: String,
    pub description: String,
}

impl From<&Department> for DepartmentForm {
    fn from(d: &Department) -> Self {
        Self {
            name: d.name.clone(),
            code: d.code.clone(),
            description: d.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Department {
        serde_json::from_str(
            r#"{"id":3,"name":"Network Operations","code":"NOD","description":null,"head_name":null,"employees_count":4}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_with_counts() {
        let d = sample();
        assert_eq!(d.code, "NOD");
        assert_eq!(d.employees_count, Some(4));
        assert_eq!(d.item_assets_count, None);
    }

    #[test]
    fn test_search_by_name_or_code() {
        let d = sample();
        assert!(d.matches_search("network"));
        assert!(d.matches_search("nod"));
        assert!(!d.matches_search("finance"));
    }

    #[test]
    fn test_form_from_existing() {
        let form = DepartmentForm::from(&sample());
        assert_eq!(form.name, "Network Operations");
        assert_eq!(form.description, "");
    }
}
