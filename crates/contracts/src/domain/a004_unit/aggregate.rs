use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/units";

/// Unit of measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: RecordId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub items_count: Option<u32>,
}

impl Unit {
    /// Label used by item forms: `Kilogram (kg)`.
    pub fn option(&self) -> (String, String) {
        (
            self.id.to_string(),
            format!("{} ({})", self.name, self.abbreviation),
        )
    }
}

impl Searchable for Unit {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), Some(self.abbreviation.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitForm {
    pub name: String,
    pub abbreviation: String,
}

impl From<&Unit> for UnitForm {
    fn from(u: &Unit) -> Self {
        Self {
            name: u.name.clone(),
            abbreviation: u.abbreviation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        let unit = Unit {
            id: 7,
            name: "Kilogram".into(),
            abbreviation: "kg".into(),
            items_count: Some(2),
        };
        assert_eq!(unit.option(), ("7".to_string(), "Kilogram (kg)".to_string()));
        assert!(unit.matches_search("KG"));
    }
}
