use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/suppliers";

/// Address column width in the list.
pub const ADDRESS_PREVIEW_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "stock_receivals_count")]
    pub stock_receivials_count: Option<u32>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

impl Supplier {
    pub fn option(&self) -> (String, String) {
        (self.id.to_string(), self.name.clone())
    }
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.name.clone()),
            self.contact_person.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierForm {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<&Supplier> for SupplierForm {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            contact_person: s.contact_person.clone().unwrap_or_default(),
            phone: s.phone.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            address: s.address.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_contact_details() {
        let s: Supplier = serde_json::from_str(
            r#"{"id":1,"name":"Acme Trading","contact_person":"Liza","email":"sales@acme.ph","phone":"0917","address":null}"#,
        )
        .unwrap();
        assert!(s.matches_search("liza"));
        assert!(s.matches_search("ACME.PH"));
        assert!(s.matches_search("0917"));
        assert!(!s.matches_search("manila"));
    }
}
