use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_to_none, parse_id, parse_number, ItemRef, NamedRef, RecordId};
use crate::shared::format::format_number;
use crate::shared::lenient;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/stock-receivals";

/// Incoming delivery that increments a department's stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReceival {
    pub id: RecordId,
    pub item_id: RecordId,
    pub department_id: RecordId,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub supplier_id: Option<RecordId>,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub item: Option<ItemRef>,
    #[serde(default)]
    pub department: Option<NamedRef>,
    #[serde(default)]
    pub supplier: Option<NamedRef>,
}

impl StockReceival {
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.name.as_str())
    }

    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier.as_ref().map(|s| s.name.as_str())
    }

    pub fn quantity_label(&self) -> String {
        let abbr = self.item.as_ref().map(ItemRef::unit_abbreviation).unwrap_or("");
        format!("{} {}", format_number(Some(self.quantity)), abbr)
            .trim_end()
            .to_string()
    }
}

impl Searchable for StockReceival {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            self.item_name().map(str::to_string),
            self.reference_no.clone(),
            self.supplier_name().map(str::to_string),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockReceivalForm {
    pub item_id: String,
    pub department_id: String,
    pub quantity: String,
    pub unit_cost: String,
    pub supplier_id: String,
    pub reference_no: String,
    pub received_at: String,
    pub notes: String,
}

impl StockReceivalForm {
    pub fn new(today: &str) -> Self {
        Self {
            item_id: String::new(),
            department_id: String::new(),
            quantity: String::new(),
            unit_cost: String::new(),
            supplier_id: String::new(),
            reference_no: String::new(),
            received_at: today.to_string(),
            notes: String::new(),
        }
    }

    pub fn to_payload(&self) -> StockReceivalPayload {
        StockReceivalPayload {
            item_id: parse_id(&self.item_id),
            department_id: parse_id(&self.department_id),
            quantity: parse_number(&self.quantity),
            unit_cost: parse_number(&self.unit_cost),
            supplier_id: parse_id(&self.supplier_id),
            reference_no: blank_to_none(&self.reference_no),
            received_at: self.received_at.clone(),
            notes: blank_to_none(&self.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReceivalPayload {
    pub item_id: Option<RecordId>,
    pub department_id: Option<RecordId>,
    pub quantity: Option<f64>,
    pub unit_cost: Option<f64>,
    pub supplier_id: Option<RecordId>,
    pub reference_no: Option<String>,
    pub received_at: String,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_reference_supplier() {
        let r: StockReceival = serde_json::from_str(
            r#"{"id":1,"item_id":2,"department_id":3,"quantity":"20","unit_cost":"215.50","reference_no":"DR-1001","item":{"id":2,"name":"Bond Paper","unit":{"abbreviation":"ream"}},"supplier":{"id":4,"name":"Acme Trading"}}"#,
        )
        .unwrap();
        assert_eq!(r.unit_cost, Some(215.5));
        assert_eq!(r.quantity_label(), "20 ream");
        assert!(r.matches_search("dr-10"));
        assert!(r.matches_search("acme"));
        assert!(r.matches_search("bond"));
    }

    #[test]
    fn test_optional_cost_and_supplier_are_null() {
        let mut form = StockReceivalForm::new("2024-07-01");
        form.item_id = "2".into();
        form.department_id = "3".into();
        form.quantity = "20".into();
        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert!(json["unit_cost"].is_null());
        assert!(json["supplier_id"].is_null());
        assert_eq!(json["received_at"], "2024-07-01");
        assert_eq!(json["quantity"], 20.0);
    }
}
