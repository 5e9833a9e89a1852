use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_to_none, parse_id, parse_number, ItemRef, NamedRef, RecordId};
use crate::shared::format::{format_number, EMPTY};
use crate::shared::lenient;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/inventory-stocks";
pub const ADJUST_PATH: &str = "adjust";

/// Quantity of a consumable item held by a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStock {
    pub id: RecordId,
    pub item_id: RecordId,
    pub department_id: RecordId,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub quantity: f64,
    #[serde(default)]
    pub is_below_minimum: Option<bool>,
    #[serde(default)]
    pub item: Option<ItemRef>,
    #[serde(default)]
    pub department: Option<NamedRef>,
}

impl InventoryStock {
    pub fn is_low(&self) -> bool {
        self.is_below_minimum == Some(true)
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.name.as_str())
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }

    /// `1,250 pcs`
    pub fn quantity_label(&self) -> String {
        let abbr = self.item.as_ref().map(ItemRef::unit_abbreviation).unwrap_or("");
        format!("{} {}", format_number(Some(self.quantity)), abbr)
            .trim_end()
            .to_string()
    }

    pub fn min_level_label(&self) -> String {
        match self.item.as_ref().and_then(|i| i.min_stock_level) {
            Some(level) => format_number(Some(level)),
            None => EMPTY.to_string(),
        }
    }
}

impl Searchable for InventoryStock {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![self.item_name().map(str::to_string)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Low,
    Ok,
}

impl LevelFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => LevelFilter::Low,
            "ok" => LevelFilter::Ok,
            _ => LevelFilter::All,
        }
    }

    pub fn matches(&self, stock: &InventoryStock) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Low => stock.is_low(),
            LevelFilter::Ok => !stock.is_low(),
        }
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            (String::new(), "All Stock Levels".to_string()),
            ("low".to_string(), "Below Minimum".to_string()),
            ("ok".to_string(), "Above Minimum".to_string()),
        ]
    }
}

/// Manual correction of a department's stock to an absolute quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustForm {
    pub item_id: String,
    pub department_id: String,
    pub quantity: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustPayload {
    pub item_id: Option<RecordId>,
    pub department_id: Option<RecordId>,
    pub quantity: Option<f64>,
    pub notes: Option<String>,
}

impl AdjustForm {
    pub fn to_payload(&self) -> AdjustPayload {
        AdjustPayload {
            item_id: parse_id(&self.item_id),
            department_id: parse_id(&self.department_id),
            quantity: parse_number(&self.quantity),
            notes: blank_to_none(&self.notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(json: &str) -> InventoryStock {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_quantity_label_with_unit() {
        let s = stock(
            r#"{"id":1,"item_id":2,"department_id":3,"quantity":"1250.00","is_below_minimum":false,"item":{"id":2,"name":"Bond Paper","unit":{"abbreviation":"ream"},"min_stock_level":"50.00"}}"#,
        );
        assert_eq!(s.quantity_label(), "1,250 ream");
        assert_eq!(s.min_level_label(), "50");
    }

    #[test]
    fn test_level_filter() {
        let low = stock(r#"{"id":1,"item_id":2,"department_id":3,"quantity":1,"is_below_minimum":true}"#);
        let unknown = stock(r#"{"id":2,"item_id":2,"department_id":4,"quantity":9}"#);
        assert!(LevelFilter::parse("low").matches(&low));
        assert!(!LevelFilter::parse("low").matches(&unknown));
        assert!(LevelFilter::parse("ok").matches(&unknown));
        assert!(LevelFilter::parse("").matches(&low));
        assert_eq!(unknown.quantity_label(), "9");
        assert_eq!(unknown.min_level_label(), "—");
    }

    #[test]
    fn test_adjust_payload() {
        let form = AdjustForm {
            item_id: "2".into(),
            department_id: "3".into(),
            quantity: "40".into(),
            notes: String::new(),
        };
        let payload = form.to_payload();
        assert_eq!(payload.quantity, Some(40.0));
        assert_eq!(payload.notes, None);
    }
}
