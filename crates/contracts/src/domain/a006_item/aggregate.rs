use serde::{Deserialize, Serialize};

use crate::domain::common::{
    blank_to_none, id_to_string, number_to_string, parse_id, parse_number, NamedRef, RecordId,
};
use crate::shared::format::{format_number, EMPTY};
use crate::shared::lenient;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    FixedAsset,
    #[default]
    Consumable,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::FixedAsset => "fixed_asset",
            ItemType::Consumable => "consumable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::FixedAsset => "Fixed Asset",
            ItemType::Consumable => "Consumable",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "fixed_asset" => ItemType::FixedAsset,
            _ => ItemType::Consumable,
        }
    }

    pub fn options() -> Vec<(String, String)> {
        [ItemType::FixedAsset, ItemType::Consumable]
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemUnit {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// Catalog definition of a fixed asset type or a consumable type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<RecordId>,
    #[serde(default)]
    pub unit_id: Option<RecordId>,
    pub item_type: ItemType,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub specifications: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub min_stock_level: Option<f64>,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub unit: Option<ItemUnit>,
    #[serde(default)]
    pub department: Option<NamedRef>,
    #[serde(default)]
    pub total_units: Option<u32>,
    #[serde(default)]
    pub available_units: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_stock: Option<f64>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

impl Item {
    pub fn is_fixed_asset(&self) -> bool {
        self.item_type == ItemType::FixedAsset
    }

    /// Fixed assets count physical units, consumables sum stock.
    pub fn stock_summary(&self) -> String {
        match self.item_type {
            ItemType::FixedAsset => format!(
                "{} / {} avail",
                self.available_units.unwrap_or(0),
                self.total_units.unwrap_or(0)
            ),
            ItemType::Consumable => format_number(self.total_stock),
        }
    }

    pub fn specifications_text(&self) -> String {
        match &self.specifications {
            Some(specs) if !specs.is_empty() => specs.join(", "),
            _ => EMPTY.to_string(),
        }
    }

    pub fn unit_abbreviation(&self) -> Option<&str> {
        self.unit.as_ref().map(|u| u.abbreviation.as_str())
    }

    pub fn option(&self) -> (String, String) {
        (self.id.to_string(), self.name.clone())
    }
}

impl Searchable for Item {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), self.brand.clone()]
    }
}

/// Select options for forms that only accept one kind of item.
pub fn options_of_type(items: &[Item], item_type: ItemType) -> Vec<(String, String)> {
    items
        .iter()
        .filter(|i| i.item_type == item_type)
        .map(Item::option)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeFilter(pub Option<ItemType>);

impl TypeFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "" => TypeFilter(None),
            other => TypeFilter(Some(ItemType::parse(other))),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.0.map(|t| t == item.item_type).unwrap_or(true)
    }

    pub fn options() -> Vec<(String, String)> {
        let mut options = vec![(String::new(), "All Types".to_string())];
        options.extend(ItemType::options());
        options
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category_id: String,
    pub unit_id: String,
    pub item_type: ItemType,
    pub brand: String,
    pub model: String,
    pub min_stock_level: String,
    pub description: String,
}

impl From<&Item> for ItemForm {
    fn from(i: &Item) -> Self {
        Self {
            name: i.name.clone(),
            category_id: id_to_string(i.category_id),
            unit_id: id_to_string(i.unit_id),
            item_type: i.item_type,
            brand: i.brand.clone().unwrap_or_default(),
            model: i.model.clone().unwrap_or_default(),
            min_stock_level: number_to_string(i.min_stock_level),
            description: i.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub category_id: Option<RecordId>,
    pub unit_id: Option<RecordId>,
    pub item_type: ItemType,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub min_stock_level: Option<f64>,
    pub description: Option<String>,
}

impl ItemForm {
    /// Minimum stock level only applies to consumables.
    pub fn shows_min_stock(&self) -> bool {
        self.item_type == ItemType::Consumable
    }

    pub fn to_payload(&self) -> ItemPayload {
        ItemPayload {
            name: self.name.trim().to_string(),
            category_id: parse_id(&self.category_id),
            unit_id: parse_id(&self.unit_id),
            item_type: self.item_type,
            brand: blank_to_none(&self.brand),
            model: blank_to_none(&self.model),
            min_stock_level: if self.shows_min_stock() {
                parse_number(&self.min_stock_level)
            } else {
                None
            },
            description: blank_to_none(&self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Item {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_fixed_asset_stock_summary() {
        let item = parse(
            r#"{"id":1,"name":"Laptop","item_type":"fixed_asset","total_units":5,"available_units":2}"#,
        );
        assert!(item.is_fixed_asset());
        assert_eq!(item.stock_summary(), "2 / 5 avail");
    }

    #[test]
    fn test_consumable_stock_summary_accepts_decimal_strings() {
        let item = parse(
            r#"{"id":2,"name":"Bond Paper","item_type":"consumable","total_stock":"1250.00","min_stock_level":"10.00"}"#,
        );
        assert_eq!(item.stock_summary(), "1,250");
        assert_eq!(item.min_stock_level, Some(10.0));
    }

    #[test]
    fn test_specifications_text() {
        let mut item = parse(r#"{"id":3,"name":"Monitor","item_type":"fixed_asset"}"#);
        assert_eq!(item.specifications_text(), "—");
        item.specifications = Some(vec!["24 inch".into(), "IPS".into()]);
        assert_eq!(item.specifications_text(), "24 inch, IPS");
    }

    #[test]
    fn test_type_filter() {
        let laptop = parse(r#"{"id":1,"name":"Laptop","item_type":"fixed_asset"}"#);
        assert!(TypeFilter::parse("").matches(&laptop));
        assert!(TypeFilter::parse("fixed_asset").matches(&laptop));
        assert!(!TypeFilter::parse("consumable").matches(&laptop));
    }

    #[test]
    fn test_payload_drops_min_stock_for_fixed_assets() {
        let mut form = ItemForm {
            name: "Laptop".into(),
            category_id: "1".into(),
            unit_id: "2".into(),
            item_type: ItemType::FixedAsset,
            min_stock_level: "5".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload().min_stock_level, None);

        form.item_type = ItemType::Consumable;
        let payload = form.to_payload();
        assert_eq!(payload.min_stock_level, Some(5.0));
        assert_eq!(payload.category_id, Some(1));

        form.min_stock_level = String::new();
        assert_eq!(form.to_payload().min_stock_level, None);
    }

    #[test]
    fn test_options_of_type() {
        let items = vec![
            parse(r#"{"id":1,"name":"Laptop","item_type":"fixed_asset"}"#),
            parse(r#"{"id":2,"name":"Paper","item_type":"consumable"}"#),
        ];
        let options = options_of_type(&items, ItemType::Consumable);
        assert_eq!(options, vec![("2".to_string(), "Paper".to_string())]);
    }
}
