use serde::{Deserialize, Serialize};

use crate::domain::common::{
    blank_to_none, party_name, parse_id, parse_number, ItemRef, NamedRef, PartyKind, PartyRef,
    RecordId,
};
use crate::shared::format::format_number;
use crate::shared::lenient;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/stock-issuances";

/// Outgoing issue that decrements a department's stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockIssuance {
    pub id: RecordId,
    pub item_id: RecordId,
    pub from_department_id: RecordId,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub quantity: f64,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub issuable_type: Option<String>,
    #[serde(default)]
    pub item: Option<ItemRef>,
    #[serde(default)]
    pub from_department: Option<NamedRef>,
    #[serde(default)]
    pub issuable: Option<PartyRef>,
}

impl StockIssuance {
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.name.as_str())
    }

    pub fn from_department_name(&self) -> Option<&str> {
        self.from_department.as_ref().map(|d| d.name.as_str())
    }

    pub fn issued_to(&self) -> String {
        party_name(self.issuable.as_ref())
    }

    pub fn issued_to_kind(&self) -> PartyKind {
        PartyKind::from_morph(self.issuable_type.as_deref())
    }

    pub fn quantity_label(&self) -> String {
        let abbr = self.item.as_ref().map(ItemRef::unit_abbreviation).unwrap_or("");
        format!("{} {}", format_number(Some(self.quantity)), abbr)
            .trim_end()
            .to_string()
    }
}

impl Searchable for StockIssuance {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![self.item_name().map(str::to_string), Some(self.issued_to())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockIssuanceForm {
    pub item_id: String,
    pub from_department_id: String,
    pub issuable_type: PartyKind,
    pub issuable_id: String,
    pub quantity: String,
    pub issued_at: String,
    pub purpose: String,
    pub notes: String,
}

impl StockIssuanceForm {
    pub fn new(today: &str) -> Self {
        Self {
            item_id: String::new(),
            from_department_id: String::new(),
            issuable_type: PartyKind::Employee,
            issuable_id: String::new(),
            quantity: String::new(),
            issued_at: today.to_string(),
            purpose: String::new(),
            notes: String::new(),
        }
    }

    pub fn set_issuable_type(&mut self, kind: PartyKind) {
        if self.issuable_type != kind {
            self.issuable_type = kind;
            self.issuable_id.clear();
        }
    }

    pub fn to_payload(&self) -> StockIssuancePayload {
        StockIssuancePayload {
            item_id: parse_id(&self.item_id),
            from_department_id: parse_id(&self.from_department_id),
            issuable_type: self.issuable_type,
            issuable_id: parse_id(&self.issuable_id),
            quantity: parse_number(&self.quantity),
            issued_at: self.issued_at.clone(),
            purpose: blank_to_none(&self.purpose),
            notes: blank_to_none(&self.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockIssuancePayload {
    pub item_id: Option<RecordId>,
    pub from_department_id: Option<RecordId>,
    pub issuable_type: PartyKind,
    pub issuable_id: Option<RecordId>,
    pub quantity: Option<f64>,
    pub issued_at: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_to_department() {
        let row: StockIssuance = serde_json::from_str(
            r#"{"id":1,"item_id":2,"from_department_id":3,"quantity":5,"issuable_type":"App\\Models\\Department","issuable":{"id":4,"name":"Finance"},"item":{"id":2,"name":"Toner","unit":{"abbreviation":"pc"}}}"#,
        )
        .unwrap();
        assert_eq!(row.issued_to(), "Finance");
        assert_eq!(row.issued_to_kind(), PartyKind::Department);
        assert_eq!(row.quantity_label(), "5 pc");
        assert!(row.matches_search("fin"));
        assert!(row.matches_search("toner"));
    }

    #[test]
    fn test_switching_target_type_clears_id() {
        let mut form = StockIssuanceForm::new("2024-07-02");
        form.issuable_id = "9".into();
        form.set_issuable_type(PartyKind::Department);
        assert!(form.issuable_id.is_empty());
        assert_eq!(form.to_payload().issuable_type, PartyKind::Department);
    }
}
