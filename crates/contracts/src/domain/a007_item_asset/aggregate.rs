use serde::{Deserialize, Serialize};

use crate::domain::common::{
    blank_to_none, id_to_string, number_to_string, parse_id, parse_number, NamedRef, PartyKind,
    RecordId,
};
use crate::shared::format::date_input_value;
use crate::shared::lenient;
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/item-assets";
pub const ASSIGN_ACTION: &str = "assign";
pub const RETURN_ACTION: &str = "return";

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_ASSIGNED: &str = "assigned";

/// Statuses offered by the list filter.
pub const STATUSES: &[&str] = &["available", "assigned", "under_repair", "disposed"];

/// Physical unit of a fixed-asset item, tracked by its unique code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAsset {
    pub id: RecordId,
    pub item_id: RecordId,
    pub item_code: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub warranty_expiry: Option<String>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub item: Option<NamedRef>,
    #[serde(default)]
    pub department: Option<NamedRef>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

impl ItemAsset {
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.name.as_str())
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }

    pub fn can_assign(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }

    pub fn can_return(&self) -> bool {
        self.status == STATUS_ASSIGNED
    }
}

impl Searchable for ItemAsset {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.item_code.clone()),
            self.item_name().map(str::to_string),
            self.serial_number.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusFilter(pub Option<String>);

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        StatusFilter(blank_to_none(value))
    }

    pub fn matches(&self, asset: &ItemAsset) -> bool {
        self.0.as_deref().map(|s| s == asset.status).unwrap_or(true)
    }

    pub fn options() -> Vec<(String, String)> {
        let mut options = vec![(String::new(), "All Statuses".to_string())];
        options.extend(STATUSES.iter().map(|s| {
            (
                s.to_string(),
                crate::shared::format::format_status(Some(s)),
            )
        }));
        options
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemAssetForm {
    pub item_id: String,
    pub item_code: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub purchase_price: String,
    pub warranty_expiry: String,
    pub condition: String,
    pub department_id: String,
    pub notes: String,
}

impl Default for ItemAssetForm {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            item_code: String::new(),
            serial_number: String::new(),
            purchase_date: String::new(),
            purchase_price: String::new(),
            warranty_expiry: String::new(),
            condition: "new".to_string(),
            department_id: String::new(),
            notes: String::new(),
        }
    }
}

impl From<&ItemAsset> for ItemAssetForm {
    fn from(a: &ItemAsset) -> Self {
        Self {
            item_id: a.item_id.to_string(),
            item_code: a.item_code.clone(),
            serial_number: a.serial_number.clone().unwrap_or_default(),
            purchase_date: date_input_value(a.purchase_date.as_deref()),
            purchase_price: number_to_string(a.purchase_price),
            warranty_expiry: date_input_value(a.warranty_expiry.as_deref()),
            condition: a.condition.clone(),
            department_id: id_to_string(a.department_id),
            notes: a.notes.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemAssetPayload {
    pub item_id: Option<RecordId>,
    pub item_code: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub warranty_expiry: Option<String>,
    pub condition: String,
    pub department_id: Option<RecordId>,
    pub notes: Option<String>,
}

impl ItemAssetForm {
    pub fn to_payload(&self) -> ItemAssetPayload {
        ItemAssetPayload {
            item_id: parse_id(&self.item_id),
            item_code: self.item_code.trim().to_string(),
            serial_number: blank_to_none(&self.serial_number),
            purchase_date: blank_to_none(&self.purchase_date),
            purchase_price: parse_number(&self.purchase_price),
            warranty_expiry: blank_to_none(&self.warranty_expiry),
            condition: self.condition.clone(),
            department_id: parse_id(&self.department_id),
            notes: blank_to_none(&self.notes),
        }
    }
}

/// Assign an available asset to an employee or a department.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignForm {
    pub assignable_type: PartyKind,
    pub assignable_id: String,
    pub assigned_at: String,
    pub expected_return_date: String,
    pub condition_on_assign: String,
    pub purpose: String,
    pub notes: String,
}

impl AssignForm {
    pub fn new(today: &str) -> Self {
        Self {
            assignable_type: PartyKind::Employee,
            assignable_id: String::new(),
            assigned_at: today.to_string(),
            expected_return_date: String::new(),
            condition_on_assign: "good".to_string(),
            purpose: String::new(),
            notes: String::new(),
        }
    }

    /// Switching between employee and department invalidates the chosen id.
    pub fn set_assignable_type(&mut self, kind: PartyKind) {
        if self.assignable_type != kind {
            self.assignable_type = kind;
            self.assignable_id.clear();
        }
    }

    pub fn to_payload(&self) -> AssignPayload {
        AssignPayload {
            assignable_type: self.assignable_type,
            assignable_id: parse_id(&self.assignable_id),
            assigned_at: self.assigned_at.clone(),
            expected_return_date: blank_to_none(&self.expected_return_date),
            condition_on_assign: self.condition_on_assign.clone(),
            purpose: blank_to_none(&self.purpose),
            notes: blank_to_none(&self.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignPayload {
    pub assignable_type: PartyKind,
    pub assignable_id: Option<RecordId>,
    pub assigned_at: String,
    pub expected_return_date: Option<String>,
    pub condition_on_assign: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnForm {
    pub returned_at: String,
    pub condition_on_return: String,
    pub notes: String,
}

impl ReturnForm {
    pub fn new(today: &str) -> Self {
        Self {
            returned_at: today.to_string(),
            condition_on_return: "good".to_string(),
            notes: String::new(),
        }
    }

    pub fn to_payload(&self) -> ReturnPayload {
        ReturnPayload {
            returned_at: self.returned_at.clone(),
            condition_on_return: self.condition_on_return.clone(),
            notes: blank_to_none(&self.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnPayload {
    pub returned_at: String,
    pub condition_on_return: String,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(status: &str) -> ItemAsset {
        serde_json::from_str(&format!(
            r#"{{"id":9,"item_id":1,"item_code":"NOD-LAP-001","serial_number":"SN123","purchase_price":"45000.00","condition":"new","status":"{}","item":{{"id":1,"name":"Laptop"}},"purchase_date":"2024-01-15T00:00:00.000000Z"}}"#,
            status
        ))
        .unwrap()
    }

    #[test]
    fn test_actions_follow_status() {
        assert!(asset("available").can_assign());
        assert!(!asset("available").can_return());
        assert!(asset("assigned").can_return());
        assert!(!asset("under_repair").can_assign());
    }

    #[test]
    fn test_search_code_item_serial() {
        let a = asset("available");
        assert!(a.matches_search("lap-001"));
        assert!(a.matches_search("laptop"));
        assert!(a.matches_search("sn1"));
        assert!(!a.matches_search("printer"));
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::parse("").matches(&asset("disposed")));
        assert!(StatusFilter::parse("assigned").matches(&asset("assigned")));
        assert!(!StatusFilter::parse("assigned").matches(&asset("available")));
    }

    #[test]
    fn test_edit_form_prefills_dates_and_price() {
        let form = ItemAssetForm::from(&asset("available"));
        assert_eq!(form.purchase_date, "2024-01-15");
        assert_eq!(form.purchase_price, "45000");
        assert_eq!(form.warranty_expiry, "");
    }

    #[test]
    fn test_assign_type_change_resets_target() {
        let mut form = AssignForm::new("2024-06-01");
        form.assignable_id = "4".into();
        form.set_assignable_type(PartyKind::Employee);
        assert_eq!(form.assignable_id, "4");
        form.set_assignable_type(PartyKind::Department);
        assert_eq!(form.assignable_id, "");

        form.assignable_id = "2".into();
        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(json["assignable_type"], "department");
        assert_eq!(json["assignable_id"], 2);
        assert_eq!(json["assigned_at"], "2024-06-01");
        assert_eq!(json["condition_on_assign"], "good");
    }

    #[test]
    fn test_return_defaults() {
        let payload = ReturnForm::new("2024-06-30").to_payload();
        assert_eq!(payload.returned_at, "2024-06-30");
        assert_eq!(payload.condition_on_return, "good");
        assert_eq!(payload.notes, None);
    }
}
