//! Types shared by several aggregates: ids, nested references and the
//! small conversions every form performs before hitting the API.

use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// Backend primary key.
pub type RecordId = i64;

/// Related record embedded in a response, e.g. `department: { id, name }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitRef {
    #[serde(default)]
    pub abbreviation: String,
}

/// Item embedded in stock records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: Option<UnitRef>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub min_stock_level: Option<f64>,
}

impl ItemRef {
    pub fn unit_abbreviation(&self) -> &str {
        self.unit
            .as_ref()
            .map(|u| u.abbreviation.as_str())
            .unwrap_or("")
    }
}

/// Polymorphic target of an assignment or issuance: employee or department.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyRef {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl PartyRef {
    /// `full_name`, then `name`, then "first last".
    pub fn display_name(&self) -> String {
        if let Some(full) = &self.full_name {
            return full.clone();
        }
        if let Some(name) = &self.name {
            return name.clone();
        }
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Name of an optional party, dash when absent.
pub fn party_name(party: Option<&PartyRef>) -> String {
    party
        .map(PartyRef::display_name)
        .unwrap_or_else(|| crate::shared::format::EMPTY.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    #[default]
    Employee,
    Department,
}

impl PartyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyKind::Employee => "employee",
            PartyKind::Department => "department",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartyKind::Employee => "Employee",
            PartyKind::Department => "Department",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "department" => PartyKind::Department,
            _ => PartyKind::Employee,
        }
    }

    /// The backend reports the morph class, e.g. `App\Models\Employee`.
    pub fn from_morph(morph: Option<&str>) -> Self {
        match morph {
            Some(m) if m.contains("Employee") => PartyKind::Employee,
            _ => PartyKind::Department,
        }
    }

    pub fn options() -> Vec<(String, String)> {
        [PartyKind::Employee, PartyKind::Department]
            .iter()
            .map(|k| (k.as_str().to_string(), k.label().to_string()))
            .collect()
    }
}

/// Condition values shared by assets, assignments and returns.
pub const CONDITIONS: &[&str] = &["new", "good", "fair", "poor", "damaged"];

pub fn condition_options() -> Vec<(String, String)> {
    CONDITIONS
        .iter()
        .map(|c| (c.to_string(), crate::shared::format::format_status(Some(c))))
        .collect()
}

/// Select values arrive as strings; empty means "not chosen".
pub fn parse_id(value: &str) -> Option<RecordId> {
    value.trim().parse().ok()
}

pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn id_to_string(id: Option<RecordId>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

pub fn number_to_string(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_display_name_precedence() {
        let p = PartyRef {
            id: 1,
            name: Some("Finance".into()),
            full_name: Some("Ana Cruz".into()),
            ..Default::default()
        };
        assert_eq!(p.display_name(), "Ana Cruz");

        let p = PartyRef { id: 2, name: Some("Finance".into()), ..Default::default() };
        assert_eq!(p.display_name(), "Finance");

        let p = PartyRef { id: 3, first_name: Some("Ana".into()), ..Default::default() };
        assert_eq!(p.display_name(), "Ana");

        assert_eq!(party_name(None), "—");
    }

    #[test]
    fn test_party_kind_from_morph() {
        assert_eq!(PartyKind::from_morph(Some("App\\Models\\Employee")), PartyKind::Employee);
        assert_eq!(PartyKind::from_morph(Some("App\\Models\\Department")), PartyKind::Department);
        assert_eq!(PartyKind::from_morph(None), PartyKind::Department);
    }

    #[test]
    fn test_form_value_helpers() {
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(blank_to_none("  "), None);
        assert_eq!(blank_to_none(" x "), Some("x".to_string()));
        assert_eq!(id_to_string(Some(4)), "4");
        assert_eq!(id_to_string(None), "");
    }
}
