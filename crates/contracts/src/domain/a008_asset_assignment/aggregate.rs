use serde::{Deserialize, Serialize};

use crate::domain::common::{party_name, PartyKind, PartyRef, RecordId};
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/asset-assignments";

pub const STATUSES: &[&str] = &["active", "returned", "lost"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetSummary {
    pub id: RecordId,
    #[serde(default)]
    pub item_code: String,
    #[serde(default)]
    pub item: Option<crate::domain::common::NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub name: String,
}

/// Record linking an asset to an employee or department for a period (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAssignment {
    pub id: RecordId,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assigned_at: Option<String>,
    #[serde(default)]
    pub expected_return_date: Option<String>,
    #[serde(default)]
    pub returned_at: Option<String>,
    #[serde(default)]
    pub condition_on_assign: Option<String>,
    #[serde(default)]
    pub condition_on_return: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub asset: Option<AssetSummary>,
    #[serde(default)]
    pub assignable: Option<PartyRef>,
    #[serde(default)]
    pub assignable_type: Option<String>,
    #[serde(default)]
    pub assigned_by_user: Option<UserSummary>,
}

impl AssetAssignment {
    pub fn asset_code(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.item_code.as_str())
    }

    pub fn item_name(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|a| a.item.as_ref())
            .map(|i| i.name.as_str())
    }

    pub fn assignee_name(&self) -> String {
        party_name(self.assignable.as_ref())
    }

    pub fn assignee_kind(&self) -> PartyKind {
        PartyKind::from_morph(self.assignable_type.as_deref())
    }
}

impl Searchable for AssetAssignment {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            self.asset_code().map(str::to_string),
            self.item_name().map(str::to_string),
            Some(self.assignee_name()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusFilter(pub Option<String>);

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        StatusFilter(crate::domain::common::blank_to_none(value))
    }

    pub fn matches(&self, row: &AssetAssignment) -> bool {
        self.0.as_deref().map(|s| s == row.status).unwrap_or(true)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AssetAssignment {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_employee_assignment() {
        let row = parse(
            r#"{"id":1,"status":"active","assigned_at":"2024-05-01","asset":{"id":3,"item_code":"NOD-LAP-001","item":{"id":1,"name":"Laptop"}},"assignable":{"id":7,"first_name":"Jo","last_name":"Reyes"},"assignable_type":"App\\Models\\Employee"}"#,
        );
        assert_eq!(row.assignee_name(), "Jo Reyes");
        assert_eq!(row.assignee_kind(), PartyKind::Employee);
        assert_eq!(row.asset_code(), Some("NOD-LAP-001"));
        assert!(row.matches_search("reyes"));
        assert!(row.matches_search("laptop"));
    }

    #[test]
    fn test_department_assignment_without_party() {
        let row = parse(r#"{"id":2,"status":"returned","assignable_type":"App\\Models\\Department"}"#);
        assert_eq!(row.assignee_name(), "—");
        assert_eq!(row.assignee_kind(), PartyKind::Department);
        assert!(StatusFilter::parse("returned").matches(&row));
        assert!(!StatusFilter::parse("active").matches(&row));
    }
}
