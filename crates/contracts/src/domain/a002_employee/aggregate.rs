use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_to_none, id_to_string, parse_id, NamedRef, RecordId};
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/employees";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub department: Option<NamedRef>,
}

fn default_status() -> String {
    "active".to_string()
}

impl Employee {
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(full) if !full.is_empty() => full.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }

    pub fn option(&self) -> (String, String) {
        (self.id.to_string(), self.display_name())
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            Some(self.employee_id.clone()),
            self.position.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => employee.status == "active",
            StatusFilter::Inactive => employee.status == "inactive",
        }
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            (String::new(), "All Statuses".to_string()),
            ("active".to_string(), "Active".to_string()),
            ("inactive".to_string(), "Inactive".to_string()),
        ]
    }
}

/// Form state, all fields as the inputs hold them.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub department_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub status: String,
    pub email: String,
    pub phone: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            department_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            position: String::new(),
            status: default_status(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(e: &Employee) -> Self {
        Self {
            employee_id: e.employee_id.clone(),
            department_id: id_to_string(e.department_id),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            position: e.position.clone().unwrap_or_default(),
            status: e.status.clone(),
            email: e.email.clone().unwrap_or_default(),
            phone: e.phone.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub employee_id: String,
    pub department_id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub status: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EmployeeForm {
    pub fn to_payload(&self) -> EmployeePayload {
        EmployeePayload {
            employee_id: self.employee_id.trim().to_string(),
            department_id: parse_id(&self.department_id),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            position: blank_to_none(&self.position),
            status: self.status.clone(),
            email: blank_to_none(&self.email),
            phone: blank_to_none(&self.phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(status: &str) -> Employee {
        Employee {
            id: 1,
            employee_id: "EMP-0042".into(),
            first_name: "Maria".into(),
            last_name: "Santos".into(),
            full_name: None,
            department_id: Some(2),
            position: Some("Technician".into()),
            email: None,
            phone: None,
            status: status.into(),
            department: Some(NamedRef { id: 2, name: "IT".into() }),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_parts() {
        let mut e = employee("active");
        assert_eq!(e.display_name(), "Maria Santos");
        e.full_name = Some("Ma. Santos".into());
        assert_eq!(e.display_name(), "Ma. Santos");
    }

    #[test]
    fn test_search_fields() {
        let e = employee("active");
        assert!(e.matches_search("emp-0042"));
        assert!(e.matches_search("TECH"));
        assert!(e.matches_search("santos"));
        assert!(!e.matches_search("IT"));
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::parse("").matches(&employee("inactive")));
        assert!(StatusFilter::Active.matches(&employee("active")));
        assert!(!StatusFilter::Active.matches(&employee("inactive")));
    }

    #[test]
    fn test_payload_conversion() {
        let form = EmployeeForm {
            employee_id: " EMP-1 ".into(),
            department_id: "5".into(),
            first_name: "Jo".into(),
            last_name: "Reyes".into(),
            ..Default::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.employee_id, "EMP-1");
        assert_eq!(payload.department_id, Some(5));
        assert_eq!(payload.status, "active");
        assert_eq!(payload.email, None);
    }
}
