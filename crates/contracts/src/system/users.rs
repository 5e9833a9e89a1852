//! User accounts, managed by system administrators only.

use serde::{Deserialize, Serialize};

use super::auth::UserType;
use crate::domain::common::{id_to_string, parse_id, RecordId};
use crate::shared::search::Searchable;

pub const ROUTE: &str = "/api/users";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserDepartment {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    #[serde(default)]
    pub department: Option<UserDepartment>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn permission_count(&self) -> usize {
        self.permissions.as_ref().map(Vec::len).unwrap_or(0)
    }

    /// `1 permission`, `3 permissions`.
    pub fn permission_summary(&self) -> String {
        let n = self.permission_count();
        format!("{} permission{}", n, if n == 1 { "" } else { "s" })
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), Some(self.email.clone())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleFilter(pub Option<UserType>);

impl RoleFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "" => RoleFilter(None),
            other => RoleFilter(Some(UserType::parse(other))),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.0.map(|t| t == user.user_type).unwrap_or(true)
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            (String::new(), "All Roles".to_string()),
            (
                UserType::SystemAdministrator.as_str().to_string(),
                "System Administrator".to_string(),
            ),
            (UserType::Employee.as_str().to_string(), "Employee".to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub department_id: String,
    pub password: String,
    pub password_confirmation: String,
    pub permissions: Vec<String>,
}

impl From<&User> for UserForm {
    fn from(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            email: u.email.clone(),
            user_type: u.user_type,
            department_id: id_to_string(u.department_id),
            password: String::new(),
            password_confirmation: String::new(),
            permissions: u.permissions.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub department_id: Option<RecordId>,
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl UserForm {
    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }

    /// Administrators carry no department.
    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
        if user_type == UserType::SystemAdministrator {
            self.department_id.clear();
        }
    }

    pub fn toggle_permission(&mut self, key: &str, checked: bool) {
        if checked {
            if !self.permissions.iter().any(|p| p == key) {
                self.permissions.push(key.to_string());
            }
        } else {
            self.permissions.retain(|p| p != key);
        }
    }

    pub fn has_permission(&self, key: &str) -> bool {
        self.permissions.iter().any(|p| p == key)
    }

    pub fn to_payload(&self) -> UserPayload {
        let employee = self.is_employee();
        let with_password = !self.password.is_empty();
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            user_type: self.user_type,
            department_id: if employee {
                parse_id(&self.department_id)
            } else {
                None
            },
            permissions: employee.then(|| self.permissions.clone()),
            password: with_password.then(|| self.password.clone()),
            password_confirmation: with_password.then(|| self.password_confirmation.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(json: &str) -> User {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_permission_summary() {
        let u = user(r#"{"id":1,"name":"Jo","email":"jo@x.com","user_type":"employee","permissions":["items"]}"#);
        assert_eq!(u.permission_summary(), "1 permission");
        let u = user(r#"{"id":2,"name":"Al","email":"al@x.com","user_type":"employee","permissions":null}"#);
        assert_eq!(u.permission_summary(), "0 permissions");
    }

    #[test]
    fn test_role_filter_and_search() {
        let u = user(r#"{"id":1,"name":"Jo Reyes","email":"jo@x.com","user_type":"system_administrator"}"#);
        assert!(RoleFilter::parse("system_administrator").matches(&u));
        assert!(!RoleFilter::parse("employee").matches(&u));
        assert!(RoleFilter::parse("").matches(&u));
        assert!(u.matches_search("JO@"));
    }

    #[test]
    fn test_admin_payload_has_no_department_or_permissions() {
        let mut form = UserForm {
            name: "Root".into(),
            email: "root@inventory.com".into(),
            department_id: "3".into(),
            permissions: vec!["items".into()],
            ..Default::default()
        };
        form.set_user_type(UserType::SystemAdministrator);
        assert!(form.department_id.is_empty());

        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert!(json["department_id"].is_null());
        assert!(json["permissions"].is_null());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_employee_payload_with_password() {
        let mut form = UserForm {
            name: "Jo".into(),
            email: "jo@inventory.com".into(),
            department_id: "3".into(),
            password: "Secret1!".into(),
            password_confirmation: "Secret1!".into(),
            ..Default::default()
        };
        form.toggle_permission("items", true);
        form.toggle_permission("items", true);
        form.toggle_permission("units", true);
        form.toggle_permission("units", false);

        let payload = form.to_payload();
        assert_eq!(payload.department_id, Some(3));
        assert_eq!(payload.permissions, Some(vec!["items".to_string()]));
        assert_eq!(payload.password.as_deref(), Some("Secret1!"));
    }
}
