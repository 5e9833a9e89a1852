//! Login, one-time-code verification and the session user.

use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;

pub const LOGIN_ROUTE: &str = "/api/login";
pub const VERIFY_ROUTE: &str = "/api/verify-code";
pub const RESEND_ROUTE: &str = "/api/resend-verification";
pub const LOGOUT_ROUTE: &str = "/api/logout";
pub const CURRENT_USER_ROUTE: &str = "/api/user";

pub const INVALID_CREDENTIALS: &str = "These credentials do not match our records.";
pub const VERIFICATION_FAILED: &str = "Verification failed. Please try again.";
pub const CODE_SENT: &str = "Code sent.";
pub const RESEND_FAILED: &str = "Failed to resend code.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// The backend has shipped the token under several keys over time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub requires_verification: bool,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub data: Option<TokenData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Second factor required; keep the id for the verify screen.
    VerificationRequired(RecordId),
    Authenticated(String),
    /// Cookie-only session: no token in the body.
    NoToken,
}

impl LoginResponse {
    /// Token precedence: `access_token`, `data.access_token`, `data.token`, `token`.
    pub fn token(&self) -> Option<String> {
        let nested = self.data.as_ref();
        [
            self.access_token.as_ref(),
            nested.and_then(|d| d.access_token.as_ref()),
            nested.and_then(|d| d.token.as_ref()),
            self.token.as_ref(),
        ]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty())
        .cloned()
    }

    pub fn outcome(&self) -> LoginOutcome {
        match (self.requires_verification, self.user_id) {
            (true, Some(user_id)) => LoginOutcome::VerificationRequired(user_id),
            _ => match self.token() {
                Some(token) => LoginOutcome::Authenticated(token),
                None => LoginOutcome::NoToken,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub user_id: RecordId,
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    pub user_id: RecordId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    SystemAdministrator,
    #[default]
    Employee,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::SystemAdministrator => "system_administrator",
            UserType::Employee => "employee",
        }
    }

    /// Role as the header shows it: `system administrator`.
    pub fn header_label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            UserType::SystemAdministrator => "Administrator",
            UserType::Employee => "Employee",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "system_administrator" => UserType::SystemAdministrator,
            _ => UserType::Employee,
        }
    }
}

/// The signed-in user returned by `/api/user`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.user_type == Some(UserType::SystemAdministrator)
    }

    pub fn has_permission(&self, key: &str) -> bool {
        self.permissions
            .as_ref()
            .map(|p| p.iter().any(|k| k == key))
            .unwrap_or(false)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "User"
        } else {
            &self.name
        }
    }

    pub fn role_label(&self) -> String {
        self.user_type
            .map(|t| t.header_label())
            .unwrap_or_else(|| "Employee".to_string())
    }

    /// First letters of up to two words of the name, `U` without a name.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> LoginResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_verification_required() {
        let r = response(r#"{"requires_verification":true,"user_id":12,"message":"Code sent"}"#);
        assert_eq!(r.outcome(), LoginOutcome::VerificationRequired(12));
    }

    #[test]
    fn test_token_precedence() {
        let r = response(r#"{"access_token":"a","token":"d","data":{"access_token":"b","token":"c"}}"#);
        assert_eq!(r.token().as_deref(), Some("a"));

        let r = response(r#"{"token":"d","data":{"access_token":"b","token":"c"}}"#);
        assert_eq!(r.token().as_deref(), Some("b"));

        let r = response(r#"{"token":"d","data":{"token":"c"}}"#);
        assert_eq!(r.token().as_deref(), Some("c"));

        let r = response(r#"{"token":"d"}"#);
        assert_eq!(r.outcome(), LoginOutcome::Authenticated("d".to_string()));
    }

    #[test]
    fn test_no_token() {
        assert_eq!(response("{}").outcome(), LoginOutcome::NoToken);
    }

    #[test]
    fn test_user_helpers() {
        let user: AuthUser = serde_json::from_str(
            r#"{"id":1,"name":"juan dela cruz","email":"juan@inventory.com","user_type":"system_administrator","permissions":null}"#,
        )
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(user.initials(), "JD");
        assert_eq!(user.role_label(), "system administrator");

        let anonymous = AuthUser::default();
        assert_eq!(anonymous.initials(), "U");
        assert_eq!(anonymous.display_name(), "User");
        assert_eq!(anonymous.role_label(), "Employee");
        assert!(!anonymous.has_permission("items"));
    }
}
