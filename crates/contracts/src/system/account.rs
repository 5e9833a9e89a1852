//! Self-service profile and password changes.

use serde::Serialize;

pub const ROUTE: &str = "/api/account";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordForm {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// The password change goes through the same endpoint and must resend the
/// profile fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordUpdate {
    pub name: String,
    pub email: String,
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl PasswordForm {
    /// Client-side checks, first failure wins.
    pub fn validate(&self) -> Result<(), (&'static str, &'static str)> {
        if self.current_password.is_empty() {
            return Err(("current_password", "Current password is required."));
        }
        if self.password.is_empty() {
            return Err(("password", "New password is required."));
        }
        if self.password != self.password_confirmation {
            return Err(("password_confirmation", "Passwords do not match."));
        }
        Ok(())
    }

    pub fn to_update(&self, name: &str, email: &str) -> PasswordUpdate {
        PasswordUpdate {
            name: name.to_string(),
            email: email.to_string(),
            current_password: self.current_password.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        let mut form = PasswordForm::default();
        assert_eq!(form.validate().unwrap_err().1, "Current password is required.");

        form.current_password = "old".into();
        assert_eq!(form.validate().unwrap_err().1, "New password is required.");

        form.password = "new-secret".into();
        form.password_confirmation = "typo".into();
        assert_eq!(form.validate().unwrap_err().0, "password_confirmation");

        form.password_confirmation = "new-secret".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_update_carries_profile() {
        let form = PasswordForm {
            current_password: "old".into(),
            password: "new".into(),
            password_confirmation: "new".into(),
        };
        let update = form.to_update("Jo", "jo@inventory.com");
        assert_eq!(update.name, "Jo");
        assert_eq!(update.current_password, "old");
    }
}
