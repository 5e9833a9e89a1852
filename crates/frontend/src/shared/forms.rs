//! Glue between form structs held in a signal and the ui input components.

use std::future::Future;

use contracts::domain::common::RecordId;
use contracts::shared::api::{FieldErrors, MessageResponse};
use leptos::prelude::*;

use crate::shared::api_client::ApiError;
use crate::shared::notify::Notifier;

/// Fallback toast for any failure that is not a 422.
pub const GENERIC_ERROR: &str = "An error occurred.";

/// Two-way binding for one string field of a form struct.
pub fn field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || form.with(get));
    let on_input = Callback::new(move |v: String| form.update(|f| set(f, v)));
    (value, on_input)
}

/// Server-side validation messages keyed by field name.
#[derive(Clone, Copy)]
pub struct FormErrors(RwSignal<FieldErrors>);

impl FormErrors {
    pub fn new() -> Self {
        Self(RwSignal::new(FieldErrors::new()))
    }

    pub fn field(&self, name: &'static str) -> Signal<Option<String>> {
        let errors = self.0;
        Signal::derive(move || errors.with(|e| e.get(name).cloned()))
    }

    pub fn set(&self, errors: FieldErrors) {
        self.0.set(errors);
    }

    pub fn set_one(&self, name: &str, message: impl Into<String>) {
        self.0.update(|e| {
            e.insert(name.to_string(), message.into());
        });
    }

    pub fn clear(&self) {
        self.0.set(FieldErrors::new());
    }

    /// Keep 422 field messages for inline display. Returns `true` when the
    /// error was a validation error and has been consumed.
    pub fn absorb(&self, error: &ApiError) -> bool {
        match error {
            ApiError::Validation { .. } => {
                self.set(error.field_errors());
                true
            }
            _ => false,
        }
    }
}

impl Default for FormErrors {
    fn default() -> Self {
        Self::new()
    }
}

/// What an open record form is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn id(&self) -> Option<RecordId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// `Add Department` / `Edit Department`
    pub fn title(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("Add {}", noun),
            FormMode::Edit(_) => format!("Edit {}", noun),
        }
    }

    pub fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (FormMode::Create, false) => "Save",
            (FormMode::Create, true) => "Saving...",
            (FormMode::Edit(_), false) => "Update",
            (FormMode::Edit(_), true) => "Updating...",
        }
    }

    /// `Department created.` / `Department updated.`
    pub fn success(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("{} created.", noun),
            FormMode::Edit(_) => format!("{} updated.", noun),
        }
    }
}

/// Toast text for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Always the given text.
    Fixed(&'static str),
    /// The server's message when it sent one, else the given text.
    ServerOr(&'static str),
}

impl Failure {
    pub fn message(&self, error: &ApiError) -> String {
        match self {
            Failure::Fixed(text) => text.to_string(),
            Failure::ServerOr(fallback) => error.message_or(fallback),
        }
    }
}

/// Run a form request. Validation errors land next to their fields, any
/// other failure becomes an error toast. Returns `true` on success.
pub async fn submit<Fut>(
    request: Fut,
    errors: FormErrors,
    notifier: Notifier,
    success: String,
    failure: Failure,
) -> bool
where
    Fut: Future<Output = Result<MessageResponse, ApiError>>,
{
    errors.clear();
    match request.await {
        Ok(_) => {
            notifier.success(success);
            true
        }
        Err(e) => {
            log::warn!("form submit failed: {}", e);
            if !errors.absorb(&e) {
                notifier.error(failure.message(&e));
            }
            false
        }
    }
}

/// Run a request without a form, e.g. a delete. Returns `true` on success.
pub async fn perform<Fut>(request: Fut, notifier: Notifier, success: String, failure: Failure) -> bool
where
    Fut: Future<Output = Result<MessageResponse, ApiError>>,
{
    match request.await {
        Ok(_) => {
            notifier.success(success);
            true
        }
        Err(e) => {
            log::warn!("request failed: {}", e);
            notifier.error(failure.message(&e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_labels() {
        assert_eq!(FormMode::Create.title("Department"), "Add Department");
        assert_eq!(FormMode::Edit(3).title("Department"), "Edit Department");
        assert_eq!(FormMode::Create.submit_label(false), "Save");
        assert_eq!(FormMode::Edit(3).submit_label(false), "Update");
        assert_eq!(FormMode::Edit(3).submit_label(true), "Updating...");
        assert_eq!(FormMode::Create.success("Unit"), "Unit created.");
        assert_eq!(FormMode::Edit(3).success("Unit"), "Unit updated.");
        assert_eq!(FormMode::Edit(3).id(), Some(3));
        assert_eq!(FormMode::Create.id(), None);
    }

    #[test]
    fn test_failure_messages() {
        let error = ApiError::from_response(409, r#"{"message":"Cannot delete own account."}"#);
        assert_eq!(
            Failure::Fixed("Cannot delete: unit is in use.").message(&error),
            "Cannot delete: unit is in use."
        );
        assert_eq!(
            Failure::ServerOr("Cannot delete this user.").message(&error),
            "Cannot delete own account."
        );

        let silent = ApiError::from_response(500, "");
        assert_eq!(Failure::ServerOr(GENERIC_ERROR).message(&silent), "An error occurred.");
    }
}
