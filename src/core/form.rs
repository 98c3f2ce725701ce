//! Form action outcomes
//!
//! A form action ends in one of two ways: the browser is sent somewhere
//! else, or the form re-renders with feedback. Both are plain values here;
//! the HTTP layer decides how to express them on the wire. Navigation is
//! never modeled as an error or a panic.

use super::validation::FieldErrors;
use serde::Serialize;

/// Feedback state for a re-rendered form: per-field error lists plus an
/// overall summary message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    /// Validation failed: field errors plus a summary message.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors,
            message: Some(message.into()),
        }
    }

    /// The write failed: a summary message only, no field errors.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::new(),
            message: Some(message.into()),
        }
    }
}

/// How a form action concluded.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Transfer control to the given path; the action does not resume.
    Redirect(String),
    /// Re-render the form with the given feedback state.
    Form(FormState),
}

impl ActionOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, ActionOutcome::Redirect(_))
    }

    /// The feedback state, if this outcome carries one.
    pub fn form_state(&self) -> Option<&FormState> {
        match self {
            ActionOutcome::Form(state) => Some(state),
            ActionOutcome::Redirect(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_are_omitted_from_json() {
        let state = FormState::failed("Database Error. Failed to create invoice.");
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("errors").is_none());
        assert_eq!(json["message"], "Database Error. Failed to create invoice.");
    }

    #[test]
    fn test_field_errors_serialize_as_lists() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "amount".to_string(),
            vec!["Please enter an amount greater than 0.".to_string()],
        );
        let state = FormState::invalid(errors, "Missing fields.  Failed to create invoice.");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json["errors"]["amount"][0],
            "Please enter an amount greater than 0."
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let redirect = ActionOutcome::Redirect("/dashboard/invoices".to_string());
        assert!(redirect.is_redirect());
        assert!(redirect.form_state().is_none());

        let form = ActionOutcome::Form(FormState::default());
        assert!(!form.is_redirect());
        assert!(form.form_state().is_some());
    }
}
