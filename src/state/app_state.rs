//! Application state definitions

use super::forms::RegistrationForm;
use crate::signup::SignupError;

/// Message shown after the server accepted a registration
pub const REGISTRATION_SUCCEEDED: &str = "Registration succeeded";

/// Message shown when the signup service cannot be reached at all
pub const SERVICE_UNREACHABLE: &str = "Could not reach the signup service";

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormStatus {
    pub failed: bool,
    pub message: String,
}

impl FormStatus {
    pub fn success() -> Self {
        Self {
            failed: false,
            message: REGISTRATION_SUCCEEDED.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            failed: true,
            message: message.into(),
        }
    }

    /// Map a resolved submission to the message shown to the user
    pub fn from_result(result: &Result<(), SignupError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(SignupError::Rejected {
                message: Some(message),
                ..
            }) => Self::failure(message.clone()),
            Err(SignupError::Rejected {
                status,
                message: None,
            }) => Self::failure(format!("Registration failed (HTTP {status})")),
            Err(SignupError::Transport(_)) => Self::failure(SERVICE_UNREACHABLE),
            Err(SignupError::Decode(_)) => Self::failure("Registration failed"),
        }
    }

    /// True when there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub status: FormStatus,
    /// Requests spawned but not yet resolved
    pub pending_submissions: usize,
    /// Transient hint for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn is_submitting(&self) -> bool {
        self.pending_submissions > 0
    }

    /// Start over with an empty form and no status
    pub fn reset(&mut self) {
        self.form.reset();
        self.status = FormStatus::default();
        self.status_message = None;
    }
}
