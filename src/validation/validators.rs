//! Pure field validators
//!
//! Every validator maps a field value to the list of messages describing what
//! is wrong with it. An empty list means the value is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message shown when the confirmation differs from the password
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Message shown when an e-mail does not look like `local@domain.tld`
pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

/// A boxed validator carried by a form field
pub type Validator = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Checks that a trimmed value is not empty
pub fn check_required(label: &str, value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        vec![format!("{label} is required")]
    } else {
        Vec::new()
    }
}

/// Checks that a value is a syntactically valid e-mail address
pub fn check_email(label: &str, value: &str) -> Vec<String> {
    let required = check_required(label, value);
    if !required.is_empty() {
        return required;
    }

    // Matched untrimmed: the value is sent exactly as typed
    if EMAIL_RE.is_match(value) {
        Vec::new()
    } else {
        vec![INVALID_EMAIL_FORMAT.to_string()]
    }
}

/// Checks every password rule independently; each unmet rule adds a message
pub fn check_password(label: &str, value: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if value.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "{label} must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    if !value.chars().any(char::is_uppercase) {
        errors.push(format!("{label} must contain at least one uppercase letter"));
    }
    if !value.chars().any(char::is_lowercase) {
        errors.push(format!("{label} must contain at least one lowercase letter"));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(format!("{label} must contain at least one number"));
    }
    if !value
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        errors.push(format!(
            "{label} must contain at least one special character"
        ));
    }

    errors
}

/// Checks that a confirmation equals the password it confirms
pub fn check_confirmation(password: &str, value: &str) -> Vec<String> {
    if value != password {
        vec![PASSWORDS_DO_NOT_MATCH.to_string()]
    } else {
        Vec::new()
    }
}

/// Build a required-field validator for `label`
pub fn required(label: &str) -> Validator {
    let label = label.to_string();
    Arc::new(move |value| check_required(&label, value))
}

/// Build an e-mail validator for `label`
pub fn email(label: &str) -> Validator {
    let label = label.to_string();
    Arc::new(move |value| check_email(&label, value))
}

/// Build a password-strength validator for `label`
pub fn password(label: &str) -> Validator {
    let label = label.to_string();
    Arc::new(move |value| check_password(&label, value))
}

/// Build a confirmation validator bound to the current password value.
///
/// The form rebuilds this validator whenever the password changes.
pub fn confirmation(password: &str) -> Validator {
    let password = password.to_string();
    Arc::new(move |value| check_confirmation(&password, value))
}
