//! Form domain layer
//!
//! Type-safe form handling: validated fields and the registration form that
//! aggregates them.

mod field;
mod form_state;

pub use field::ValidatedField;
pub use form_state::{FieldKind, Form, RegistrationForm, SUBMIT_ROW};
