//! Form state management and the registration form

use super::field::ValidatedField;
use crate::signup::RegistrationPayload;
use crate::validation;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    #[cfg(test)]
    fn get_field(&self, index: usize) -> Option<&ValidatedField>;
}

/// Identifies one input of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Password,
    PasswordConfirmation,
    AccessCode,
}

impl FieldKind {
    /// All fields in display order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::PasswordConfirmation,
        FieldKind::AccessCode,
    ];

    pub fn index(self) -> usize {
        match self {
            FieldKind::Name => 0,
            FieldKind::Email => 1,
            FieldKind::Password => 2,
            FieldKind::PasswordConfirmation => 3,
            FieldKind::AccessCode => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Index of the submit button row (after the five inputs)
pub const SUBMIT_ROW: usize = 5;

/// The registration form: five validated inputs plus the submit button row
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: ValidatedField,
    pub email: ValidatedField,
    pub password: ValidatedField,
    pub password_confirmation: ValidatedField,
    pub access_code: ValidatedField,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: ValidatedField::text("nome", "Name", "Name", validation::required("Name")),
            email: ValidatedField::text("email", "E-mail", "e-mail", validation::email("E-mail")),
            password: ValidatedField::masked(
                "senha",
                "Password",
                "Password",
                validation::password("Password"),
            ),
            password_confirmation: ValidatedField::masked(
                "confirmacaoSenha",
                "Password Confirmation",
                "Password Confirmation",
                validation::confirmation(""),
            ),
            access_code: ValidatedField::text(
                "codigoAcesso",
                "Access Code",
                "Access Code",
                validation::required("Access Code"),
            ),
            active_field_index: 0,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &ValidatedField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
            FieldKind::PasswordConfirmation => &self.password_confirmation,
            FieldKind::AccessCode => &self.access_code,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut ValidatedField {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Password => &mut self.password,
            FieldKind::PasswordConfirmation => &mut self.password_confirmation,
            FieldKind::AccessCode => &mut self.access_code,
        }
    }

    /// Find the input rendered with the given placeholder
    #[cfg(test)]
    pub fn field_by_placeholder(&self, placeholder: &str) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| self.field(*kind).placeholder == placeholder)
    }

    /// The field currently holding focus, if focus is not on the submit row
    pub fn active_kind(&self) -> Option<FieldKind> {
        FieldKind::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    #[cfg(test)]
    pub fn focus(&mut self, kind: FieldKind) {
        self.active_field_index = kind.index();
    }

    /// Replace a field's value
    #[cfg(test)]
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.field_mut(kind).set_value(value);
        self.after_edit(kind);
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(kind) = self.active_kind() {
            self.field_mut(kind).push_char(c);
            self.after_edit(kind);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(kind) = self.active_kind() {
            self.field_mut(kind).pop_char();
            self.after_edit(kind);
        }
    }

    /// The confirmation depends on the password, so a password edit re-runs it.
    fn after_edit(&mut self, kind: FieldKind) {
        if kind == FieldKind::Password {
            let validator = validation::confirmation(self.password.value());
            self.password_confirmation.revalidate_with(validator);
        }
    }

    /// True when every field has an empty error list
    pub fn is_valid(&self) -> bool {
        FieldKind::ALL
            .into_iter()
            .all(|kind| self.field(kind).is_valid())
    }

    /// Mark every field as edited so all inline errors show up
    pub fn touch_all(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).touch();
        }
    }

    /// Snapshot of the current values for submission
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            access_code: self.access_code.value().to_string(),
        }
    }

    /// Clear every field and move focus back to the first input
    pub fn reset(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).clear();
        }
        self.after_edit(FieldKind::Password);
        self.active_field_index = 0;
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        6 // five inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    #[cfg(test)]
    fn get_field(&self, index: usize) -> Option<&ValidatedField> {
        FieldKind::from_index(index).map(|kind| self.field(kind))
    }
}
