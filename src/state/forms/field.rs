//! Form field value objects

use crate::validation::Validator;
use std::fmt;

/// A single form input whose errors are recomputed on every change
#[derive(Clone)]
pub struct ValidatedField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    /// Render the value as bullets instead of plain text
    pub is_masked: bool,
    value: String,
    errors: Vec<String>,
    touched: bool,
    validator: Validator,
}

impl fmt::Debug for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.is_masked { "<masked>" } else { self.value.as_str() };
        f.debug_struct("ValidatedField")
            .field("name", &self.name)
            .field("value", &value)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .finish()
    }
}

impl ValidatedField {
    /// Create a plain text field
    pub fn text(name: &str, label: &str, placeholder: &str, validator: Validator) -> Self {
        Self::with_value(name, label, placeholder, String::new(), validator)
    }

    /// Create a masked field for secrets
    pub fn masked(name: &str, label: &str, placeholder: &str, validator: Validator) -> Self {
        Self {
            is_masked: true,
            ..Self::text(name, label, placeholder, validator)
        }
    }

    /// Create a text field with an initial value
    pub fn with_value(
        name: &str,
        label: &str,
        placeholder: &str,
        value: String,
        validator: Validator,
    ) -> Self {
        let errors = validator(&value);
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            is_masked: false,
            value,
            errors,
            touched: false,
            validator,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the user has edited this field since it was created or reset
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Mark the field as edited so its errors are rendered
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Replace the value and re-run the validator
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
        self.validate();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.touched = true;
        self.validate();
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.touched = true;
        self.validate();
    }

    /// Clear the value and forget that the field was edited
    pub fn clear(&mut self) {
        self.value.clear();
        self.touched = false;
        self.validate();
    }

    /// Swap the validator and recompute errors for the current value
    pub fn revalidate_with(&mut self, validator: Validator) {
        self.validator = validator;
        self.validate();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn validate(&mut self) {
        self.errors = (self.validator)(&self.value);
    }
}
