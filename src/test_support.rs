//! Helpers that drive the app through key events, the way a user would

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Values typed into the registration form
#[derive(Debug, Clone)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub access_code: String,
}

/// A complete, valid set of registration values
pub fn sample_data() -> RegistrationData {
    RegistrationData {
        name: "Maria".to_string(),
        email: "maria.silva@example.com".to_string(),
        password: "S3nh@!123".to_string(),
        access_code: "Lorem ipsum dolor sit amet".to_string(),
    }
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, key: KeyEvent) {
    app.handle_key(key);
}

/// Type text into the focused field one key at a time
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

/// Focus the input with `placeholder`, erase it, and type `text`
pub fn fill_field(app: &mut App, placeholder: &str, text: &str) {
    let kind = app
        .state
        .form
        .field_by_placeholder(placeholder)
        .unwrap_or_else(|| panic!("no field with placeholder {placeholder:?}"));
    app.state.form.focus(kind);

    let existing = app.state.form.field(kind).value().chars().count();
    for _ in 0..existing {
        press(app, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    }
    type_text(app, text);
}

/// Fill every input; the confirmation repeats the password
pub fn fill_form_correctly(app: &mut App, data: &RegistrationData) {
    fill_field(app, "Name", &data.name);
    fill_field(app, "e-mail", &data.email);
    fill_field(app, "Password", &data.password);
    fill_field(app, "Password Confirmation", &data.password);
    fill_field(app, "Access Code", &data.access_code);
}
