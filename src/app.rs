//! Application state and core logic

use crate::signup::{SignupClientTrait, SignupError};
use crate::state::{AppState, Form, FormStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

type SubmissionResult = Result<(), SignupError>;

/// Status bar hint left by a blocked submit, cleared by the next edit
pub const FIX_FIELDS_HINT: &str = "Fix the highlighted fields before submitting";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Signup service client, shared with in-flight submissions
    client: Arc<dyn SignupClientTrait>,
    /// Resolved submissions are delivered here by their tasks
    outcome_tx: mpsc::UnboundedSender<SubmissionResult>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn SignupClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Submit control is enabled only while every field is valid
    pub fn can_submit(&self) -> bool {
        self.state.form.is_valid()
    }

    /// Handle a key event on the registration form
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.form.is_submit_row_active();
        // AltGr arrives as Ctrl+Alt on Windows, so only a lone modifier is a chord
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        let alt = key.modifiers.contains(KeyModifiers::ALT)
            && !key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Char('n') if ctrl => self.state.reset(),
            KeyCode::Enter if on_submit_row => {
                self.submit();
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !ctrl && !alt => {
                self.state.form.input_char(c);
                self.clear_fix_fields_hint();
            }
            KeyCode::Backspace => {
                self.state.form.backspace();
                self.clear_fix_fields_hint();
            }
            _ => {}
        }
    }

    /// Send the form if it is valid.
    ///
    /// Returns true when a request was spawned. Each call spawns its own
    /// request; whichever resolves last decides the final status.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            tracing::debug!("Submit blocked: form has validation errors");
            self.state.form.touch_all();
            self.state.status_message = Some(FIX_FIELDS_HINT.to_string());
            return false;
        }

        let payload = self.state.form.payload();
        tracing::info!(email = %payload.email, "Registration submitted");

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.register(&payload).await;
            // The receiver lives as long as the app
            let _ = tx.send(result);
        });

        self.state.pending_submissions += 1;
        self.state.status_message = Some("Submitting...".to_string());
        true
    }

    fn clear_fix_fields_hint(&mut self) {
        if self.state.status_message.as_deref() == Some(FIX_FIELDS_HINT) {
            self.state.status_message = None;
        }
    }

    /// Apply every submission that resolved since the last call
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.outcome_rx.try_recv() {
            self.apply_outcome(result);
        }
    }

    /// Wait for the next submission to resolve and apply it
    #[cfg(test)]
    pub async fn next_submission(&mut self) -> Option<FormStatus> {
        let result = self.outcome_rx.recv().await?;
        self.apply_outcome(result);
        Some(self.state.status.clone())
    }

    fn apply_outcome(&mut self, result: SubmissionResult) {
        self.state.pending_submissions = self.state.pending_submissions.saturating_sub(1);
        if let Err(ref err) = result {
            tracing::warn!("Registration failed: {err}");
        }
        self.state.status = FormStatus::from_result(&result);
        self.state.status_message = if self.state.is_submitting() {
            Some("Submitting...".to_string())
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::{MockSignupClientTrait, RegistrationPayload};
    use crate::state::{FieldKind, REGISTRATION_SUCCEEDED, SERVICE_UNREACHABLE, SUBMIT_ROW};
    use crate::test_support::{ctrl, fill_field, fill_form_correctly, press, sample_data, type_text};
    use crate::validation::PASSWORDS_DO_NOT_MATCH;
    use pretty_assertions::assert_eq;

    fn app_with(mock: MockSignupClientTrait) -> App {
        App::new(Arc::new(mock))
    }

    fn idle_app() -> App {
        let mut mock = MockSignupClientTrait::new();
        mock.expect_register().never();
        app_with(mock)
    }

    #[tokio::test]
    async fn test_submit_blocked_on_fresh_form() {
        let mut app = idle_app();
        assert!(!app.can_submit());

        press(&mut app, ctrl('s'));
        assert_eq!(app.state.pending_submissions, 0);
        assert!(app.state.form.name.is_touched());
        assert!(app.state.status.is_empty());
        assert_eq!(app.state.status_message.as_deref(), Some(FIX_FIELDS_HINT));
    }

    #[tokio::test]
    async fn test_edit_clears_blocked_submit_hint() {
        let mut app = idle_app();
        press(&mut app, ctrl('s'));
        assert_eq!(app.state.status_message.as_deref(), Some(FIX_FIELDS_HINT));

        type_text(&mut app, "A");
        assert!(app.state.status_message.is_none());

        press(&mut app, ctrl('s'));
        press(&mut app, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(app.state.status_message.is_none());
    }

    #[tokio::test]
    async fn test_altgr_characters_are_typed() {
        let mut app = idle_app();
        fill_field(&mut app, "e-mail", "ana");
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        press(&mut app, KeyEvent::new(KeyCode::Char('@'), altgr));
        type_text(&mut app, "example.com");
        assert_eq!(app.state.form.email.value(), "ana@example.com");
        assert!(app.state.form.email.is_valid());

        // A lone Alt chord is still not text
        press(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.state.form.email.value(), "ana@example.com");
    }

    #[tokio::test]
    async fn test_padded_email_blocks_submit() {
        let mut app = idle_app();
        let mut data = sample_data();
        data.email = format!(" {} ", data.email);
        fill_form_correctly(&mut app, &data);

        assert!(!app.state.form.email.is_valid());
        assert!(!app.can_submit());
        assert!(!app.submit());
    }

    #[tokio::test]
    async fn test_enter_on_fields_moves_focus() {
        let mut app = idle_app();
        for expected in 1..=SUBMIT_ROW {
            press(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
            assert_eq!(app.state.form.active_field(), expected);
        }
        // Enter on the button with an invalid form sends nothing
        press(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.state.pending_submissions, 0);
    }

    #[tokio::test]
    async fn test_typing_updates_focused_field() {
        let mut app = idle_app();
        type_text(&mut app, "Ana");
        assert_eq!(app.state.form.name.value(), "Ana");

        press(&mut app, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.state.form.name.value(), "An");

        // Control chords are not text
        press(&mut app, ctrl('x'));
        assert_eq!(app.state.form.name.value(), "An");
    }

    #[tokio::test]
    async fn test_email_validation_through_keys() {
        let mut app = idle_app();
        fill_field(&mut app, "e-mail", "teste@teste");
        assert_eq!(app.state.form.email.errors(), ["Invalid email format".to_string()]);

        fill_field(&mut app, "e-mail", "teste@teste.com");
        assert!(app.state.form.email.is_valid());
    }

    #[tokio::test]
    async fn test_password_change_reinvalidates_confirmation() {
        let mut app = idle_app();
        fill_field(&mut app, "Password", "Teste@1");
        fill_field(&mut app, "Password Confirmation", "Teste@2");
        assert_eq!(
            app.state.form.password_confirmation.errors(),
            [PASSWORDS_DO_NOT_MATCH.to_string()]
        );

        fill_field(&mut app, "Password Confirmation", "Teste@1");
        assert!(app.state.form.password_confirmation.is_valid());

        fill_field(&mut app, "Password", "Teste@12");
        assert!(!app.state.form.password_confirmation.is_valid());
    }

    #[tokio::test]
    async fn test_valid_form_sends_exactly_one_request() {
        let data = sample_data();
        let expected = RegistrationPayload {
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            access_code: data.access_code.clone(),
        };

        let mut mock = MockSignupClientTrait::new();
        mock.expect_register()
            .withf(move |payload| *payload == expected)
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(mock);

        fill_form_correctly(&mut app, &data);
        assert!(app.can_submit());

        app.state.form.set_active_field(SUBMIT_ROW);
        press(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.state.is_submitting());

        let status = app.next_submission().await.unwrap();
        assert_eq!(status, FormStatus::success());
        assert_eq!(app.state.status.message, REGISTRATION_SUCCEEDED);
        assert!(!app.state.is_submitting());
        assert!(app.state.status_message.is_none());
    }

    #[tokio::test]
    async fn test_server_message_is_shown_on_rejection() {
        let mut mock = MockSignupClientTrait::new();
        mock.expect_register().times(1).returning(|_| {
            Err(SignupError::Rejected {
                status: 400,
                message: Some("user already exists".to_string()),
            })
        });
        let mut app = app_with(mock);

        fill_form_correctly(&mut app, &sample_data());
        press(&mut app, ctrl('s'));
        app.next_submission().await.unwrap();

        assert_eq!(app.state.status, FormStatus::failure("user already exists"));
        // Form stays editable after a failure
        assert_eq!(app.state.form.name.value(), sample_data().name);
        assert!(app.can_submit());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback_message() {
        let mut mock = MockSignupClientTrait::new();
        mock.expect_register()
            .times(1)
            .returning(|_| Err(SignupError::Transport("connection refused".to_string())));
        let mut app = app_with(mock);

        fill_form_correctly(&mut app, &sample_data());
        app.submit();
        app.next_submission().await.unwrap();

        assert!(app.state.status.failed);
        assert_eq!(app.state.status.message, SERVICE_UNREACHABLE);
    }

    #[tokio::test]
    async fn test_overlapping_submissions_are_all_sent() {
        let mut mock = MockSignupClientTrait::new();
        mock.expect_register().times(2).returning(|_| Ok(()));
        let mut app = app_with(mock);

        fill_form_correctly(&mut app, &sample_data());
        assert!(app.submit());
        assert!(app.submit());
        assert_eq!(app.state.pending_submissions, 2);

        app.next_submission().await.unwrap();
        assert_eq!(app.state.status_message.as_deref(), Some("Submitting..."));
        app.next_submission().await.unwrap();
        assert_eq!(app.state.pending_submissions, 0);
    }

    #[tokio::test]
    async fn test_poll_submissions_drains_resolved_requests() {
        let mut mock = MockSignupClientTrait::new();
        mock.expect_register().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);

        fill_form_correctly(&mut app, &sample_data());
        app.submit();

        while app.state.is_submitting() {
            tokio::task::yield_now().await;
            app.poll_submissions();
        }
        assert_eq!(app.state.status, FormStatus::success());
    }

    #[tokio::test]
    async fn test_reset_shortcut_clears_form_and_status() {
        let mut app = idle_app();
        fill_form_correctly(&mut app, &sample_data());
        app.state.status = FormStatus::failure("user already exists");

        press(&mut app, ctrl('n'));
        assert!(app.state.status.is_empty());
        assert_eq!(app.state.form.field(FieldKind::Email).value(), "");
        assert!(!app.can_submit());
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut app = idle_app();
        assert!(!app.should_quit());
        press(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit());
    }
}
