//! HTTP client for the signup service
//!
//! Sends a single JSON `POST` per registration and turns non-2xx answers into
//! [`SignupError::Rejected`], carrying the server's `message` when the error
//! body has one.

use super::error::SignupError;
use super::traits::SignupClientTrait;
use crate::config::TuiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values submitted to the signup endpoint
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "codigoAcesso")]
    pub access_code: String,
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("access_code", &self.access_code)
            .finish()
    }
}

/// Error body returned by the server. `message` is either one string or a
/// list of validation messages.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

/// Pull the human-readable message out of an error body, if there is one
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        ErrorMessage::Single(message) => message,
        ErrorMessage::Many(messages) => messages.join("; "),
    };
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Client for the signup endpoint
pub struct SignupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SignupClient {
    /// Create a new client from configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SignupClientTrait for SignupClient {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), SignupError> {
        tracing::info!(email = %payload.email, endpoint = %self.endpoint, "Submitting registration");

        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Signup request failed: {e}");
                SignupError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Registration accepted");
            return Ok(());
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read signup error body: {e}");
            SignupError::Decode(e.to_string())
        })?;
        let message = extract_message(&body);
        tracing::warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "Registration rejected"
        );

        Err(SignupError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
