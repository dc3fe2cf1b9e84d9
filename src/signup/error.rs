//! Errors returned by the signup service boundary

use thiserror::Error;

/// Why a registration request did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// The server answered with a non-2xx status
    #[error("signup rejected with HTTP {status}")]
    Rejected {
        status: u16,
        /// Human-readable `message` from the error body, when present
        message: Option<String>,
    },
    /// The request never produced a response
    #[error("signup request failed: {0}")]
    Transport(String),
    /// The payload could not be encoded or the response could not be read
    #[error("signup response could not be read: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SignupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            SignupError::Decode(err.to_string())
        } else {
            SignupError::Transport(err.to_string())
        }
    }
}
