//! Trait abstraction for the signup client to enable mocking in tests

use super::client::RegistrationPayload;
use super::error::SignupError;
use async_trait::async_trait;

/// Trait for signup service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupClientTrait: Send + Sync {
    /// Send one registration request; `Ok` on any 2xx response
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), SignupError>;
}
