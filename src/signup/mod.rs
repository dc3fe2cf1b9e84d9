//! Signup service client module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::{RegistrationPayload, SignupClient};
pub use error::SignupError;
pub use traits::SignupClientTrait;

#[cfg(test)]
pub use traits::MockSignupClientTrait;
