//! Abstract identity service collaborator.
//!
//! The application never talks to the identity backend directly; screens go
//! through this trait so the reset flow can be exercised against a mock.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by (or on the way to) the identity service.
///
/// Everything collapses to a single user-visible message string; the variants
/// exist so callers that log can tell transport problems from rejections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The service processed the request and rejected it.
    #[error("identity service rejected the request: {message}")]
    Service { message: String },

    /// The request never completed (DNS, TLS, timeout, connection reset).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with something we could not interpret.
    #[error("unexpected identity service response: {0}")]
    InvalidResponse(String),
}

impl IdentityError {
    /// The bare human-readable reason, without the error-type wrapper.
    ///
    /// Screens display this verbatim; the wrapped [`std::fmt::Display`] form
    /// is for logs only.
    pub fn user_message(&self) -> &str {
        match self {
            IdentityError::Service { message } => message,
            IdentityError::Network(message) => message,
            IdentityError::InvalidResponse(message) => message,
        }
    }
}

/// External system of record for credentials and password-reset tokens.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Asks the service to email a password-reset link to `email`.
    async fn reset_password(&self, email: &str) -> Result<(), IdentityError>;

    /// Submits the new password for the account being reset.
    async fn update_password(&self, new_password: &str) -> Result<(), IdentityError>;
}
