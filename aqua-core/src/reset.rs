//! Password reset flow.
//!
//! A two-phase form: phase 1 collects an email and asks the identity service
//! to send a reset link; phase 2 collects the new password and submits it.
//! The flow is a small state machine (`Idle → EmailSent → PasswordUpdated`)
//! kept free of UI types so it can be tested against a mock service.
//!
//! Failures are single-attempt: no retry, no backoff. The user retries by
//! pressing the button again.

use thiserror::Error;
use tracing::{info, warn};

use crate::identity::{IdentityError, IdentityService};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Message shown after the reset email request succeeds.
pub const EMAIL_SENT_MESSAGE: &str = "Password reset email sent. Check your inbox.";

/// Message shown after the password update succeeds.
pub const PASSWORD_UPDATED_MESSAGE: &str = "Password updated. Returning to home…";

/// Client-side validation failures. Each rule has its own message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResetFormError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,

    #[error("Password must contain at least one letter")]
    NoLetter,

    #[error("Passwords do not match")]
    Mismatch,
}

/// Checks that an email was entered. Presence only; format is the identity
/// service's concern.
pub fn validate_email(email: &str) -> Result<(), ResetFormError> {
    if email.trim().is_empty() {
        return Err(ResetFormError::EmailRequired);
    }
    Ok(())
}

/// Applies the new-password rules in order and reports the first failure:
/// length, at least one letter, confirmation match.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), ResetFormError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ResetFormError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ResetFormError::NoLetter);
    }
    if password != confirmation {
        return Err(ResetFormError::Mismatch);
    }
    Ok(())
}

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPhase {
    #[default]
    Idle,
    EmailSent,
    PasswordUpdated,
}

/// Screen-local flow state. Created on screen mount, destroyed with it.
///
/// Invariant: after any completed operation at most one of the error and
/// success messages is set. The private setters enforce it.
#[derive(Debug, Default)]
pub struct ResetFlow {
    phase: ResetPhase,
    loading: bool,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl ResetFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ResetPhase {
        self.phase
    }

    /// True while a service call is in flight. Screens disable their submit
    /// buttons on this, so no two operations from one screen overlap.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.success_message = None;
    }

    fn set_success(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
        self.error_message = None;
    }

    /// Marks a service call as started: sets `loading`, clears both messages.
    pub fn begin_operation(&mut self) {
        self.loading = true;
        self.error_message = None;
        self.success_message = None;
    }

    /// Surfaces a client-side validation failure. No phase change; nothing
    /// reaches the network.
    pub fn fail_validation(&mut self, err: ResetFormError) {
        self.loading = false;
        self.set_error(err.to_string());
    }

    /// Applies the outcome of the reset-email request.
    pub fn finish_request(&mut self, result: Result<(), IdentityError>) {
        self.loading = false;
        match result {
            Ok(()) => {
                info!("reset email requested");
                self.phase = ResetPhase::EmailSent;
                self.set_success(EMAIL_SENT_MESSAGE);
            }
            Err(err) => {
                warn!(error = %err, "reset email request failed");
                self.set_error(err.user_message());
            }
        }
    }

    /// Applies the outcome of the password update. On failure the flow stays
    /// in `EmailSent` so the user can resubmit.
    pub fn finish_update(&mut self, result: Result<(), IdentityError>) {
        self.loading = false;
        match result {
            Ok(()) => {
                info!("password updated");
                self.phase = ResetPhase::PasswordUpdated;
                self.set_success(PASSWORD_UPDATED_MESSAGE);
            }
            Err(err) => {
                warn!(error = %err, "password update failed");
                self.set_error(err.user_message());
            }
        }
    }

    /// Phase 1 end to end: validate the email, then ask the service for a
    /// reset link. Validation failures never reach the service.
    pub async fn request_reset(&mut self, service: &dyn IdentityService, email: &str) {
        if self.loading {
            return;
        }
        if let Err(err) = validate_email(email) {
            self.fail_validation(err);
            return;
        }
        self.begin_operation();
        let result = service.reset_password(email.trim()).await;
        self.finish_request(result);
    }

    /// Phase 2 end to end: validate the new password locally, then submit it.
    pub async fn submit_new_password(
        &mut self,
        service: &dyn IdentityService,
        password: &str,
        confirmation: &str,
    ) {
        if self.loading {
            return;
        }
        if let Err(err) = validate_new_password(password, confirmation) {
            self.fail_validation(err);
            return;
        }
        self.begin_operation();
        let result = service.update_password(password).await;
        self.finish_update(result);
    }
}
