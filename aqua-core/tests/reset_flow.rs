//! End-to-end tests for the password reset flow against a mock identity
//! service.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use aqua_core::reset::{EMAIL_SENT_MESSAGE, PASSWORD_UPDATED_MESSAGE, ResetFlow, ResetPhase};
use aqua_core::{IdentityError, IdentityService};

/// Records every call and answers with a preconfigured result.
struct MockIdentity {
    reset_calls: AtomicUsize,
    update_calls: AtomicUsize,
    last_email: Mutex<Option<String>>,
    reset_result: Mutex<Result<(), IdentityError>>,
    update_result: Mutex<Result<(), IdentityError>>,
}

impl MockIdentity {
    fn with_results(
        reset_result: Result<(), IdentityError>,
        update_result: Result<(), IdentityError>,
    ) -> Self {
        Self {
            reset_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            last_email: Mutex::new(None),
            reset_result: Mutex::new(reset_result),
            update_result: Mutex::new(update_result),
        }
    }

    fn ok() -> Self {
        Self::with_results(Ok(()), Ok(()))
    }

    fn failing_with(message: &str) -> Self {
        let err = IdentityError::Service {
            message: message.to_string(),
        };
        Self::with_results(Err(err.clone()), Err(err))
    }
}

#[async_trait]
impl IdentityService for MockIdentity {
    async fn reset_password(&self, email: &str) -> Result<(), IdentityError> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_email.lock().unwrap() = Some(email.to_string());
        self.reset_result.lock().unwrap().clone()
    }

    async fn update_password(&self, _new_password: &str) -> Result<(), IdentityError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.update_result.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn empty_email_never_reaches_the_service() {
    let service = MockIdentity::ok();
    let mut flow = ResetFlow::new();

    flow.request_reset(&service, "   ").await;

    assert_eq!(service.reset_calls.load(Ordering::SeqCst), 0);
    assert_eq!(flow.phase(), ResetPhase::Idle);
    assert_eq!(flow.error_message(), Some("Email is required"));
}

#[tokio::test]
async fn invalid_password_never_reaches_the_service() {
    let service = MockIdentity::ok();
    let mut flow = ResetFlow::new();
    flow.request_reset(&service, "user@example.com").await;

    flow.submit_new_password(&service, "12345", "12345").await;
    assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        flow.error_message(),
        Some("Password must be at least 6 characters")
    );

    flow.submit_new_password(&service, "123456", "123456").await;
    assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        flow.error_message(),
        Some("Password must contain at least one letter")
    );

    flow.submit_new_password(&service, "abc123", "abc124").await;
    assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    assert_eq!(flow.error_message(), Some("Passwords do not match"));

    // Validation failures never move the flow backwards.
    assert_eq!(flow.phase(), ResetPhase::EmailSent);
}

#[tokio::test]
async fn successful_request_transitions_to_email_sent() {
    let service = MockIdentity::ok();
    let mut flow = ResetFlow::new();

    flow.request_reset(&service, "  user@example.com  ").await;

    assert_eq!(service.reset_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        service.last_email.lock().unwrap().as_deref(),
        Some("user@example.com")
    );
    assert_eq!(flow.phase(), ResetPhase::EmailSent);
    assert_eq!(flow.success_message(), Some(EMAIL_SENT_MESSAGE));
    assert!(flow.error_message().is_none());
}

#[tokio::test]
async fn failed_request_surfaces_bare_reason_and_stays_idle() {
    let service = MockIdentity::failing_with("account not found");
    let mut flow = ResetFlow::new();

    flow.request_reset(&service, "user@example.com").await;

    assert_eq!(flow.phase(), ResetPhase::Idle);
    // Reason verbatim, no error-type wrapper.
    assert_eq!(flow.error_message(), Some("account not found"));
    assert!(flow.success_message().is_none());
}

#[tokio::test]
async fn successful_update_completes_the_flow() {
    let service = MockIdentity::ok();
    let mut flow = ResetFlow::new();
    flow.request_reset(&service, "user@example.com").await;

    flow.submit_new_password(&service, "abc123", "abc123").await;

    assert_eq!(service.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(flow.phase(), ResetPhase::PasswordUpdated);
    assert_eq!(flow.success_message(), Some(PASSWORD_UPDATED_MESSAGE));
}

#[tokio::test]
async fn user_can_retry_after_failure() {
    let service = MockIdentity::failing_with("service unavailable");
    let mut flow = ResetFlow::new();

    flow.request_reset(&service, "user@example.com").await;
    assert_eq!(flow.phase(), ResetPhase::Idle);

    // Re-pressing the button is the only retry mechanism.
    *service.reset_result.lock().unwrap() = Ok(());
    flow.request_reset(&service, "user@example.com").await;

    assert_eq!(service.reset_calls.load(Ordering::SeqCst), 2);
    assert_eq!(flow.phase(), ResetPhase::EmailSent);
}
