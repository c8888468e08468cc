//! Newsletter signup popup and its submission state machine
//!
//! ```text
//! Idle --submit(valid)--> Submitting --ok--> Submitted
//!                              \----fail--> Error --edit/submit--> Idle
//! ```
//!
//! Invalid emails never leave `Idle` and never reach the gateway.
//! `Submitted` only resets when the popup is reopened.

use std::future::Future;

use thiserror::Error;
use validator::Validate;

use crate::models::SubscribeRequest;
use crate::validation::validate_email;

/// Generic, retryable message shown for any network or server failure
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Failed to subscribe. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeState {
    Idle,
    Submitting,
    Submitted,
    Error(String),
}

/// Errors surfaced by the signup form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("{0}")]
    InvalidInput(String),

    #[error("A subscription request is already in progress")]
    InProgress,

    #[error("Already subscribed")]
    AlreadySubmitted,

    #[error("No subscription request is in progress")]
    NotSubmitting,

    #[error("Failed to subscribe. Please try again.")]
    Failed,
}

/// Failure reported by a subscription gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),
}

/// Transport that delivers a subscription to the subscribe endpoint
pub trait SubscriptionGateway {
    fn subscribe(&self, request: &SubscribeRequest) -> impl Future<Output = Result<(), GatewayError>>;
}

/// The signup form inside the popup
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    email: String,
    first_name: String,
    last_name: String,
    state: SubscribeState,
    validation_error: Option<SubscribeError>,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            state: SubscribeState::Idle,
            validation_error: None,
        }
    }

    pub fn state(&self) -> &SubscribeState {
        &self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Local validation error from the last submit attempt
    pub fn validation_error(&self) -> Option<&SubscribeError> {
        self.validation_error.as_ref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.on_edit();
    }

    pub fn set_name(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.on_edit();
    }

    fn on_edit(&mut self) {
        self.validation_error = None;
        if matches!(self.state, SubscribeState::Error(_)) {
            self.state = SubscribeState::Idle;
        }
    }

    /// Validate the form and move to `Submitting`.
    ///
    /// Returns the request to send. On a validation failure the state stays
    /// `Idle` and nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<SubscribeRequest, SubscribeError> {
        match self.state {
            SubscribeState::Submitting => return Err(SubscribeError::InProgress),
            SubscribeState::Submitted => return Err(SubscribeError::AlreadySubmitted),
            SubscribeState::Error(_) => self.state = SubscribeState::Idle,
            SubscribeState::Idle => {}
        }

        let request = SubscribeRequest {
            email: self.email.clone(),
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
        }
        .normalized();

        if validate_email(&request.email).is_err() {
            self.validation_error = Some(SubscribeError::InvalidEmail);
            return Err(SubscribeError::InvalidEmail);
        }
        if let Err(e) = request.validate() {
            let err = SubscribeError::InvalidInput(e.to_string());
            self.validation_error = Some(err.clone());
            return Err(err);
        }

        self.validation_error = None;
        self.state = SubscribeState::Submitting;
        Ok(request)
    }

    /// Apply the gateway outcome to a pending submission. An outcome that
    /// arrives with no submission pending changes nothing and is an error.
    pub fn finish_submit(&mut self, outcome: Result<(), GatewayError>) -> Result<(), SubscribeError> {
        if self.state != SubscribeState::Submitting {
            return Err(SubscribeError::NotSubmitting);
        }
        match outcome {
            Ok(()) => {
                self.state = SubscribeState::Submitted;
                self.email.clear();
                Ok(())
            }
            Err(_) => {
                self.state = SubscribeState::Error(SUBSCRIBE_FAILED_MESSAGE.to_string());
                Err(SubscribeError::Failed)
            }
        }
    }

    /// Validate, send through `gateway`, and record the outcome. No retries.
    pub async fn submit<G: SubscriptionGateway>(&mut self, gateway: &G) -> Result<(), SubscribeError> {
        let request = self.begin_submit()?;
        let outcome = gateway.subscribe(&request).await;
        self.finish_submit(outcome)
    }
}

/// The popup that hosts the signup form.
///
/// Every "Subscribe" button on the page holds a handle to the same popup and
/// calls [`NewsletterPopup::open`] directly.
#[derive(Debug, Clone, Default)]
pub struct NewsletterPopup {
    is_open: bool,
    form: NewsletterForm,
}

impl NewsletterPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show the popup with a fresh form state; a typed email is kept.
    /// A request still in flight stays `Submitting` so it cannot be sent twice.
    pub fn open(&mut self) {
        self.is_open = true;
        self.form.validation_error = None;
        if self.form.state != SubscribeState::Submitting {
            self.form.state = SubscribeState::Idle;
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn form(&self) -> &NewsletterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NewsletterForm {
        &mut self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_stays_idle() {
        let mut form = NewsletterForm::new();
        form.set_email("not-an-email");
        assert_eq!(form.begin_submit(), Err(SubscribeError::InvalidEmail));
        assert_eq!(form.state(), &SubscribeState::Idle);
        assert_eq!(form.validation_error(), Some(&SubscribeError::InvalidEmail));

        form.set_email("user@example.com");
        assert!(form.validation_error().is_none());
    }

    #[test]
    fn test_success_path() {
        let mut form = NewsletterForm::new();
        form.set_email(" user@example.com ");
        let req = form.begin_submit().unwrap();
        assert_eq!(req.email, "user@example.com");
        assert!(req.first_name.is_none());
        assert_eq!(form.state(), &SubscribeState::Submitting);

        assert!(form.finish_submit(Ok(())).is_ok());
        assert_eq!(form.state(), &SubscribeState::Submitted);
        assert_eq!(form.email(), "");
        assert_eq!(form.begin_submit(), Err(SubscribeError::AlreadySubmitted));
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubscribeError::InProgress));
    }

    #[test]
    fn test_failure_then_edit_returns_to_idle() {
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");
        form.begin_submit().unwrap();
        assert_eq!(form.finish_submit(Err(GatewayError::Status(500))), Err(SubscribeError::Failed));
        assert_eq!(form.state(), &SubscribeState::Error(SUBSCRIBE_FAILED_MESSAGE.to_string()));
        assert_eq!(form.email(), "user@example.com");

        form.set_email("user@example.org");
        assert_eq!(form.state(), &SubscribeState::Idle);
    }

    #[test]
    fn test_failure_then_resubmit() {
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");
        form.begin_submit().unwrap();
        let _ = form.finish_submit(Err(GatewayError::Network("timeout".to_string())));
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.state(), &SubscribeState::Submitting);
    }

    #[test]
    fn test_names_are_sent_when_present() {
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");
        form.set_name("Ada", "");
        let req = form.begin_submit().unwrap();
        assert_eq!(req.first_name.as_deref(), Some("Ada"));
        assert!(req.last_name.is_none());
    }

    #[test]
    fn test_overlong_name_is_rejected_locally() {
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");
        form.set_name("x".repeat(150), "");
        assert!(matches!(form.begin_submit(), Err(SubscribeError::InvalidInput(_))));
        assert_eq!(form.state(), &SubscribeState::Idle);
    }

    #[test]
    fn test_popup_reopen_resets_submitted() {
        let mut popup = NewsletterPopup::new();
        assert!(!popup.is_open());
        popup.open();
        popup.form_mut().set_email("user@example.com");
        popup.form_mut().begin_submit().unwrap();
        popup.form_mut().finish_submit(Ok(())).unwrap();
        popup.close();
        assert!(!popup.is_open());
        assert_eq!(popup.form().state(), &SubscribeState::Submitted);

        popup.open();
        assert!(popup.is_open());
        assert_eq!(popup.form().state(), &SubscribeState::Idle);
    }

    #[test]
    fn test_reopen_keeps_request_in_flight() {
        let mut popup = NewsletterPopup::new();
        popup.open();
        popup.form_mut().set_email("user@example.com");
        popup.form_mut().begin_submit().unwrap();
        popup.close();

        popup.open();
        assert_eq!(popup.form().state(), &SubscribeState::Submitting);
        assert_eq!(popup.form_mut().begin_submit(), Err(SubscribeError::InProgress));
        assert!(popup.form_mut().finish_submit(Ok(())).is_ok());
        assert_eq!(popup.form().state(), &SubscribeState::Submitted);
    }

    #[test]
    fn test_outcome_without_pending_request_is_rejected() {
        let mut form = NewsletterForm::new();
        assert_eq!(
            form.finish_submit(Err(GatewayError::Status(500))),
            Err(SubscribeError::NotSubmitting)
        );
        assert_eq!(form.state(), &SubscribeState::Idle);

        form.set_email("user@example.com");
        form.begin_submit().unwrap();
        form.finish_submit(Ok(())).unwrap();
        assert_eq!(form.finish_submit(Ok(())), Err(SubscribeError::NotSubmitting));
        assert_eq!(form.state(), &SubscribeState::Submitted);
    }
}
