//! Contact form submission.
//!
//! Both inquiry forms (home-page section and the contact page) share this
//! state machine: `Idle -> Submitting -> {Success, Error}`. The message
//! length bound is checked before any network activity, the POST is
//! urlencoded, and the request is raced against a timeout so a silent
//! endpoint cannot leave the form stuck in `Submitting`.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

/// Upper bound on the message field, enforced client-side.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Abort the request if the endpoint has not answered within this window.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Where inquiries are POSTed. The original deployment left this
/// unconfigured; any real deployment must point it at a form backend.
pub const INQUIRY_ENDPOINT: &str = "https://";

/// Banner text shown for every failure cause; the causes are deliberately
/// not distinguished to the visitor.
pub const ERROR_BANNER: &str = "Something went wrong. Please try again or check message length.";
pub const SUCCESS_BANNER: &str = "Thank you! Your message has been sent successfully.";

/// Fields of an inquiry. `company` is only collected on the contact page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub message: String,
}

impl InquiryForm {
    /// Field pairs in wire order.
    fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ];
        if let Some(company) = &self.company {
            pairs.push(("company", company.as_str()));
        }
        pairs.push(("message", self.message.as_str()));
        pairs
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        let len = self.message.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(SubmitError::MessageTooLong { len });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("message is {len} characters, limit is {MAX_MESSAGE_LEN}")]
    MessageTooLong { len: usize },
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("request timed out after {SUBMIT_TIMEOUT_MS}ms")]
    Timeout,
}

/// Submission state as rendered by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn from_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmitStatus::Success,
            Err(_) => SubmitStatus::Error,
        }
    }

    /// Editing a field clears a stale error banner but leaves every other
    /// state alone.
    pub fn on_edit(self) -> Self {
        match self {
            SubmitStatus::Error => SubmitStatus::Idle,
            other => other,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

/// Validate and POST one inquiry.
///
/// The caller is responsible for moving its status signal to `Submitting`
/// first and disabling the submit control, so at most one request per form
/// instance is in flight.
pub async fn submit_inquiry(form: &InquiryForm) -> Result<(), SubmitError> {
    form.validate()?;

    let request = Request::post(INQUIRY_ENDPOINT)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode())
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(SUBMIT_TIMEOUT_MS));

    let response = match future::select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| SubmitError::Network(e.to_string()))?,
        Either::Right(((), _)) => {
            log::warn!("inquiry submission timed out after {SUBMIT_TIMEOUT_MS}ms");
            return Err(SubmitError::Timeout);
        }
    };

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> InquiryForm {
        InquiryForm {
            name: "Aziza Karimova".into(),
            email: "aziza@example.com".into(),
            phone: "+998 90 123 45 67".into(),
            company: None,
            message: "Interested in granulated urea pricing.".into(),
        }
    }

    #[test]
    fn message_over_limit_fails_validation() {
        let mut form = sample_form();
        form.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert!(matches!(
            form.validate(),
            Err(SubmitError::MessageTooLong { len: 501 })
        ));
    }

    #[test]
    fn message_at_limit_passes_validation() {
        let mut form = sample_form();
        form.message = "x".repeat(MAX_MESSAGE_LEN);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let mut form = sample_form();
        form.message = "\u{451}".repeat(MAX_MESSAGE_LEN); // 2 bytes each
        assert!(form.validate().is_ok());
    }

    #[test]
    fn encode_orders_and_escapes_fields() {
        let mut form = sample_form();
        form.message = "urea & prices?".into();
        let body = form.encode();
        assert_eq!(
            body,
            "name=Aziza%20Karimova&email=aziza%40example.com\
             &phone=%2B998%2090%20123%2045%2067&message=urea%20%26%20prices%3F"
        );
    }

    #[test]
    fn encode_includes_company_only_when_collected() {
        let mut form = sample_form();
        assert!(!form.encode().contains("company="));

        form.company = Some("EcoAgro LLC".into());
        let body = form.encode();
        assert!(body.contains("&company=EcoAgro%20LLC&message="));
    }

    #[test]
    fn encode_keeps_empty_company_field() {
        // The contact page always posts the field, even when blank.
        let mut form = sample_form();
        form.company = Some(String::new());
        assert!(form.encode().contains("&company=&message="));
    }

    #[test]
    fn status_follows_submit_result() {
        assert_eq!(SubmitStatus::from_result(&Ok(())), SubmitStatus::Success);
        assert_eq!(
            SubmitStatus::from_result(&Err(SubmitError::Timeout)),
            SubmitStatus::Error
        );
        assert_eq!(
            SubmitStatus::from_result(&Err(SubmitError::Status(500))),
            SubmitStatus::Error
        );
    }

    #[test]
    fn editing_clears_only_the_error_state() {
        assert_eq!(SubmitStatus::Error.on_edit(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Idle.on_edit(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Success.on_edit(), SubmitStatus::Success);
        assert_eq!(SubmitStatus::Submitting.on_edit(), SubmitStatus::Submitting);
    }

    #[test]
    fn default_form_is_empty() {
        let form = InquiryForm::default();
        assert!(form.name.is_empty());
        assert!(form.company.is_none());
        assert!(form.validate().is_ok());
    }
}
