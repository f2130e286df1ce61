//! Contact form submission.
//!
//! The relay endpoint is an opaque third-party collaborator: we post the
//! form as JSON and reduce whatever comes back to success or failure.
//! With no endpoint configured the submission is simulated, which is what
//! the site ships.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A filled-in contact form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validation and submission failures, surfaced to the user as a simple
/// failure notification. No retry policy.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("email address looks invalid")]
    InvalidEmail,

    #[error("relay rejected the submission: {0}")]
    Relay(String),
}

/// How a submission concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Accepted by the configured relay.
    Sent,
    /// No relay configured; success was simulated.
    Simulated,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::EmptyField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyField("message"));
        }
        // Same bar the browser's type="email" sets: something@something
        let (local, domain) = self
            .email
            .split_once('@')
            .ok_or(ContactError::InvalidEmail)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Handle to the form-relay boundary.
pub struct ContactRelay {
    endpoint: Option<String>,
}

impl ContactRelay {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    /// Validate and submit the form. Blocking; callers on an async runtime
    /// should wrap this in `spawn_blocking`.
    pub fn submit(&self, form: &ContactForm) -> Result<ContactOutcome, ContactError> {
        form.validate()?;

        let Some(url) = &self.endpoint else {
            log::info!("no relay endpoint configured; simulating submission from {}", form.name);
            return Ok(ContactOutcome::Simulated);
        };

        let response = ureq::post(url)
            .send_json(serde_json::json!({
                "name": form.name,
                "email": form.email,
                "message": form.message,
            }))
            .map_err(|e| ContactError::Relay(e.to_string()))?;

        log::info!("contact relay accepted submission ({})", response.status());
        Ok(ContactOutcome::Sent)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(form("Ada", "ada@example.com", "hello").validate().is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            form("", "a@b.c", "hi").validate(),
            Err(ContactError::EmptyField("name"))
        ));
        assert!(matches!(
            form("Ada", "", "hi").validate(),
            Err(ContactError::EmptyField("email"))
        ));
        assert!(matches!(
            form("Ada", "a@b.c", "   ").validate(),
            Err(ContactError::EmptyField("message"))
        ));
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["plainaddress", "@nodomain", "nolocal@", "two@@ats"] {
            assert!(
                matches!(form("Ada", email, "hi").validate(), Err(ContactError::InvalidEmail)),
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn test_no_endpoint_simulates() {
        let relay = ContactRelay::new(None);
        let outcome = relay.submit(&form("Ada", "ada@example.com", "hi")).unwrap();
        assert_eq!(outcome, ContactOutcome::Simulated);
    }

    #[test]
    fn test_invalid_form_never_reaches_relay() {
        // Endpoint is unreachable on purpose; validation must fail first
        let relay = ContactRelay::new(Some("http://127.0.0.1:1/contact".to_string()));
        assert!(matches!(
            relay.submit(&form("", "", "")),
            Err(ContactError::EmptyField("name"))
        ));
    }
}
