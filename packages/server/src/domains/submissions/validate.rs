//! Form validation.
//!
//! Collects every problem in one pass so the form can show all field errors
//! at once, then returns them as a single `ApiError::Validation`.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::models::{ContactMessage, DaycareSubmission, EventSubmission, ProviderSubmission};
use crate::common::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap();
}

/// Accumulates field-level problems across one validation pass.
#[derive(Debug, Default)]
pub struct Problems(Vec<String>);

impl Problems {
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(format!("{field} is required"));
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !EMAIL_RE.is_match(value.trim()) {
            self.0.push(format!("{field} is not a valid email address"));
        }
    }

    /// Optional URL field: absent passes, present must parse as http(s).
    pub fn url(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return;
        };
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => self.0.push(format!("{field} is not a valid URL")),
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}

impl ProviderSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Problems::default();
        problems.require("name", &self.name);
        problems.require("email", &self.email);
        problems.email("email", &self.email);
        problems.url("website", self.website.as_deref());
        problems.finish()
    }
}

impl DaycareSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Problems::default();
        problems.require("name", &self.name);
        problems.require("email", &self.email);
        problems.email("email", &self.email);
        problems.url("website", self.website.as_deref());
        problems.finish()
    }
}

impl EventSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Problems::default();
        problems.require("name", &self.name);
        problems.require("email", &self.email);
        problems.email("email", &self.email);
        problems.url("website", self.website.as_deref());
        problems.finish()
    }
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Problems::default();
        problems.require("name", &self.name);
        problems.require("email", &self.email);
        problems.email("email", &self.email);
        problems.require("message", &self.message);
        problems.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Jordan Alvarez".to_string(),
            email: "jordan@example.com".to_string(),
            subject: None,
            message: "Do you list providers in Polk County?".to_string(),
        }
    }

    #[test]
    fn valid_contact_passes() {
        assert!(contact().validate().is_ok());
    }

    #[test]
    fn all_problems_reported_at_once() {
        let bad = ContactMessage {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            subject: None,
            message: " ".to_string(),
        };
        let err = bad.validate().unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(messages.len(), 3);
                assert!(messages.iter().any(|m| m.contains("name")));
                assert!(messages.iter().any(|m| m.contains("email")));
                assert!(messages.iter().any(|m| m.contains("message")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn website_must_be_http_when_present() {
        let mut submission = ProviderSubmission {
            name: "Bright Steps ABA".to_string(),
            contact_name: None,
            email: "intake@brightsteps.example".to_string(),
            phone: None,
            website: Some("ftp://brightsteps.example".to_string()),
            city: None,
            county: None,
            services: vec![],
            description: None,
        };
        assert!(submission.validate().is_err());

        submission.website = Some("https://brightsteps.example".to_string());
        assert!(submission.validate().is_ok());

        submission.website = None;
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn email_regex_rejects_common_typos() {
        for bad in ["plain", "a@b", "a@b.", "@example.com", "a b@example.com"] {
            let mut c = contact();
            c.email = bad.to_string();
            assert!(c.validate().is_err(), "{bad} should fail");
        }
    }
}
