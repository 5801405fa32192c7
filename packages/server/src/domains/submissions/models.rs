//! Submission payloads.
//!
//! These are write-side value objects posted by the public forms. They are
//! never stored here; after validation they are forwarded verbatim to the
//! editorial webhook.

use serde::{Deserialize, Serialize};

/// "List your practice" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSubmission {
    pub name: String,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub description: Option<String>,
}

/// "Suggest a daycare" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaycareSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub description: Option<String>,
}

/// "Submit an event" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSubmission {
    pub name: String,
    pub email: String,
    pub date: Option<String>,
    pub city: Option<String>,
    pub venue: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

/// Contact-page message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}
