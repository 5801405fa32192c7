//! Lead-generation submissions: listing suggestions, event submissions,
//! and contact messages. Validated here, then relayed to an external
//! webhook that handles email delivery.

pub mod forward;
pub mod models;
pub mod validate;

pub use forward::SubmissionForwarder;
pub use models::{ContactMessage, DaycareSubmission, EventSubmission, ProviderSubmission};
