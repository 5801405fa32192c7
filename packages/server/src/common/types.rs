// Common types used across multiple domains and layers

use serde::{Deserialize, Serialize};

/// Contact information carried by every directory record.
///
/// All three channels are independently optional; records frequently have a
/// phone number but no website, or vice versa. Flattened into each record's
/// row and JSON representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}
