// Common types and utilities shared across the application

pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod types;

pub use entity_ids::*;
pub use errors::ApiError;
pub use id::{Id, V4, V7};
pub use types::*;
