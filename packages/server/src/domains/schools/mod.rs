//! Schools accepting autism-related scholarships.

pub mod data;
pub mod models;

pub use models::School;
