//! Daycares and early-learning centers.

pub mod data;
pub mod models;

pub use models::Daycare;
